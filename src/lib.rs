//! A terminal viewer for a fixed catalog of rotating 3D primitives.
//!
//! [`catalog`] maps shape keys to static [`catalog::ShapeSpec`] entries,
//! [`render_loop::RenderLoop`] owns the scene and advances rotation once per
//! frame, and [`app::App`] drives it from crossterm input.

pub mod app;
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod logging;
pub mod math;
pub mod render_loop;
pub mod scene;
pub mod state;
pub mod vertex;

pub use catalog::{ShapeKey, ShapeSpec};
pub use error::{Error, Result};
pub use render_loop::RenderLoop;
