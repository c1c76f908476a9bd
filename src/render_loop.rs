use crate::catalog;
use crate::graphics::FrameBuffer;
use crate::scene::{ActiveShape, Camera, Scene};
use crate::state::{Panels, RotationState, Screen, ROTATION_SPEED};
use log::{debug, info};

/// Owns the scene, camera, framebuffer, rotation and panel state.
///
/// Every operation is total: with no active shape, rotating and removing are
/// silent no-ops.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    scene: Scene,
    camera: Camera,
    frame: FrameBuffer,
    rotation: RotationState,
    panels: Panels,
    frames_rendered: u64,
}

impl RenderLoop {
    /// Creates a loop rendering into a `width` x `height` pixel framebuffer
    pub fn new(width: usize, height: usize) -> Self {
        RenderLoop {
            scene: Scene::new(),
            camera: Camera::new(aspect_ratio(width, height)),
            frame: FrameBuffer::new(width, height),
            rotation: RotationState::default(),
            panels: Panels::selection(),
            frames_rendered: 0,
        }
    }

    /// Shows the catalog entry for `key` on the detail screen.
    ///
    /// Returns `false` and changes nothing when the key is unknown.
    pub fn select(&mut self, key: &str) -> bool {
        let Some(spec) = catalog::lookup(key) else {
            debug!("ignoring unknown shape key {key:?}");
            return false;
        };

        if let Some(previous) = self.scene.remove() {
            debug!("removed {}", previous.spec.key);
        }
        self.scene.add(ActiveShape::new(spec));
        self.rotation.speed = ROTATION_SPEED;
        self.rotation.reset();
        self.panels = Panels::detail(spec.title, spec.description);

        info!("showing {} ({} triangles)", spec.key, self.active_triangles());
        true
    }

    /// Advances rotation by one step, unless paused or empty, then re-renders
    pub fn frame(&mut self) {
        if self.scene.shape().is_some() {
            self.rotation.advance();
        }
        self.scene
            .render(&self.camera, &self.rotation.angles, &mut self.frame);
        self.frames_rendered += 1;
    }

    pub fn pause(&mut self) {
        debug!("rotation paused");
        self.rotation.paused = true;
    }

    pub fn resume(&mut self) {
        debug!("rotation resumed");
        self.rotation.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        if self.rotation.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Zeroes every angle and resumes rotation
    pub fn reset(&mut self) {
        self.rotation.reset();
        debug!("rotation reset");
        self.resume();
    }

    /// Detaches the active shape and switches back to the selection screen
    pub fn return_to_selection(&mut self) {
        if let Some(previous) = self.scene.remove() {
            debug!("returned to selection from {}", previous.spec.key);
        }
        self.rotation.reset();
        self.panels = Panels::selection();
    }

    /// Recomputes the camera aspect ratio and framebuffer size
    pub fn resize(&mut self, width: usize, height: usize) {
        debug!("resized to {width}x{height} pixels");
        self.camera.set_aspect(aspect_ratio(width, height));
        self.frame.resize(width, height);
    }

    pub fn active_shape(&self) -> Option<&ActiveShape> {
        self.scene.shape()
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn screen(&self) -> Screen {
        self.panels.screen()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn active_triangles(&self) -> usize {
        self.scene.shape().map_or(0, |shape| shape.mesh.len())
    }
}

fn aspect_ratio(width: usize, height: usize) -> f64 {
    if height == 0 {
        1.0
    } else {
        width as f64 / height as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_without_a_shape_keep_angles_at_zero() {
        let mut render_loop = RenderLoop::new(16, 16);
        for _ in 0..5 {
            render_loop.frame();
        }
        assert_eq!(render_loop.rotation().angles, [0.0; 3]);
        assert_eq!(render_loop.frames_rendered(), 5);
    }

    #[test]
    fn pause_state_survives_switching_shapes() {
        let mut render_loop = RenderLoop::new(16, 16);
        render_loop.select("cube");
        render_loop.pause();
        render_loop.select("torus");
        assert!(render_loop.rotation().paused);
        render_loop.frame();
        assert_eq!(render_loop.rotation().angles, [0.0; 3]);
    }

    #[test]
    fn new_shape_starts_unrotated() {
        let mut render_loop = RenderLoop::new(16, 16);
        render_loop.select("cone");
        render_loop.frame();
        render_loop.select("cube");
        assert_eq!(render_loop.rotation().angles, [0.0; 3]);
        assert_eq!(render_loop.rotation().speed, ROTATION_SPEED);
    }

    #[test]
    fn reset_without_shape_still_resumes() {
        let mut render_loop = RenderLoop::new(16, 16);
        render_loop.pause();
        render_loop.reset();
        assert!(!render_loop.rotation().paused);
        assert!(render_loop.active_shape().is_none());
    }

    #[test]
    fn zero_height_has_unit_aspect() {
        assert_eq!(aspect_ratio(10, 0), 1.0);
        assert_eq!(aspect_ratio(80, 40), 2.0);
    }
}
