use crate::catalog::ShapeKey;
use crate::logging::LoggingConfig;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Start on the detail screen for this shape (e.g. cube, pentagonalPrism)
    #[arg(short, long)]
    pub shape: Option<ShapeKey>,

    /// Frames rendered per second
    #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Start with rotation paused
    #[arg(long)]
    pub paused: bool,

    /// Print the shape catalog and exit
    #[arg(short, long)]
    pub list: bool,

    /// Write log records to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// env_logger filter, overriding RUST_LOG (e.g. "debug", "shapes3d=trace")
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

/// Runtime configuration for the terminal front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub fps: u32,
    pub initial_shape: Option<ShapeKey>,
    pub start_paused: bool,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fps: 60,
            initial_shape: None,
            start_paused: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            fps: args.fps,
            initial_shape: args.shape,
            start_paused: args.paused,
            logging: LoggingConfig {
                filter: args.log_filter,
                file: args.log_file,
            },
        }
    }
}
