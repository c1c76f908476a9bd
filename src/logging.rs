//! Logger initialization.
//!
//! The UI owns the terminal in raw mode, so records never go to stderr
//! while it runs: they are piped to a file, or dropped unless a filter is
//! asked for explicitly.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::PathBuf;

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "shapes3d=debug") and takes precedence over `RUST_LOG`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub file: Option<PathBuf>,
}

/// Initializes the global logger.
///
/// Calling it again once a logger is installed is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = &config.filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else if config.file.is_some() {
        builder.filter_level(log::LevelFilter::Info);
    } else {
        builder.filter_level(log::LevelFilter::Off);
    }

    if let Some(path) = &config.file {
        let file = File::create(path).map_err(|source| Error::LogFile {
            path: path.clone(),
            source,
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
        builder.write_style(env_logger::WriteStyle::Never);
    }

    if builder.try_init().is_ok() {
        log::debug!("logging initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_file_is_reported() {
        let config = LoggingConfig {
            filter: None,
            file: Some(PathBuf::from("/nonexistent-dir/shapes3d.log")),
        };
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, Error::LogFile { .. }));
    }
}
