use std::path::PathBuf;

/// Errors raised by the terminal front end. The render core itself is
/// infallible.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("terminal I/O failed")]
    Terminal(#[from] std::io::Error),
    #[error("failed to open log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
