use std::fmt;

/// Errors that abort a map load before any world is constructed
#[derive(Debug)]
pub enum LoadError {
    /// IO operation failed
    IoError(std::io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, LoadError>;
