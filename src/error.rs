use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("folder does not exist or is not a directory: {}", .0.display())]
    InvalidFolder(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("failed to encode image: {0}")]
    Encode(String),
    #[error("settings error: {0}")]
    Settings(String),
    #[error("print error: {0}")]
    Print(String),
    #[error("printing is not supported on this platform")]
    PrintUnsupported,
}

impl GalleryError {
    pub fn decode(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        Self::Decode {
            path: path.into(),
            message: error.to_string(),
        }
    }
}
