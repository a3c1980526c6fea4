use crate::errors::WinlistError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache directory '{path}' is unavailable: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write cache file '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No cache file at '{path}'")]
    NotFound { path: PathBuf },

    #[error("Failed to read cache file '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl WinlistError for CacheError {
    fn error_code(&self) -> &'static str {
        match self {
            CacheError::DirectoryUnavailable { .. } => "CACHE_DIRECTORY_UNAVAILABLE",
            CacheError::WriteFailed { .. } => "CACHE_WRITE_FAILED",
            CacheError::NotFound { .. } => "CACHE_NOT_FOUND",
            CacheError::ReadFailed { .. } => "CACHE_READ_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, CacheError::NotFound { .. })
    }
}
