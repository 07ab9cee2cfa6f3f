//! Error types shared across Scrollkind crates.
//!
//! The four monitoring operations themselves are infallible by contract and
//! never touch these types; they exist for configuration loading, platform
//! probes, and tool plumbing.

use std::path::PathBuf;

/// Top-level error type for Scrollkind operations.
#[derive(Debug, thiserror::Error)]
pub enum ScrollkindError {
    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ScrollkindError.
pub type ScrollkindResult<T> = Result<T, ScrollkindError>;

impl ScrollkindError {
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
