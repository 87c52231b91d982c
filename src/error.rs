//! Error types for icon generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing icons.
#[derive(Error, Debug)]
pub enum IconError {
    /// Output directory could not be created
    #[error("Failed to create output directory {path:?}: {source}")]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Icon could not be encoded or written
    #[error("Failed to write icon {path:?}: {source}")]
    Write {
        /// Destination file
        path: PathBuf,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Canvas surface could not be allocated
    #[error("Failed to allocate {width}x{height} canvas")]
    InvalidCanvas {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl IconError {
    /// Create a directory creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create an icon write error.
    pub fn write(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IconError>;
