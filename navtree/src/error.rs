//! Error types

use std::path::PathBuf;

/// Errors that can occur while loading navigation data.
///
/// Tree operations themselves never fail: the data is generated and trusted,
/// so lookups that miss are silent no-ops rather than errors.
#[derive(Debug, thiserror::Error)]
pub enum NavTreeError {
    /// The navigation file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The navigation table is not valid JSON or has the wrong shape.
    #[error("Malformed navigation data: {0}")]
    Json(#[from] serde_json::Error),

    /// A navigation script contained no array literal.
    #[error("No navigation array found in script")]
    MissingArray,
}

impl NavTreeError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for navigation data loading.
pub type Result<T> = std::result::Result<T, NavTreeError>;
