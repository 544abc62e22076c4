//! Error type for the fallible edges of the site crate.
//!
//! Rendering itself never fails: malformed dashboard data degrades to blank
//! icons or empty charts. Only config loading and export I/O surface errors.

use std::path::PathBuf;

/// Errors raised while loading configuration or writing the static export.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// `site.toml` exists but could not be parsed.
    #[error("failed to parse config {path}: {source}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// Structured data could not be serialized.
    #[error("failed to serialize structured data: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
