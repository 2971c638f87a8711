//! Error types for biosim_io.
//!
//! Every reader reports the file it was reading, and parse errors carry the
//! line the offending token started on.

use biosim_core::ConfigError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// Malformed input text
    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A required key is absent
    #[error("{}: missing parameter '{key}'", path.display())]
    MissingParameter { path: PathBuf, key: String },

    /// A key this kind of file does not know
    #[error("{}: unknown parameter '{key}'", path.display())]
    UnknownParameter { path: PathBuf, key: String },

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The input was readable but describes an impossible world
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    #[must_use]
    pub fn parse<S: Into<String>>(path: &Path, line: usize, message: S) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn missing<S: Into<String>>(path: &Path, key: S) -> Self {
        Self::MissingParameter {
            path: path.to_path_buf(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn unknown<S: Into<String>>(path: &Path, key: S) -> Self {
        Self::UnknownParameter {
            path: path.to_path_buf(),
            key: key.into(),
        }
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Reads a whole file, naming it in the error.
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("Could not open {}", path.display())))
}
