//! Error types for the spreadrank CLI.
//!
//! The scorer itself cannot fail; every error here originates at the I/O
//! boundary (reading labels, loading configuration) or from user input.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpreadRankError {
    /// Failed to read labels from a file or standard input
    #[error("{}", describe_io(.path.as_deref(), .source))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt was answered with nothing
    #[error("No items entered")]
    EmptyInput,

    /// Explicit configuration file could not be read or parsed
    #[error("Configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl SpreadRankError {
    /// I/O error while reading a specific file
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// I/O error while reading a stream (stdin, terminal)
    pub fn io(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

fn describe_io(path: Option<&Path>, source: &std::io::Error) -> String {
    match path {
        Some(path) => format!("Failed to read {}: {}", path.display(), source),
        None => format!("Failed to read input: {}", source),
    }
}

pub type Result<T> = std::result::Result<T, SpreadRankError>;
