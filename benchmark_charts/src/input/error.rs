//!
//! Benchmark report input errors.
//!

use std::path::PathBuf;

///
/// Input report reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// The input file is not a valid benchmark report.
    #[error("Input file {path:?}: {error}")]
    Report {
        /// The underlying report error.
        error: ReportError,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Returns the name of the missing mandatory field, if that is the cause.
    ///
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::Report {
                error: ReportError::MissingField(field),
                ..
            } => Some(field),
            _ => None,
        }
    }
}

///
/// Benchmark report parsing and validation error.
///
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The text is not JSON, or a value has the wrong type.
    #[error("parsing: {0}")]
    Parsing(#[from] serde_json::Error),
    /// A mandatory field is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}
