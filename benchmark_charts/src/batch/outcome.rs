//!
//! The batch outcome.
//!

use std::path::PathBuf;

///
/// A chart written for a report.
///
#[derive(Debug)]
pub struct Written {
    /// The report path.
    pub input: PathBuf,
    /// The chart path.
    pub output: PathBuf,
}

///
/// A report that could not be charted.
///
#[derive(Debug)]
pub struct Failure {
    /// The report path.
    pub input: PathBuf,
    /// The cause.
    pub error: anyhow::Error,
}

///
/// What happened to every report of a batch.
///
#[derive(Debug, Default)]
pub struct Outcome {
    /// Charts written.
    pub written: Vec<Written>,
    /// Reports that failed.
    pub failed: Vec<Failure>,
}

impl Outcome {
    ///
    /// The number of reports the batch has seen.
    ///
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    ///
    /// Whether every report was charted.
    ///
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} charts written, {} failed",
            self.written.len(),
            self.failed.len()
        )
    }
}
