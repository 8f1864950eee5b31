//!
//! Benchmark report input.
//!

#[cfg(test)]
mod tests;

pub mod error;

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use self::error::Error as InputError;
use self::error::ReportError;

///
/// A benchmark report file together with its location.
///
#[derive(Debug)]
pub struct Input {
    /// The path the report was read from.
    pub path: PathBuf,
    /// The validated report.
    pub report: Report,
}

impl Input {
    ///
    /// The report identifier used in chart titles, that is, the file name.
    ///
    pub fn identifier(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let report: Report = text.parse().map_err(|error| InputError::Report {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            report,
        })
    }
}

///
/// A zkVM benchmark report.
///
/// The optional totals are only written by some of the benchmark programs.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Cycle counts by tracker label.
    pub cycle_tracker_results: BTreeMap<String, u64>,

    /// Number of blobs in the namespace.
    pub total_blobs: Option<u64>,
    /// Number of EVM block executions.
    pub total_blockexec_inputs: Option<u64>,
    /// Number of EVM transactions.
    pub total_tx_count: Option<u64>,
    /// Gas used by the executed EVM blocks.
    pub total_evm_gas: Option<u64>,
    /// Number of proofs.
    pub total_proofs: Option<u64>,

    /// Gas used by the zkVM program.
    pub total_gas: u64,
    /// Number of executed instructions.
    pub total_instruction_count: u64,
    /// Number of executed syscalls.
    pub total_syscall_count: u64,
}

///
/// The report as found on disk, before the mandatory fields are checked.
///
#[derive(Debug, serde::Deserialize)]
struct RawReport {
    cycle_tracker_results: Option<BTreeMap<String, u64>>,

    total_blobs: Option<u64>,
    total_blockexec_inputs: Option<u64>,
    total_tx_count: Option<u64>,
    total_evm_gas: Option<u64>,
    total_proofs: Option<u64>,

    total_gas: Option<u64>,
    total_instruction_count: Option<u64>,
    total_syscall_count: Option<u64>,
}

impl TryFrom<RawReport> for Report {
    type Error = ReportError;

    fn try_from(raw: RawReport) -> Result<Self, Self::Error> {
        Ok(Self {
            cycle_tracker_results: raw
                .cycle_tracker_results
                .ok_or(ReportError::MissingField("cycle_tracker_results"))?,

            total_blobs: raw.total_blobs,
            total_blockexec_inputs: raw.total_blockexec_inputs,
            total_tx_count: raw.total_tx_count,
            total_evm_gas: raw.total_evm_gas,
            total_proofs: raw.total_proofs,

            total_gas: raw
                .total_gas
                .ok_or(ReportError::MissingField("total_gas"))?,
            total_instruction_count: raw
                .total_instruction_count
                .ok_or(ReportError::MissingField("total_instruction_count"))?,
            total_syscall_count: raw
                .total_syscall_count
                .ok_or(ReportError::MissingField("total_syscall_count"))?,
        })
    }
}

impl std::str::FromStr for Report {
    type Err = ReportError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let raw: RawReport = serde_json::from_str(text)?;
        raw.try_into()
    }
}
