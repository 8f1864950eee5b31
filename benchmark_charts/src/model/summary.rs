//!
//! The summary block shown below the breakdown.
//!

use crate::input::Report;
use crate::util::thousands;

///
/// A report total that can appear in the summary block.
///
/// The declaration order is the order of the lines.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    /// Blobs in the namespace.
    Blobs,
    /// EVM block executions.
    BlockExecutions,
    /// EVM transactions.
    TransactionCount,
    /// EVM gas.
    EvmGas,
    /// Proofs.
    Proofs,
    /// zkVM gas.
    Gas,
    /// Executed instructions.
    InstructionCount,
    /// Executed syscalls.
    SyscallCount,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 8] = [
        Self::Blobs,
        Self::BlockExecutions,
        Self::TransactionCount,
        Self::EvmGas,
        Self::Proofs,
        Self::Gas,
        Self::InstructionCount,
        Self::SyscallCount,
    ];

    ///
    /// The caption preceding the value.
    ///
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Blobs => "Total Blobs in Namespace",
            Self::BlockExecutions => "Total EVM block executions",
            Self::TransactionCount => "Total EVM Txs",
            Self::EvmGas => "Total EVM Gas",
            Self::Proofs => "Total Proofs",
            Self::Gas => "Total Gas",
            Self::InstructionCount => "Total Instructions",
            Self::SyscallCount => "Total Syscalls",
        }
    }

    ///
    /// The value of the field in the report, if present.
    ///
    pub fn value(&self, report: &Report) -> Option<u64> {
        match self {
            Self::Blobs => report.total_blobs,
            Self::BlockExecutions => report.total_blockexec_inputs,
            Self::TransactionCount => report.total_tx_count,
            Self::EvmGas => report.total_evm_gas,
            Self::Proofs => report.total_proofs,
            Self::Gas => Some(report.total_gas),
            Self::InstructionCount => Some(report.total_instruction_count),
            Self::SyscallCount => Some(report.total_syscall_count),
        }
    }
}

///
/// A single summary line.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The field.
    pub field: Field,
    /// The field value.
    pub value: u64,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.field.caption(),
            thousands::format(self.value)
        )
    }
}

///
/// The summary block.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The lines, top to bottom.
    pub lines: Vec<Line>,
}

impl From<&Report> for Summary {
    fn from(report: &Report) -> Self {
        let lines = Field::ALL
            .into_iter()
            .filter_map(|field| field.value(report).map(|value| Line { field, value }))
            .collect();
        Self { lines }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
