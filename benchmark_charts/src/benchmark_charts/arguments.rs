//!
//! The benchmark charts arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark charts arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory with benchmark report JSON files.
    #[arg(long, default_value = "testdata/benchmarks")]
    pub input_dir: PathBuf,

    /// Directory the charts are written to.
    /// Defaults to the `charts` subdirectory of the input directory.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}
