//!
//! The benchmark charts binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    let batch = benchmark_charts::Batch::new(arguments.input_dir, arguments.output_dir)
        .with_quiet(arguments.quiet);
    let outcome = batch.run()?;

    if !arguments.quiet {
        println!("{} {outcome}", "Done:".bright_white());
    }
    if !outcome.is_success() {
        for failure in outcome.failed.iter() {
            eprintln!("{} {:?}", "Failed:".bright_red(), failure.input);
        }
        anyhow::bail!(
            "{} of {} benchmark reports failed",
            outcome.failed.len(),
            outcome.total()
        );
    }

    Ok(())
}
