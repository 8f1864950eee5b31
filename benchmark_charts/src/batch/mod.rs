//!
//! Batch processing of a benchmark report directory.
//!


pub mod outcome;

use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;

use crate::input::Input;
use crate::model::chart::Chart;
use crate::output::path;
use crate::output::Renderer;

use self::outcome::Failure;
use self::outcome::Outcome;
use self::outcome::Written;

/// The benchmark report file extension.
pub const EXTENSION_JSON: &str = "json";

///
/// Charts every report in a directory, one at a time.
///
/// A failing report does not stop the batch. Failures are collected in the outcome.
///
#[derive(Debug, Clone)]
pub struct Batch {
    /// The directory with benchmark reports.
    pub input_directory: PathBuf,
    /// The directory charts are written to.
    pub output_directory: PathBuf,
    /// The chart renderer.
    pub renderer: Renderer,
    /// Suppresses the terminal output.
    pub quiet: bool,
}

impl Batch {
    ///
    /// A batch writing to `output_directory`, or to the default subdirectory of `input_directory`.
    ///
    pub fn new(input_directory: PathBuf, output_directory: Option<PathBuf>) -> Self {
        let output_directory =
            output_directory.unwrap_or_else(|| path::default_directory(input_directory.as_path()));
        Self {
            input_directory,
            output_directory,
            renderer: Renderer::default(),
            quiet: false,
        }
    }

    ///
    /// Replaces the renderer.
    ///
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    ///
    /// Sets whether the terminal output is suppressed.
    ///
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    ///
    /// Lists the reports directly inside the input directory, sorted by path.
    ///
    pub fn discover(&self) -> anyhow::Result<Vec<PathBuf>> {
        if !self.input_directory.is_dir() {
            anyhow::bail!(
                "Expected a directory with JSON files, but got {:?}",
                self.input_directory
            );
        }
        let resolution_pattern = format!(
            "{}/*.{EXTENSION_JSON}",
            glob::Pattern::escape(self.input_directory.to_string_lossy().as_ref())
        );
        let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        Ok(paths)
    }

    ///
    /// Charts every discovered report.
    ///
    /// Only failing to list the input or to create the output directory fails the whole batch.
    ///
    pub fn run(&self) -> anyhow::Result<Outcome> {
        let paths = self.discover()?;
        let mut outcome = Outcome::default();
        if paths.is_empty() {
            self.warn(format!(
                "No JSON files found in {:?}.",
                self.input_directory
            ));
            return Ok(outcome);
        }

        std::fs::create_dir_all(self.output_directory.as_path()).map_err(|error| {
            anyhow::anyhow!(
                "Output directory {:?} creating: {error}",
                self.output_directory
            )
        })?;

        for input_path in paths.into_iter() {
            let output_path = path::chart_path(input_path.as_path(), self.output_directory.as_path());
            if !self.quiet {
                println!(
                    "Processing: {} → {}",
                    input_path.display(),
                    output_path.display()
                );
            }

            match self.process(input_path.as_path(), output_path.as_path()) {
                Ok(()) => outcome.written.push(Written {
                    input: input_path,
                    output: output_path,
                }),
                Err(error) => {
                    if !self.quiet {
                        eprintln!("{} {error}", "Error:".bright_red());
                    }
                    outcome.failed.push(Failure {
                        input: input_path,
                        error,
                    });
                }
            }
        }

        Ok(outcome)
    }

    ///
    /// Charts a single report.
    ///
    /// The report is validated before any canvas is allocated, so an invalid report leaves
    /// no file behind.
    ///
    pub fn process(&self, input_path: &Path, output_path: &Path) -> anyhow::Result<()> {
        let input = Input::try_from(input_path)?;
        let chart = Chart::from(&input);
        self.renderer.render(&chart, output_path)?;
        Ok(())
    }

    ///
    /// Prints a warning unless the output is suppressed.
    ///
    fn warn(&self, message: String) {
        if !self.quiet {
            eprintln!("{} {message}", "Warning:".yellow());
        }
    }
}
