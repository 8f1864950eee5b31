//!
//! Chart output paths.
//!

use std::path::Path;
use std::path::PathBuf;

/// The chart file extension.
pub const EXTENSION_PNG: &str = "png";

/// The output subdirectory used when none is given.
pub const DEFAULT_SUBDIRECTORY: &str = "charts";

///
/// The chart path for the report at `input`: its file stem with the image extension, inside `directory`.
///
pub fn chart_path(input: &Path, directory: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_os_string();
    name.push(".");
    name.push(EXTENSION_PNG);
    directory.join(name)
}

///
/// The default output directory for reports in `input_directory`.
///
pub fn default_directory(input_directory: &Path) -> PathBuf {
    input_directory.join(DEFAULT_SUBDIRECTORY)
}
