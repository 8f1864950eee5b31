//!
//! The chart description.
//!

use crate::input::Input;
use crate::input::Report;

use super::breakdown::Breakdown;
use super::summary::Summary;

///
/// Everything drawn on a cycle tracker breakdown image.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    /// The chart title.
    pub title: String,
    /// The bars.
    pub breakdown: Breakdown,
    /// The text panel.
    pub summary: Summary,
}

impl Chart {
    /// The suffix replacing the report file extension in the title.
    pub const TITLE_SUFFIX: &'static str = " — Cycle Tracker Breakdown";

    /// The report file extension.
    pub const REPORT_EXTENSION: &'static str = ".json";

    ///
    /// Describes the chart for a report identified by `identifier`, usually its file name.
    ///
    pub fn new(identifier: &str, report: &Report) -> Self {
        Self {
            title: Self::title(identifier),
            breakdown: Breakdown::from(&report.cycle_tracker_results),
            summary: Summary::from(report),
        }
    }

    ///
    /// Derives the title from the report identifier.
    ///
    pub fn title(identifier: &str) -> String {
        match identifier.strip_suffix(Self::REPORT_EXTENSION) {
            Some(stem) => format!("{stem}{}", Self::TITLE_SUFFIX),
            None => format!("{identifier}{}", Self::TITLE_SUFFIX),
        }
    }
}

impl From<&Input> for Chart {
    fn from(input: &Input) -> Self {
        Self::new(input.identifier().as_str(), &input.report)
    }
}
