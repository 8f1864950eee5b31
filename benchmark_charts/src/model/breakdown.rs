//!
//! The cycle tracker breakdown.
//!

use std::collections::BTreeMap;

use crate::util::thousands;

///
/// A single bar of the breakdown chart.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// The cycle tracker label.
    pub label: String,
    /// The number of cycles.
    pub count: u64,
}

impl Bar {
    ///
    /// The text drawn at the end of the bar.
    ///
    pub fn annotation(&self) -> String {
        thousands::format(self.count)
    }
}

///
/// Cycle tracker results ordered by count, largest first.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Breakdown {
    /// The bars, top to bottom.
    pub bars: Vec<Bar>,
}

impl Breakdown {
    ///
    /// The largest count, or zero if there are no bars.
    ///
    pub fn max_count(&self) -> u64 {
        self.bars.first().map(|bar| bar.count).unwrap_or_default()
    }

    ///
    /// Whether there is nothing to draw.
    ///
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    ///
    /// The number of bars.
    ///
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    ///
    /// The longest label in characters, used to size the label area.
    ///
    pub fn longest_label(&self) -> usize {
        self.bars
            .iter()
            .map(|bar| bar.label.chars().count())
            .max()
            .unwrap_or_default()
    }
}

impl From<&BTreeMap<String, u64>> for Breakdown {
    fn from(results: &BTreeMap<String, u64>) -> Self {
        let mut bars: Vec<Bar> = results
            .iter()
            .map(|(label, count)| Bar {
                label: label.to_owned(),
                count: *count,
            })
            .collect();
        // Stable, so equal counts keep the label order of the map.
        bars.sort_by(|a, b| b.count.cmp(&a.count));
        Self { bars }
    }
}
