//!
//! The chart data model.
//!

pub mod breakdown;
pub mod chart;
pub mod summary;
