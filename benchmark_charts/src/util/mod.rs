//!
//! Utility functions.
//!

pub mod thousands;
