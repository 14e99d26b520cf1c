//! Loading formulas from elsewhere.

pub mod files;
