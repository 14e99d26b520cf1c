//! Procedures, roughly top-down:
//!
//! - [solve] drives a [search] over a context and reconstructs the satisfying valuation, if any.
//! - [search] explores the tree of instances derived from a root by [simplify].
//! - [reconstruct] walks decisions from a terminal instance back to the root.

pub mod reconstruct;
pub mod search;
pub mod simplify;
pub mod solve;
