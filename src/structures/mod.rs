//! Structures, in some way related to a formula.

pub mod atom;
pub mod clause;
pub mod instance;
pub mod literal;
pub mod valuation;
