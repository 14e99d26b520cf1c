//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! stoat_sat decides satisfiability by exhaustive backtracking over a tree of *instances*.
//! An instance owns a table of named atoms and a list of clauses, and every branch of the search derives a child instance by fixing the value of a single atom and simplifying the parent's clauses against that assignment.
//! A child whose clause list is empty witnesses satisfiability, and the chain of decisions from the child back to the root is the satisfying assignment.
//!
//! The library is deliberately small and deliberately deterministic.
//! There is no propagation beyond the decided atom, no learning, and no randomness: the same formula always produces the same answer, and --- when several assignments would do --- the same assignment.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a configuration, and clauses may be added through the clause-text representation of a formula, one clause per line.
//! A solve explores derived instances until a satisfying instance is found or the space of assignments is exhausted.
//!
//! Useful starting points:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [instance structure](crate::structures::instance) for the unit of state a solve operates on.
//! - The [simplification procedure](crate::procedures::simplify) for the derivation of one instance from another.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! # use stoat_sat::structures::valuation::Value;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause("p ~q").is_ok());
//! assert!(the_context.add_clause("q").is_ok());
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Satisfiable);
//!
//! assert_eq!(the_context.value_of("q"), Value::True);
//! ```

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod io;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

mod misc;
