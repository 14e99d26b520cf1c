//! Clauses, disjunctions of literals.
//!
//! A clause is an ascending-sorted vector of [literals](crate::structures::literal), without deduplication.
//! The sort carries no semantic weight, though it makes containment a binary search and keeps renderings deterministic.
//!
//! An empty clause denotes a contradiction: the branch which produced it cannot be extended to a satisfying assignment.

use crate::structures::literal::Literal;

/// A disjunction of literals, sorted ascending by encoding.
pub type Clause = Vec<Literal>;

/// Whether the (sorted) clause contains `literal`.
pub fn contains(clause: &Clause, literal: Literal) -> bool {
    clause.binary_search(&literal).is_ok()
}
