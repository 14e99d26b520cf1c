//! Derivation of an instance from a unit assignment.
//!
//! # Overview
//!
//! [simplify](Instance::simplify) applies the assignment of a single value to a single atom, clause by clause:
//!
//! 1. A clause containing the literal the assignment *satisfies* is dropped --- the clause contributes nothing further.
//! 2. A clause containing the *complementary* literal is rebuilt with that literal removed, and the rebuilt clause is kept even when empty --- the empty clause is the contradiction signal consumed by the [search](crate::procedures::search).
//! 3. Any other clause is carried over unchanged.
//!
//! Every kept clause is re-encoded against the fresh table of the derived instance, built lazily as clauses are re-added.
//! So, literal encodings are *not* stable across a call to simplify, though atom names are, and the assigned atom never appears in the derived table.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::structures::instance::Instance;
//! # use std::rc::Rc;
//! let root = Rc::new(Instance::from_text("p ~q\nq r\ns").unwrap());
//!
//! let child = Rc::clone(&root).simplify("q", true);
//!
//! // (q r) was satisfied, and ~q was struck from (p ~q).
//! assert_eq!(child.to_string(), "(p) (s)");
//! assert!(!child.atoms().contains("q"));
//! ```

use std::rc::Rc;

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, instance::Instance, literal::Literal},
};

impl Instance {
    /// The instance derived by assigning `value` to `atom`, recording the decision.
    ///
    /// An atom without an entry in the table of the instance leaves every clause untouched, though the decision is still recorded.
    pub fn simplify(self: Rc<Self>, atom: &str, value: bool) -> Instance {
        let mut child = Instance::derived(Rc::clone(&self), atom, value);

        let assigned = self.atoms().id_of(atom);

        'clause_loop: for clause in self.clauses() {
            let mut rebuilt: Clause = Vec::with_capacity(clause.len());

            for literal in clause {
                if Some(literal.atom()) == assigned {
                    if literal.negated() != value {
                        // The assignment satisfies the literal, and with it the clause.
                        continue 'clause_loop;
                    }
                    // The assignment falsifies the literal, which is struck from the rebuild.
                    continue;
                }

                // Invariant: literals of an instance always name an atom of its table.
                let name = match self.atoms().name_of(literal.atom()) {
                    Some(name) => name,
                    None => {
                        debug_assert!(false, "literal without a table atom");
                        continue;
                    }
                };
                let fresh_atom = child.atoms_mut().fresh_or_id(name);
                rebuilt.push(Literal::new(fresh_atom, literal.negated()));
            }

            rebuilt.sort_unstable();
            child.push_clause(rebuilt);
        }

        log::trace!(target: targets::SIMPLIFY,
            "{atom} -> {value}: {} of {} clauses kept",
            child.clauses().len(),
            self.clauses().len()
        );

        child
    }
}
