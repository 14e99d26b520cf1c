//! Instances, the unit of state a solve operates on.
//!
//! An instance owns an [atom table](crate::structures::atom::AtomTable) and an ordered list of [clauses](crate::structures::clause), and optionally records the decision which derived it from a parent instance.
//!
//! Decisions form a tree, rooted at the parsed formula.
//! The decision edge is a read-only back reference for [reconstruction](crate::procedures::reconstruct) --- a child never owns its parent, and a parent holds no reference to any child, so an abandoned branch is reclaimed as soon as the search drops it.
//!
//! Two degenerate shapes matter throughout the library:
//! - An instance with an *empty clause list* is **terminal**: every clause of the original formula has been satisfied along the chain of decisions which produced it.
//! - An instance containing an *empty clause* is **contradicted**: some clause of the original formula has had every literal falsified.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::structures::instance::Instance;
//! let mut instance = Instance::new();
//!
//! assert!(instance.add_clause("p ~q").is_ok());
//! assert!(instance.add_clause("q r").is_ok());
//!
//! assert_eq!(instance.to_string(), "(p ~q) (q r)");
//! assert!(!instance.is_terminal());
//! assert!(!instance.is_contradicted());
//! ```

use std::rc::Rc;

use crate::structures::{
    atom::AtomTable,
    clause::Clause,
    literal::{Literal, NEGATION_MARK},
};

/// The decision which derived an instance from its parent.
#[derive(Clone, Debug)]
pub struct DecisionEdge {
    /// The instance the decision was applied to.
    pub parent: Rc<Instance>,

    /// The name of the decided atom.
    pub atom: String,

    /// The value the atom was decided to.
    pub value: bool,
}

/// An atom table and a list of clauses, together with the decision which derived the pair, if any.
#[derive(Clone, Debug, Default)]
pub struct Instance {
    atoms: AtomTable,
    clauses: Vec<Clause>,
    decision: Option<DecisionEdge>,
}

impl Instance {
    /// An instance with no atoms, no clauses, and no decision.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty instance recording its derivation from `parent` by deciding `atom` to `value`.
    pub(crate) fn derived(parent: Rc<Instance>, atom: &str, value: bool) -> Self {
        Instance {
            atoms: AtomTable::default(),
            clauses: Vec::default(),
            decision: Some(DecisionEdge {
                parent,
                atom: atom.to_owned(),
                value,
            }),
        }
    }

    /// The atom table of the instance.
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    /// Mutable access to the atom table, for encoding.
    pub(crate) fn atoms_mut(&mut self) -> &mut AtomTable {
        &mut self.atoms
    }

    /// The clauses of the instance, in derivation order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The decision which derived the instance, if any.
    ///
    /// Instances without a decision are roots.
    pub fn decision(&self) -> Option<&DecisionEdge> {
        self.decision.as_ref()
    }

    /// Appends a clause, without inspection.
    pub(crate) fn push_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Whether the clause list is empty, and so every clause has been satisfied.
    pub fn is_terminal(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether some clause is empty, and so the instance is unsatisfiable.
    pub fn is_contradicted(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The external representation of a literal, relative to the instance.
    ///
    /// Infallible variant for rendering: literals stored in an instance are always within the range of its table.
    fn literal_text(&self, literal: &Literal) -> String {
        let name = self.atoms.name_of(literal.atom()).unwrap_or("?");
        match literal.negated() {
            true => format!("{NEGATION_MARK}{name}"),
            false => name.to_owned(),
        }
    }
}

impl std::fmt::Display for Instance {
    /// The formula of the instance as clause text, one parenthesised clause per conjunct.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut clauses = self.clauses.iter().peekable();
        while let Some(clause) = clauses.next() {
            write!(f, "(")?;
            let mut literals = clause.iter().peekable();
            while let Some(literal) = literals.next() {
                write!(f, "{}", self.literal_text(literal))?;
                if literals.peek().is_some() {
                    write!(f, " ")?;
                }
            }
            write!(f, ")")?;
            if clauses.peek().is_some() {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}
