//! Valuations, mappings from atom names to truth values.
//!
//! A valuation is the output of [reconstruction](crate::procedures::reconstruct): the decisions on the chain from a terminal instance back to the root.
//!
//! Valuations are partial.
//! An atom absent from a valuation was never branched on, as every clause mentioning it was resolved by earlier decisions (or it occurred in no clause at all), and either truth value satisfies the formula.
//! The tri-state [Value] makes this explicit at the reporting boundary, rather than mixing a sentinel in with booleans.

use std::collections::HashMap;

/// The value a valuation assigns to an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value {
    /// The atom is assigned true.
    True,

    /// The atom is assigned false.
    False,

    /// The atom is unconstrained --- either value satisfies the formula.
    Unconstrained,
}

impl From<Option<bool>> for Value {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Value::True,
            Some(false) => Value::False,
            None => Value::Unconstrained,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unconstrained => write!(f, "unconstrained"),
        }
    }
}

/// A partial mapping from atom names to truth values.
#[derive(Clone, Debug, Default)]
pub struct Valuation {
    map: HashMap<String, bool>,
}

impl Valuation {
    /// Records `value` for `atom`.
    pub fn insert(&mut self, atom: &str, value: bool) {
        self.map.insert(atom.to_owned(), value);
    }

    /// The value of `atom` under the valuation.
    pub fn value_of(&self, atom: &str) -> Value {
        Value::from(self.map.get(atom).copied())
    }

    /// A count of constrained atoms.
    pub fn atom_count(&self) -> usize {
        self.map.len()
    }

    /// The constrained atoms and their values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.map.iter().map(|(atom, value)| (atom.as_str(), *value))
    }
}
