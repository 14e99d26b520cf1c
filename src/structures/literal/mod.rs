//! Literals, atoms paired with a polarity and packed into a single integer.
//!
//! A literal is encoded as `atom * 2 + b`, where `b` is 1 if the literal is negated and 0 otherwise.
//! As atoms are indexed from 1, the valid encodings for a table of *n* atoms are exactly `[2, 2n + 1]`, and 0 and 1 are never produced.
//!
//! The derived order on literals is the order on their encodings, which groups the two polarities of an atom together and sorts atoms by table index.
//! Clauses are kept sorted by this order so containment checks are deterministic binary searches.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::structures::literal::Literal;
//! let p = Literal::new(1, false);
//! let not_p = Literal::new(1, true);
//!
//! assert_eq!(p.encoded(), 2);
//! assert_eq!(not_p.encoded(), 3);
//!
//! assert_eq!(p.negate(), not_p);
//! assert_eq!(not_p.atom(), 1);
//! assert!(not_p.negated());
//! ```

use crate::{
    structures::atom::{Atom, AtomTable},
    types::err,
};

/// The character marking a negated literal in clause text.
pub const NEGATION_MARK: char = '~';

/// An atom paired with a polarity, packed as `atom * 2 + negated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(u32);

impl Literal {
    /// The literal pairing `atom` with a polarity, negative if `negated`.
    pub fn new(atom: Atom, negated: bool) -> Self {
        Literal(atom * 2 + negated as u32)
    }

    /// A literal directly from an encoding, without any bound check.
    ///
    /// The encoding is checked against a table on [external_representation](Literal::external_representation).
    pub fn from_encoded(encoded: u32) -> Self {
        Literal(encoded)
    }

    /// The packed encoding of the literal.
    pub fn encoded(&self) -> u32 {
        self.0
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.0 >> 1
    }

    /// Whether the literal is negated.
    pub fn negated(&self) -> bool {
        self.0 & 1 == 1
    }

    /// The literal over the same atom with the opposing polarity.
    pub fn negate(&self) -> Self {
        Literal(self.0 ^ 1)
    }

    /// The external representation of the literal with respect to the given table.
    ///
    /// The name of the atom of the literal, prefixed with [NEGATION_MARK] if the literal is negated.
    /// Errs if the encoding lies outside `[2, 2n + 1]` for a table of *n* atoms, as no atom of the table could have produced it.
    pub fn external_representation(&self, table: &AtomTable) -> Result<String, err::LiteralError> {
        let ceiling = (table.count() as u32) * 2 + 1;
        if self.0 < 2 || self.0 > ceiling {
            return Err(err::LiteralError::OutOfRange(self.0));
        }

        // The range check guarantees the atom is present.
        let name = match table.name_of(self.atom()) {
            Some(name) => name,
            None => return Err(err::LiteralError::OutOfRange(self.0)),
        };

        match self.negated() {
            true => Ok(format!("{NEGATION_MARK}{name}")),
            false => Ok(name.to_owned()),
        }
    }
}
