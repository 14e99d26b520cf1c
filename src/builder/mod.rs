//! Methods for building an instance from clause text.
//!
//! The clause-text format is line oriented:
//! - One clause per line, with blank lines ignored.
//! - Tokens within a line separated by one or more whitespace characters.
//! - A token is an optional leading [negation mark](crate::structures::literal::NEGATION_MARK) followed by a nonempty atom name containing no whitespace.
//!
//! Note, [add_clause](Instance::add_clause) itself appends whatever the given line encodes to --- including the empty clause, when the line holds no tokens.
//! Skipping blank lines is the responsibility of the line-oriented entry points.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::structures::instance::Instance;
//! let instance = Instance::from_text("p ~q\n\nq r\n").unwrap();
//!
//! assert_eq!(instance.clauses().len(), 2);
//! assert_eq!(instance.atoms().count(), 3);
//! ```

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{
        instance::Instance,
        literal::{Literal, NEGATION_MARK},
    },
    types::err::{self},
};

impl Instance {
    /// The name and polarity of a token, without touching any table.
    ///
    /// The token is negated if prefixed with [NEGATION_MARK], and the remainder of the token must be a nonempty name.
    fn name_and_polarity(token: &str) -> Result<(&str, bool), err::ParseError> {
        let negated = token.starts_with(NEGATION_MARK);

        let name = match negated {
            true => &token[NEGATION_MARK.len_utf8()..],
            false => token,
        };

        if name.is_empty() {
            return Err(err::ParseError::EmptyName(token.to_owned()));
        }

        Ok((name, negated))
    }

    /// Encodes a token as a literal, registering the atom if unseen.
    pub fn literal_from_str(&mut self, token: &str) -> Result<Literal, err::ParseError> {
        let (name, negated) = Self::name_and_polarity(token)?;
        let atom = self.atoms_mut().fresh_or_id(name);
        Ok(Literal::new(atom, negated))
    }

    /// Encodes each whitespace-separated token of `line` and appends the sorted result as a clause.
    ///
    /// Repeated literals are kept, and a line without tokens appends the empty clause.
    /// Every token is checked before any atom is registered, so a rejected clause leaves the instance untouched.
    pub fn add_clause(&mut self, line: &str) -> Result<(), err::ErrorKind> {
        let mut tokens = Vec::default();
        for token in line.split_whitespace() {
            match Self::name_and_polarity(token) {
                Ok(pair) => tokens.push(pair),
                Err(e) => {
                    log::warn!(target: targets::BUILD, "Malformed token {token:?} in clause {line:?}");
                    return Err(err::ErrorKind::from(e));
                }
            }
        }

        let mut clause = Vec::with_capacity(tokens.len());
        for (name, negated) in tokens {
            clause.push(Literal::new(self.atoms_mut().fresh_or_id(name), negated));
        }
        clause.sort_unstable();
        self.push_clause(clause);
        Ok(())
    }

    /// An instance built from clause text, one clause per non-blank line.
    pub fn from_text(text: &str) -> Result<Self, err::ErrorKind> {
        let mut instance = Instance::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            instance.add_clause(line)?;
        }
        log::trace!(target: targets::BUILD,
            "Built instance with {} clauses over {} atoms",
            instance.clauses().len(),
            instance.atoms().count()
        );
        Ok(instance)
    }

    /// Reads clause text from `reader` into the instance, one clause per non-blank line.
    pub fn read_formula(&mut self, mut reader: impl BufRead) -> Result<(), err::ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            if buffer.trim().is_empty() {
                continue;
            }

            self.add_clause(&buffer)?;
        }

        Ok(())
    }
}
