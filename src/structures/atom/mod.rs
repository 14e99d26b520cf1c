//! Atoms, and tables of atoms.
//!
//! An atom is the name of a variable, identified within a single [instance](crate::structures::instance) by a [table](AtomTable) index.
//! Indices are handed out in encounter order, starting from 1, and are *local* to the table which produced them: simplification re-encodes every kept clause against a fresh table, so an index is meaningful only relative to the instance which owns it.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::structures::atom::AtomTable;
//! let mut table = AtomTable::default();
//!
//! assert_eq!(table.fresh_or_id("p"), 1);
//! assert_eq!(table.fresh_or_id("q"), 2);
//! assert_eq!(table.fresh_or_id("p"), 1);
//!
//! assert_eq!(table.earliest(), Some("p"));
//! assert_eq!(table.count(), 2);
//! ```

use std::collections::HashMap;

/// The index of an atom in some [AtomTable], starting from 1.
pub type Atom = u32;

/// An insertion-ordered map from atom names to indices, owned by a single instance.
#[derive(Clone, Debug, Default)]
pub struct AtomTable {
    /// Names, in encounter order. The atom `a` names `names[a - 1]`.
    names: Vec<String>,

    /// The inverse map, for encoding.
    ids: HashMap<String, Atom>,
}

impl AtomTable {
    /// The index of `name`, registering the name with the next free index if unseen.
    pub fn fresh_or_id(&mut self, name: &str) -> Atom {
        match self.ids.get(name) {
            Some(id) => *id,
            None => {
                let id = (self.names.len() + 1) as Atom;
                self.names.push(name.to_owned());
                self.ids.insert(name.to_owned(), id);
                id
            }
        }
    }

    /// The index of `name`, if registered.
    pub fn id_of(&self, name: &str) -> Option<Atom> {
        self.ids.get(name).copied()
    }

    /// The name of `atom`, if the index belongs to the table.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        match atom {
            0 => None,
            _ => self.names.get((atom - 1) as usize).map(String::as_str),
        }
    }

    /// A count of registered atoms.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// The earliest-inserted name, used as the deterministic branching choice.
    pub fn earliest(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Registered names, in encounter order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
