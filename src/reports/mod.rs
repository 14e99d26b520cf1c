/*!
Reports for the context.
*/

use crate::{context::Context, context::ContextState, structures::valuation::Value};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(state: &ContextState) -> Self {
        match state {
            ContextState::Input | ContextState::Solving | ContextState::Unknown => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Context {
    /// A table of every atom known to the root instance against its value under the most recent solve.
    ///
    /// Atoms absent from the valuation are listed as [unconstrained](Value::Unconstrained) --- either value satisfies the formula.
    pub fn assignment_table(&self) -> String {
        let width = self
            .root()
            .atoms()
            .names()
            .map(str::len)
            .max()
            .unwrap_or(0);

        let mut lines = Vec::default();
        for name in self.root().atoms().names() {
            let value: Value = self.value_of(name);
            lines.push(format!("{name:width$} {value}"));
        }
        lines.join("\n")
    }
}
