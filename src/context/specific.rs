use std::{io::BufRead, rc::Rc};

use crate::{
    config::Config,
    structures::{
        instance::Instance,
        literal::NEGATION_MARK,
        valuation::{Valuation, Value},
    },
    types::err::{self},
};

use super::{ContextState, Counters};

/// A context, the pairing of a root instance with a configuration and solve state.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the most recent solve.
    pub counters: Counters,

    /// The root instance, holding the formula as given.
    root: Rc<Instance>,

    /// The status of the context.
    pub state: ContextState,

    /// The valuation reconstructed from the most recent successful solve.
    valuation: Option<Valuation>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            root: Rc::new(Instance::new()),
            state: ContextState::Input,
            valuation: None,
        }
    }

    /// The root instance of the context.
    pub fn root(&self) -> &Rc<Instance> {
        &self.root
    }

    /// Appends the clause given by `line` to the root instance.
    pub fn add_clause(&mut self, line: &str) -> Result<(), err::ErrorKind> {
        self.state = ContextState::Input;
        Rc::make_mut(&mut self.root).add_clause(line)
    }

    /// Reads clause text from `reader` into the root instance, one clause per non-blank line.
    pub fn read_formula(&mut self, reader: impl BufRead) -> Result<(), err::ErrorKind> {
        self.state = ContextState::Input;
        Rc::make_mut(&mut self.root).read_formula(reader)
    }

    /// The valuation of the most recent successful solve, if any.
    pub fn valuation(&self) -> Option<&Valuation> {
        self.valuation.as_ref()
    }

    pub(crate) fn set_valuation(&mut self, valuation: Option<Valuation>) {
        self.valuation = valuation;
    }

    /// The value of the named atom under the valuation of the most recent solve.
    ///
    /// [Unconstrained](Value::Unconstrained) both for atoms the solve never branched on and in the absence of a solve.
    pub fn value_of(&self, atom: &str) -> Value {
        match &self.valuation {
            Some(valuation) => valuation.value_of(atom),
            None => Value::Unconstrained,
        }
    }

    /// The formula of the root instance as clause text.
    pub fn formula_string(&self) -> String {
        self.root.to_string()
    }

    /// The constrained atoms of the valuation as a string, in root table order, false atoms marked for negation.
    pub fn valuation_string(&self) -> String {
        let mut parts = Vec::default();
        for name in self.root.atoms().names() {
            match self.value_of(name) {
                Value::True => parts.push(name.to_owned()),
                Value::False => parts.push(format!("{NEGATION_MARK}{name}")),
                Value::Unconstrained => {}
            }
        }
        parts.join(" ")
    }
}
