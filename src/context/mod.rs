/*!
The context --- to which formulas are added and within which solves take place.

A context pairs a root [instance](crate::structures::instance) with a [configuration](crate::config), counters, and the outcome of the most recent solve.

# Example
```rust
# use stoat_sat::context::Context;
# use stoat_sat::config::Config;
# use stoat_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause("p q").is_ok());
assert!(the_context.add_clause("~p").is_ok());

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);
```
*/

mod counters;
pub use counters::Counters;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula of the context is known to be satisfiable, with a valuation to witness.
    Satisfiable,

    /// The formula of the context is known to be unsatisfiable.
    Unsatisfiable,

    /// A solve stopped at a configured cap, and satisfiability is unknown.
    Unknown,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
