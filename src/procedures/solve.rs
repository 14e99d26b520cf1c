//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](Context::solve) wraps the [search](crate::procedures::search) over the tree of instances derived from the root of a context:
//!
//! - A terminal instance is [reconstructed](crate::procedures::reconstruct) into the valuation of the context, and the formula is satisfiable.
//! - An exhausted search space means the formula is unsatisfiable.
//! - A search stopped at a configured cap leaves satisfiability unknown.
//!
//! The search itself owns a private tree rooted at the formula of the context, so repeated solves are independent, up to the recorded counters.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause("~p q").is_ok());
//! assert!(the_context.add_clause("~q").is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.valuation_string(), "~p ~q");
//! ```

use crate::{
    context::{Context, ContextState, Counters},
    misc::log::targets::{self},
    procedures::search::{capped_search, SearchCap, SearchOutcome},
    reports::Report,
    types::err::{self},
};

impl Context {
    /// Searches for a satisfying assignment to the formula of the context.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        let total_time = std::time::Instant::now();

        self.state = ContextState::Solving;
        self.set_valuation(None);

        // Counters are per solve, so the caps of a re-solve start from zero.
        self.counters = Counters::default();

        let cap = SearchCap {
            expansions: self.config.expansion_limit,
            time: self.config.time_limit,
        };

        let outcome = capped_search(self.root().clone(), cap, &mut self.counters);
        self.counters.time = total_time.elapsed();

        match outcome {
            SearchOutcome::Terminal(terminal) => {
                self.set_valuation(Some(terminal.reconstruct()));
                self.state = ContextState::Satisfiable;
            }

            SearchOutcome::Exhausted => self.state = ContextState::Unsatisfiable,

            SearchOutcome::CapReached => self.state = ContextState::Unknown,
        }

        log::info!(target: targets::SEARCH,
            "Solve result {} after {} expansions",
            self.state,
            self.counters.expansions
        );

        Ok(self.report())
    }

    /// A high-level report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }
}
