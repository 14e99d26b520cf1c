//! Exhaustive depth-first search over derived instances.
//!
//! # Overview
//!
//! The search keeps an explicit stack of frontier instances, initialized to the root.
//! While the stack is non-empty:
//!
//! 1. Pop one instance (LIFO, so depth-first).
//! 2. Choose the branching atom: the earliest-inserted name of the popped instance's table --- deterministic, never random.
//! 3. For each value, in the fixed order `[true, false]`:
//!    - [Simplify](crate::procedures::simplify) the popped instance by the assignment.
//!    - An empty clause list is a success, returned immediately --- no further branch or stack entry is examined.
//!    - A derived instance without an empty clause is pushed, still feasible and unresolved.
//!    - A derived instance with an empty clause is dropped, a dead branch.
//! 4. An emptied stack means no assignment satisfies the formula.
//!
//! # Branch order
//!
//! Both children of a popped instance are generated before either is consumed, and the stack is LIFO.
//! So the `false` child --- pushed last, when not itself an immediate success --- is explored before any descendant of the `true` child.
//! When the `true` child is an immediate success it is returned before the `false` child is even generated.
//! This order fixes which assignment is returned on formulas with several, and is preserved exactly.
//!
//! # Complexity
//!
//! The worst case explores 2^n derived instances for a root over n atoms.
//! The only pruning is immediate contradiction detection --- there is no chained propagation beyond the single decided atom per step.

use std::rc::Rc;

use crate::{
    context::Counters,
    misc::log::targets::{self},
    structures::instance::Instance,
};

/// How far a capped search progressed.
#[derive(Debug)]
pub enum SearchOutcome {
    /// An instance with an empty clause list was derived, witnessing satisfiability.
    Terminal(Rc<Instance>),

    /// The search space was exhausted, witnessing unsatisfiability.
    Exhausted,

    /// A configured cap was reached before an answer.
    CapReached,
}

/// A cap on a [capped search](capped_search), checked once per popped instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCap {
    /// A limit on the count of popped instances.
    pub expansions: Option<usize>,

    /// A limit on the wall-clock duration of the search.
    pub time: Option<std::time::Duration>,
}

/// Searches the tree of instances derived from `root`, stopping early at a cap.
pub fn capped_search(root: Rc<Instance>, cap: SearchCap, counters: &mut Counters) -> SearchOutcome {
    let start = std::time::Instant::now();
    let mut stack: Vec<Rc<Instance>> = vec![root];

    while let Some(instance) = stack.pop() {
        counters.expansions += 1;

        if cap.expansions.is_some_and(|limit| counters.expansions > limit)
            || cap.time.is_some_and(|limit| start.elapsed() > limit)
        {
            log::info!(target: targets::SEARCH, "Cap reached after {} expansions", counters.expansions);
            return SearchOutcome::CapReached;
        }

        // Relevant only for degenerate roots: derived instances are
        // filtered before they reach the stack.
        if instance.is_terminal() {
            return SearchOutcome::Terminal(instance);
        }
        if instance.is_contradicted() {
            counters.dead_ends += 1;
            continue;
        }

        // Invariant: a feasible non-terminal instance has a populated table,
        // as every literal of every clause names a table atom.
        let atom = match instance.atoms().earliest() {
            Some(name) => name.to_owned(),
            None => {
                debug_assert!(false, "feasible instance with an empty atom table");
                counters.dead_ends += 1;
                continue;
            }
        };

        for value in [true, false] {
            counters.decisions += 1;
            let child = Rc::clone(&instance).simplify(&atom, value);

            if child.is_terminal() {
                log::trace!(target: targets::SEARCH, "Terminal instance on {atom} -> {value}");
                return SearchOutcome::Terminal(Rc::new(child));
            } else if !child.is_contradicted() {
                stack.push(Rc::new(child));
            } else {
                log::trace!(target: targets::SEARCH, "Dead branch on {atom} -> {value}");
                counters.dead_ends += 1;
            }
        }
    }

    SearchOutcome::Exhausted
}

/// Searches the tree of instances derived from `root` without caps, yielding a terminal instance if one exists.
pub fn search(root: Rc<Instance>) -> Option<Rc<Instance>> {
    match capped_search(root, SearchCap::default(), &mut Counters::default()) {
        SearchOutcome::Terminal(terminal) => Some(terminal),
        _ => None,
    }
}

/// Whether any assignment satisfies the formula of `root`.
pub fn is_satisfiable(root: Rc<Instance>) -> bool {
    search(root).is_some()
}
