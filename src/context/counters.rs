use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every instance popped from the search stack.
    pub expansions: usize,

    /// A count of every derived instance discarded for containing an empty clause.
    pub dead_ends: usize,

    /// A count of all unit assignments applied.
    pub decisions: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
