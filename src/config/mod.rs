/*!
Configuration of a context.

The search itself is deterministic and takes no tuning.
What the configuration offers are external caps: a formula requiring the full 2^n exploration otherwise blocks until exhausted, and a caller needing bounded latency may limit the count of expansions or the wall-clock time of a solve.
A solve stopped at a cap reports [Unknown](crate::reports::Report::Unknown).
*/

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// A limit on the count of instances popped from the search stack during a solve.
    pub expansion_limit: Option<usize>,

    /// A limit on the wall-clock duration of a solve.
    pub time_limit: Option<Duration>,
}

impl Default for Config {
    /// The default configuration places no cap on a solve.
    fn default() -> Self {
        Config {
            expansion_limit: None,
            time_limit: None,
        }
    }
}
