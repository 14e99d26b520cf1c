/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [search](crate::procedures::search)
    pub const SEARCH: &str = "search";

    /// Logs related to [simplification](crate::procedures::simplify)
    pub const SIMPLIFY: &str = "simplify";

    /// Logs related to [building a formula](crate::builder)
    pub const BUILD: &str = "build";

    /// Logs related to [reconstruction](crate::procedures::reconstruct)
    pub const RECONSTRUCT: &str = "reconstruct";
}
