/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [tokenizing](crate::parse::tokenize)
    pub const TOKENIZE: &str = "tokenize";

    /// Logs related to [conversion to prefix form](crate::parse::prefix)
    pub const PREFIX: &str = "prefix";

    /// Logs related to [building a parse tree](crate::parse::tree)
    pub const TREE: &str = "tree";

    /// Logs related to [normalization](crate::procedures::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to [truth tables](crate::procedures::truth_table)
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to [validity](crate::procedures::validity)
    pub const VALIDITY: &str = "validity";

    /// Logs related to [DIMACS](crate::builder::dimacs)
    pub const DIMACS: &str = "dimacs";
}
