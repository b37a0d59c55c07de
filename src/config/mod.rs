/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each value is a [ConfigOption] bounded by some minimum and maximum.

The defaults are:
- A capacity of 2,000,000 tokens, enough for the formula of a large DIMACS file.
- A capacity of 1024 literals per clause when checking validity.
- Confirmation before building a truth table over more than 10 atoms.
*/

mod config_option;
pub use config_option::ConfigOption;

/// A count of tokens, literals, or atoms.
pub type Capacity = usize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of tokens a formula may be split into.
    pub token_capacity: ConfigOption<Capacity>,

    /// The maximum number of literals in a single clause when checking validity.
    pub clause_literal_capacity: ConfigOption<Capacity>,

    /// The number of atoms above which a truth table requires confirmation.
    pub truth_table_threshold: ConfigOption<Capacity>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            token_capacity: ConfigOption {
                name: "token_capacity",
                min: 1,
                max: Capacity::MAX,
                value: 2_000_000,
            },

            clause_literal_capacity: ConfigOption {
                name: "clause_literal_capacity",
                min: 1,
                max: Capacity::MAX,
                value: 1024,
            },

            // Each row is evaluated and held in memory, so the maximum is far below the width of a row index.
            truth_table_threshold: ConfigOption {
                name: "truth_table_threshold",
                min: 0,
                max: 24,
                value: 10,
            },
        }
    }
}
