use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use otter_cnf::config::{Capacity, Config, ConfigOption};
use serde::Serialize;

/// Reads a propositional formula, tabulates it, normalizes it to conjunctive normal form, and checks whether the result is valid
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["formula", "dimacs"])))]
pub struct Args {
    /// A fully parenthesized formula, e.g. "((A > B) * ~C)"
    #[arg(short, long)]
    formula: Option<String>,

    /// A DIMACS form CNF file to read the formula from
    #[arg(short, long)]
    dimacs: Option<PathBuf>,

    /// Ask before building a truth table over more than this many atoms
    #[arg(short, long)]
    threshold: Option<Capacity>,

    /// The maximum number of tokens a formula may contain
    #[arg(long)]
    token_capacity: Option<Capacity>,

    /// The maximum number of literals in a single clause
    #[arg(long)]
    clause_capacity: Option<Capacity>,

    /// Build large truth tables without asking
    #[arg(short, long, default_value_t = false)]
    yes: bool,

    /// Skip the truth table
    #[arg(long, default_value_t = false)]
    no_table: bool,

    /// Also write the truth table to this file
    #[arg(long, conflicts_with = "no_table")]
    table_file: Option<PathBuf>,

    /// What to do with a formula read from a DIMACS file, which is already a conjunction of clauses
    #[arg(long, default_value_t, value_enum)]
    dimacs_cnf: DimacsCnf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DimacsCnf {
    #[default]
    /// Check the clauses as read
    Skip,
    /// Normalize the formula as any other
    Normalize,
}

impl std::fmt::Display for DimacsCnf {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Normalize => write!(f, "normalize"),
        }
    }
}

/// Where the formula is read from.
#[derive(Debug, Clone)]
pub enum Source {
    Formula(String),
    Dimacs(PathBuf),
}

/// Configuration of the binary, as distinct from the configuration of a context.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub source: Source,
    pub auto_confirm: bool,
    pub show_table: bool,
    pub table_file: Option<PathBuf>,
    pub dimacs_cnf: DimacsCnf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a formula nor a DIMACS file was given, or both were.
    Source,

    /// The value given for an option was outside the bounds of the option.
    OutOfBounds {
        name: &'static str,
        value: Capacity,
        min: Capacity,
        max: Capacity,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "exactly one of a formula or a DIMACS file is required"),
            Self::OutOfBounds {
                name,
                value,
                min,
                max,
            } => write!(f, "{value} is not a valid {name}, which must be within {min}..={max}"),
        }
    }
}

fn set_option(option: &mut ConfigOption<Capacity>, value: Option<Capacity>) -> Result<(), ConfigError> {
    if let Some(value) = value {
        if !option.set(value) {
            let (min, max) = option.min_max();
            return Err(ConfigError::OutOfBounds {
                name: option.name,
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}

pub fn config_from_args(args: Args) -> Result<(Config, CliConfig), ConfigError> {
    let mut config = Config::default();

    set_option(&mut config.truth_table_threshold, args.threshold)?;
    set_option(&mut config.token_capacity, args.token_capacity)?;
    set_option(&mut config.clause_literal_capacity, args.clause_capacity)?;

    let source = match (args.formula, args.dimacs) {
        (Some(text), None) => Source::Formula(text),
        (None, Some(path)) => Source::Dimacs(path),
        _ => return Err(ConfigError::Source),
    };

    let cli_config = CliConfig {
        source,
        auto_confirm: args.yes,
        show_table: !args.no_table,
        table_file: args.table_file,
        dimacs_cnf: args.dimacs_cnf,
    };

    Ok((config, cli_config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["otter_cnf", "--formula", "(A > B)"]);
        let (config, cli_config) = config_from_args(args).unwrap();

        assert_eq!(config.truth_table_threshold.value, 10);
        assert!(matches!(cli_config.source, Source::Formula(ref text) if text == "(A > B)"));
        assert!(cli_config.show_table);
        assert!(!cli_config.auto_confirm);
        assert_eq!(cli_config.dimacs_cnf, DimacsCnf::Skip);
    }

    #[test]
    fn bounds() {
        let args = Args::parse_from(["otter_cnf", "--formula", "A", "--threshold", "30"]);
        assert_eq!(
            config_from_args(args).unwrap_err(),
            ConfigError::OutOfBounds {
                name: "truth_table_threshold",
                value: 30,
                min: 0,
                max: 24
            }
        );

        let args = Args::parse_from(["otter_cnf", "--formula", "A", "--clause-capacity", "0"]);
        assert!(config_from_args(args).is_err());
    }

    #[test]
    fn table_file_requires_table() {
        assert!(Args::try_parse_from([
            "otter_cnf", "-f", "A", "--no-table", "--table-file", "table.txt"
        ])
        .is_err());

        let args = Args::parse_from(["otter_cnf", "-f", "A", "--table-file", "table.txt"]);
        let (_, cli_config) = config_from_args(args).unwrap();
        assert!(cli_config.show_table);
        assert_eq!(cli_config.table_file, Some(PathBuf::from("table.txt")));
    }

    #[test]
    fn one_source() {
        assert!(Args::try_parse_from(["otter_cnf"]).is_err());
        assert!(Args::try_parse_from(["otter_cnf", "-f", "A", "-d", "a.cnf"]).is_err());

        let args = Args::parse_from(["otter_cnf", "-d", "a.cnf", "--dimacs-cnf", "normalize"]);
        let (_, cli_config) = config_from_args(args).unwrap();
        assert!(matches!(cli_config.source, Source::Dimacs(_)));
        assert_eq!(cli_config.dimacs_cnf, DimacsCnf::Normalize);
    }
}
