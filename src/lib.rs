//! A library for parsing propositional formulas, tabulating their truth values, and rewriting them to conjunctive normal form.
//!
//! otter_cnf reads fully parenthesized formulas (or the clauses of a DIMACS file), builds parse trees, and from these:
//! - Prints the formula (in-order) and the height of the tree.
//! - Builds a truth table by evaluation on every valuation.
//! - Normalizes the formula to conjunctive normal form.
//! - Counts the clauses of a normalized formula which are tautologies, to decide whether the formula is valid.
//!
//! # Orientation
//!
//! The library is designed around a [context], which holds a [configuration](config).
//!
//! Formulas are [parsed](parse) in stages, first to [tokens](parse::tokenize), then to [prefix form](parse::prefix), and then to a [tree](parse::tree).
//! A parsed formula is a [Formula](structures::formula::Formula), on which the [procedures] are defined.
//!
//! Each procedure which derives a formula from a formula returns a new formula, and leaves the original as it was.
//!
//! # Examples
//!
//! + Parse a formula, and check the clauses of its normal form.
//!
//! ```rust
//! # use otter_cnf::context::Context;
//! # use otter_cnf::config::Config;
//! # use otter_cnf::reports::Verdict;
//! let the_context = Context::from_config(Config::default());
//!
//! let formula = the_context.read_formula("((p > q) + (q > p))").unwrap();
//! let cnf = formula.to_cnf();
//!
//! assert_eq!(cnf.to_string(), "((~p + q) + (~q + p))");
//!
//! let report = the_context.validity(&cnf).unwrap();
//! assert_eq!(report.verdict(), Verdict::Valid);
//! let table = the_context.truth_table(&formula, |_| false).unwrap();
//! assert_eq!(table.is_tautology(), Ok(true));
//! ```
//!
//! + Read a DIMACS formula.
//!
//! ```rust
//! # use otter_cnf::context::Context;
//! # use otter_cnf::config::Config;
//! # use std::io::Write;
//! let the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//!  1 -2 0
//!  2  3 0
//! ");
//!
//! let (infix, _) = the_context.read_dimacs(dimacs.as_slice()).unwrap();
//! assert_eq!(infix, "(x1 + ~x2) * (x2 + x3)");
//!
//! let formula = the_context.read_formula(&infix).unwrap();
//! assert_eq!(formula.to_string(), "((x1 + ~x2) * (x2 + x3))");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is provided by the library, though the binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
//!
//! ```sh
//! RUST_LOG=cnf=debug cargo run --features log -- --formula "((A * B) + (C * D))"
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
