//! Procedures on formulas.
//!
//! - [Evaluation](evaluate) on a valuation, and [truth tables](truth_table) from evaluation on every valuation.
//! - [Normalization](cnf) to conjunctive normal form.
//! - [Validity](validity) of a formula in conjunctive normal form.

pub mod cnf;
pub mod evaluate;
pub mod truth_table;
pub mod validity;
