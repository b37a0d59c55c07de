//! The abstract elements of the library: tokens, formulas, and valuations.

pub mod formula;
pub mod token;
pub mod valuation;
