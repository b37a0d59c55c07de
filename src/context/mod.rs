/*!
The context --- within which formulas are read, tabulated, normalized, and checked for validity.

A context holds a [configuration](crate::config), and methods on a context apply the relevant parts of the configuration to the procedures of the library.
No formula is stored within a context, and so a context may be used for any number of formulas.

# Example
```rust
# use otter_cnf::context::Context;
# use otter_cnf::config::Config;
# use otter_cnf::reports::Verdict;
let the_context = Context::from_config(Config::default());

let formula = the_context.read_formula("(A > B)").unwrap();
assert_eq!(the_context.prefix_of("(A > B)").unwrap().to_string(), "> A B");

let table = the_context.truth_table(&formula, |_| false).unwrap();
assert_eq!(table.row_count(), 4);

let cnf = formula.to_cnf();
assert_eq!(cnf.to_string(), "(~A + B)");

let report = the_context.validity(&cnf).unwrap();
assert_eq!(report.verdict(), Verdict::NotValid);
```
*/

use std::{fs::File, io::BufReader, path::Path};

use crate::{
    builder::dimacs::{dimacs_to_infix, ParserInfo},
    config::Config,
    parse,
    procedures::{truth_table::TruthTable, validity::check_validity},
    reports::ValidityReport,
    structures::{formula::Formula, token::TokenStream},
    types::err::{self, ErrorKind},
};

pub struct Context {
    pub config: Config,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context { config }
    }

    /// The prefix form of `text`.
    pub fn prefix_of(&self, text: &str) -> Result<TokenStream, ErrorKind> {
        parse::prefix_of(text, &self.config)
    }

    /// Parses `text` to a formula.
    pub fn read_formula(&self, text: &str) -> Result<Formula, ErrorKind> {
        parse::parse(text, &self.config)
    }

    /// Reads a DIMACS source, returning the formula as infix text.
    ///
    /// The text may then be read as any other formula, with [read_formula](Context::read_formula).
    ///
    /// ```rust,ignore
    /// let (infix, info) = context.read_dimacs(BufReader::new(&file))?;
    /// let formula = context.read_formula(&infix)?;
    /// ```
    pub fn read_dimacs(
        &self,
        reader: impl std::io::BufRead,
    ) -> Result<(String, ParserInfo), ErrorKind> {
        dimacs_to_infix(reader)
    }

    /// Reads the DIMACS file at `path`, as with [read_dimacs](Context::read_dimacs).
    pub fn read_dimacs_file(&self, path: &Path) -> Result<(String, ParserInfo), ErrorKind> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => return Err(ErrorKind::from(err::InputError::FailedToOpen(path.to_owned()))),
        };
        self.read_dimacs(BufReader::new(file))
    }

    /// The truth table of `formula`, with `confirm` called if the count of atoms exceeds the configured threshold.
    pub fn truth_table<'f>(
        &self,
        formula: &'f Formula,
        confirm: impl FnOnce(usize) -> bool,
    ) -> Result<TruthTable<'f>, ErrorKind> {
        TruthTable::from_formula(formula, self.config.truth_table_threshold.value, confirm)
    }

    /// Counts of the valid and invalid clauses of `cnf`.
    pub fn validity(&self, cnf: &Formula) -> Result<ValidityReport, ErrorKind> {
        Ok(check_validity(
            cnf,
            self.config.clause_literal_capacity.value,
        )?)
    }
}
