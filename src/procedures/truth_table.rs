/*!
Truth tables, by enumeration of every valuation of the atoms of a formula.

The atoms of a formula are ordered by first occurrence, and the rows of a table follow the binary count from all atoms false to all atoms true, with the first atom as the most significant bit.

Rows are not stored.
Each row is built, and the formula evaluated, when the row is asked for, and so a table over many atoms takes time but no more memory than a single row.

As the size of a table is exponential in the count of atoms, above some threshold a table is built only on confirmation.
Confirmation is requested from a callback, given the count of atoms, and if declined a [ResourceError::TruthTableDeclined](err::ResourceError::TruthTableDeclined) is returned.

```rust
# use otter_cnf::procedures::truth_table::TruthTable;
# use otter_cnf::structures::formula::Formula;
let formula: Formula = "(A * ~A)".parse().unwrap();
let table = TruthTable::from_formula(&formula, 10, |_| false).unwrap();

assert_eq!(table.atoms(), ["A"]);
assert_eq!(table.row_count(), 2);
assert!(table.rows().all(|row| !row.unwrap().result));
```
*/

use std::io::Write;

use crate::{
    config::Capacity,
    misc::log::targets,
    structures::{formula::Formula, valuation::Valuation},
    types::err::{self, ErrorKind},
};

/// A row of a truth table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTableRow {
    /// The value of each atom, in the order of atoms of the table.
    pub values: Vec<bool>,

    /// The value of the formula.
    pub result: bool,
}

/// The truth table of a formula, with rows built on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable<'f> {
    formula: &'f Formula,
    atoms: Vec<&'f str>,
    row_count: usize,
}

impl<'f> TruthTable<'f> {
    /// The truth table of `formula`.
    ///
    /// If the formula has more than `threshold` atoms `confirm` is called with the count of atoms, and the table is built only if `confirm` returns true.
    pub fn from_formula(
        formula: &'f Formula,
        threshold: Capacity,
        confirm: impl FnOnce(usize) -> bool,
    ) -> Result<Self, ErrorKind> {
        let atoms = formula.atoms();
        let atom_count = atoms.len();

        if atom_count > threshold {
            log::info!(target: targets::TRUTH_TABLE, "{atom_count} atoms exceeds the threshold of {threshold}");
            if !confirm(atom_count) {
                return Err(ErrorKind::from(err::ResourceError::TruthTableDeclined(atom_count)));
            }
        }

        let Some(row_count) = u32::try_from(atom_count)
            .ok()
            .and_then(|shift| 1_usize.checked_shl(shift))
        else {
            return Err(ErrorKind::from(err::ResourceError::TruthTableWidth(atom_count)));
        };

        log::debug!(target: targets::TRUTH_TABLE, "{row_count} rows");

        Ok(TruthTable {
            formula,
            atoms,
            row_count,
        })
    }

    /// The atoms of the table, in the order of the values of each row.
    pub fn atoms(&self) -> &[&'f str] {
        &self.atoms
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The row at `index`, with the value of each atom read from the bits of the index.
    ///
    /// Bits above those of the last row are ignored.
    pub fn row(&self, index: usize) -> Result<TruthTableRow, err::EvaluationError> {
        let atom_count = self.atoms.len();
        let mut valuation = Valuation::with_capacity(atom_count);
        let mut values = Vec::with_capacity(atom_count);

        for (position, atom) in self.atoms.iter().enumerate() {
            let value = (index >> (atom_count - 1 - position)) & 1 == 1;
            valuation.set(*atom, value);
            values.push(value);
        }

        let result = self.formula.evaluate(&valuation)?;
        Ok(TruthTableRow { values, result })
    }

    /// Each row of the table, in order.
    pub fn rows(&self) -> impl Iterator<Item = Result<TruthTableRow, err::EvaluationError>> + '_ {
        (0..self.row_count).map(move |index| self.row(index))
    }

    /// Whether the formula is true on every row.
    ///
    /// Rows are evaluated only until some row is false.
    pub fn is_tautology(&self) -> Result<bool, err::EvaluationError> {
        for row in self.rows() {
            if !row?.result {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Writes the table to `sink`, one row at a time.
    ///
    /// The table is written as a header of atoms and a result column, a rule, and then a line for each row with values written as 0 or 1.
    pub fn write_to(&self, mut sink: impl Write) -> Result<(), ErrorKind> {
        let widths = self
            .atoms
            .iter()
            .map(|atom| atom.chars().count())
            .collect::<Vec<_>>();

        let mut header = String::default();
        for (atom, width) in self.atoms.iter().zip(widths.iter().copied()) {
            header.push_str(&format!("{atom:<width$} "));
        }
        header.push_str("| Result");

        writeln!(sink, "{header}").map_err(sink_error)?;
        writeln!(sink, "{}", "-".repeat(header.chars().count())).map_err(sink_error)?;

        let mut line = String::default();
        for row in self.rows() {
            let row = row?;

            line.clear();
            for (value, width) in row.values.iter().zip(widths.iter().copied()) {
                line.push_str(&format!("{:<width$} ", u8::from(*value)));
            }
            line.push_str(&format!("| {}", u8::from(row.result)));

            writeln!(sink, "{line}").map_err(sink_error)?;
        }

        sink.flush().map_err(sink_error)
    }
}

fn sink_error(e: std::io::Error) -> ErrorKind {
    log::error!(target: targets::TRUTH_TABLE, "Failed to write table: {e}");
    ErrorKind::from(err::InputError::Sink)
}
