use std::{
    fs::File,
    io::{BufRead, Write},
    path::Path,
};

use crossterm::style::Stylize;
use otter_cnf::{
    builder::dimacs::ParserInfo,
    procedures::truth_table::TruthTable,
    reports::{ValidityReport, Verdict},
    types::err::{self, ErrorKind},
};

/// Asks on stdin whether to build a truth table over `atom_count` atoms.
/// Anything other than a 'y' is a refusal.
pub fn confirm_table(atom_count: usize, auto_confirm: bool) -> bool {
    if auto_confirm {
        return true;
    }

    print!("The formula has {atom_count} atoms, and so a truth table of 2^{atom_count} rows. Continue? [y/N] ");
    let _ = std::io::stdout().flush();

    let mut answer = String::default();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}

pub fn write_table_file(table: &TruthTable, path: &Path) -> Result<(), ErrorKind> {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(_) => return Err(ErrorKind::from(err::InputError::FailedToOpen(path.to_owned()))),
    };
    table.write_to(std::io::BufWriter::new(file))?;
    Ok(())
}

pub fn examine_parser_info(info: &ParserInfo) {
    if let Some(expected) = info.expected_atoms {
        println!("c Expected {expected} atoms");
    }
    match info.expected_clauses {
        Some(expected) if expected != info.added_clauses => {
            println!("c Expected {expected} clauses, read {}", info.added_clauses)
        }
        _ => println!("c Read {} clauses", info.added_clauses),
    }
}

pub fn print_report(report: &ValidityReport) {
    println!("Valid clauses: {}", report.valid);
    println!("Invalid clauses: {}", report.invalid);

    let verdict = report.verdict();
    let styled = match verdict {
        Verdict::Valid => verdict.to_string().green(),
        Verdict::NotValid => verdict.to_string().red(),
    };
    println!("Result: The formula is {styled}");
}
