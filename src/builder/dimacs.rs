use std::io::BufRead;

use crate::{
    misc::log::targets,
    types::err::{self, ErrorKind},
};

/// Details of a DIMACS source, after reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given by the preamble, if present.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given by the preamble, if present.
    pub expected_clauses: Option<usize>,

    /// The count of (non-empty) clauses read.
    pub added_clauses: usize,
}

/// Reads a DIMACS source and renders the formula in infix form.
///
/// ```rust
/// # use otter_cnf::builder::dimacs::dimacs_to_infix;
/// # use std::io::Write;
/// let mut dimacs = vec![];
/// let _ = dimacs.write(b"
/// c A comment
/// p cnf 3 2
///  1 -2 0
///  2  3 0
/// ");
///
/// let (infix, info) = dimacs_to_infix(dimacs.as_slice()).unwrap();
/// assert_eq!(infix, "(x1 + ~x2) * (x2 + x3)");
/// assert_eq!(info.expected_atoms, Some(3));
/// assert_eq!(info.added_clauses, 2);
/// ```
pub fn dimacs_to_infix(mut reader: impl BufRead) -> Result<(String, ParserInfo), ErrorKind> {
    let mut info = ParserInfo::default();
    let mut buffer = String::with_capacity(1024);
    let mut infix = String::default();
    let mut line_counter = 0;

    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(ErrorKind::from(err::InputError::Line(line_counter + 1))),
        }

        let line = buffer.trim_start();
        match line.chars().next() {
            None | Some('c') => continue,

            Some('%') => break 'formula_loop,

            Some('p') => {
                let mut problem_details = line.split_whitespace().skip(2);
                info.expected_atoms = problem_details.next().and_then(|count| count.parse().ok());
                info.expected_clauses = problem_details.next().and_then(|count| count.parse().ok());
                continue;
            }

            Some(_) => {}
        }

        let mut clause = String::default();
        for item in line.split_whitespace() {
            let literal = match item.parse::<isize>() {
                Ok(0) => break,
                Ok(literal) => literal,
                Err(_) => {
                    log::error!(target: targets::DIMACS, "Invalid literal '{item}' on line {line_counter}");
                    return Err(ErrorKind::from(err::ParseError::DimacsLiteral(line_counter)));
                }
            };

            if !clause.is_empty() {
                clause.push_str(" + ");
            }
            if literal.is_negative() {
                clause.push('~');
            }
            clause.push('x');
            clause.push_str(&literal.unsigned_abs().to_string());
        }

        if clause.is_empty() {
            continue;
        }

        if info.added_clauses > 0 {
            infix.push_str(" * ");
        }
        infix.push('(');
        infix.push_str(&clause);
        infix.push(')');
        info.added_clauses += 1;
    }

    if let Some(expected) = info.expected_clauses {
        if expected != info.added_clauses {
            log::warn!(target: targets::DIMACS, "Expected {expected} clauses, read {}", info.added_clauses);
        }
    }

    Ok((infix, info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        let (infix, _) = dimacs_to_infix("1 -2 0\n2 3 0\n".as_bytes()).unwrap();
        assert_eq!(infix, "(x1 + ~x2) * (x2 + x3)");
    }

    #[test]
    fn unit_and_empty_clauses() {
        let (infix, info) = dimacs_to_infix("-4 0\n0\n\n5 0\n".as_bytes()).unwrap();
        assert_eq!(infix, "(~x4) * (x5)");
        assert_eq!(info.added_clauses, 2);
    }

    #[test]
    fn preamble() {
        let source = "c comment\n  c indented comment\np cnf 2 1\n1 2 0\n";
        let (infix, info) = dimacs_to_infix(source.as_bytes()).unwrap();
        assert_eq!(infix, "(x1 + x2)");
        assert_eq!(info.expected_atoms, Some(2));
        assert_eq!(info.expected_clauses, Some(1));
    }

    #[test]
    fn no_preamble() {
        let (_, info) = dimacs_to_infix("1 0\n".as_bytes()).unwrap();
        assert_eq!(info.expected_atoms, None);
        assert_eq!(info.expected_clauses, None);
    }

    #[test]
    fn items_after_zero_are_ignored() {
        let (infix, _) = dimacs_to_infix("1 2 0 3\n".as_bytes()).unwrap();
        assert_eq!(infix, "(x1 + x2)");
    }

    #[test]
    fn satlib_end() {
        let (infix, _) = dimacs_to_infix("1 0\n%\n0\n2 0\n".as_bytes()).unwrap();
        assert_eq!(infix, "(x1)");
    }

    #[test]
    fn invalid_literal() {
        assert_eq!(
            dimacs_to_infix("1 0\n1 y 0\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::DimacsLiteral(2)))
        );
    }
}
