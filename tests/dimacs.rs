use std::path::{Path, PathBuf};

use otter_cnf::{
    config::Config,
    context::Context,
    reports::Verdict,
    types::err::{self, ErrorKind},
};

fn dimacs_path(name: &str) -> PathBuf {
    Path::new(".").join("tests").join("dimacs").join(name)
}

mod dimacs {
    use super::*;

    #[test]
    fn small() {
        let the_context = Context::from_config(Config::default());

        let (infix, info) = the_context
            .read_dimacs_file(&dimacs_path("small.cnf"))
            .expect("failed to read small.cnf");
        assert_eq!(infix, "(x1 + ~x2) * (x2 + x3) * (x3 + ~x3 + x1)");
        assert_eq!(info.expected_atoms, Some(3));
        assert_eq!(info.expected_clauses, Some(3));
        assert_eq!(info.added_clauses, 3);

        let formula = the_context.read_formula(&infix).unwrap();
        assert_eq!(
            formula.to_string(),
            "((x1 + ~x2) * ((x2 + x3) * (x3 + (~x3 + x1))))"
        );
        assert!(formula.is_cnf());

        let report = the_context.validity(&formula).unwrap();
        assert_eq!((report.valid, report.invalid), (1, 2));
        assert_eq!(report.verdict(), Verdict::NotValid);

        let table = the_context.truth_table(&formula, |_| false).unwrap();
        assert_eq!(table.atoms(), ["x1", "x2", "x3"]);
        assert_eq!(table.is_tautology(), Ok(false));
    }

    #[test]
    fn tautology() {
        let the_context = Context::from_config(Config::default());

        let (infix, info) = the_context
            .read_dimacs_file(&dimacs_path("tautology.cnf"))
            .expect("failed to read tautology.cnf");
        assert_eq!(infix, "(x1 + ~x1) * (~x2 + x1 + x2)");
        assert_eq!(info.added_clauses, 2);

        let formula = the_context.read_formula(&infix).unwrap();
        let report = the_context.validity(&formula).unwrap();
        assert_eq!((report.valid, report.invalid), (2, 0));
        assert_eq!(report.verdict(), Verdict::Valid);

        let table = the_context.truth_table(&formula, |_| false).unwrap();
        assert_eq!(table.is_tautology(), Ok(true));
    }

    #[test]
    fn normalization_is_identity_on_clauses() {
        let the_context = Context::from_config(Config::default());
        let (infix, _) = the_context
            .read_dimacs_file(&dimacs_path("small.cnf"))
            .unwrap();

        let formula = the_context.read_formula(&infix).unwrap();
        assert_eq!(formula.to_cnf(), formula);
    }

    #[test]
    fn long_clause_chain() {
        let clause_count = 50_000;
        let mut source = format!("p cnf {} {clause_count}\n", clause_count + 1);
        for index in 1..=clause_count {
            source.push_str(&format!("{index} -{} 0\n", index + 1));
        }

        // The clauses form a chain, and each stage recurses to the height of the chain.
        let handle = std::thread::Builder::new()
            .stack_size(512 * 1024 * 1024)
            .spawn(move || {
                let the_context = Context::from_config(Config::default());
                let (infix, info) = the_context.read_dimacs(source.as_bytes()).unwrap();
                assert_eq!(info.added_clauses, clause_count);

                let formula = the_context.read_formula(&infix).unwrap();
                assert_eq!(formula.height(), clause_count + 2);
                assert!(formula.to_string().ends_with("(x50000 + ~x50001))))"));

                let report = the_context.validity(&formula).unwrap();
                assert_eq!((report.valid, report.invalid), (0, clause_count));
            })
            .unwrap();

        assert!(handle.join().is_ok());
    }

    #[test]
    fn missing_file() {
        let the_context = Context::from_config(Config::default());
        let path = dimacs_path("missing.cnf");

        assert_eq!(
            the_context.read_dimacs_file(&path),
            Err(ErrorKind::Input(err::InputError::FailedToOpen(path)))
        );
    }

    #[test]
    fn invalid_literal() {
        let the_context = Context::from_config(Config::default());
        let source = "p cnf 2 2\n1 -2 0\n2 two 0\n";

        assert_eq!(
            the_context.read_dimacs(source.as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::DimacsLiteral(3)))
        );
    }
}
