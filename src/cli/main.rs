#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::time::Instant;

use clap::Parser;
use otter_cnf::{
    context::Context,
    parse::tree::build_tree,
    types::err::{self, ErrorKind},
};

mod config;
mod misc;

use config::{CliConfig, DimacsCnf, Source};

const EXIT_CONFIG: i32 = 1;
const EXIT_FORMULA: i32 = 2;

/// Stack size of the thread a formula is processed on.
///
/// Building, printing, and dropping a parse tree recurse to the height of the tree, and the clauses of a DIMACS file form a chain as high as the count of clauses.
/// At the default token capacity a chain may be some 500,000 clauses high.
const STACK_SIZE: usize = 1024 * 1024 * 1024;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = config::Args::parse();

    let (config, cli_config) = match config::config_from_args(args) {
        Ok(configs) => configs,
        Err(e) => {
            println!("c CONFIGURATION ERROR: {e}");
            std::process::exit(EXIT_CONFIG);
        }
    };

    let the_context = Context::from_config(config);

    let start = Instant::now();
    let result = match run_on_large_stack(the_context, cli_config) {
        Ok(result) => result,
        Err(e) => {
            println!("c FAILED TO START: {e}");
            std::process::exit(EXIT_CONFIG);
        }
    };
    println!("Total execution time: {:.2?}", start.elapsed());

    if let Err(e) = result {
        println!("Error: {e}");
        if let ErrorKind::Resource(err::ResourceError::TruthTableDeclined(_)) = e {
            println!("c The truth table may be skipped with --no-table");
        }
        std::process::exit(EXIT_FORMULA);
    }
}

/// Runs each stage on a thread with a stack of [STACK_SIZE].
///
/// The outer error is from spawning or joining the thread, the inner error from some stage.
fn run_on_large_stack(
    context: Context,
    cli_config: CliConfig,
) -> Result<Result<(), ErrorKind>, std::io::Error> {
    let handle = std::thread::Builder::new()
        .name("formula".to_string())
        .stack_size(STACK_SIZE)
        .spawn(move || run(&context, &cli_config))?;

    match handle.join() {
        Ok(result) => Ok(result),
        Err(_) => Err(std::io::Error::other("the formula thread panicked")),
    }
}

fn run(context: &Context, cli_config: &CliConfig) -> Result<(), ErrorKind> {
    let (infix, from_dimacs) = match &cli_config.source {
        Source::Formula(text) => (text.clone(), false),
        Source::Dimacs(path) => {
            println!("c Reading DIMACS file from {path:?}");
            let (infix, info) = context.read_dimacs_file(path)?;
            misc::examine_parser_info(&info);
            (infix, true)
        }
    };

    let prefix = context.prefix_of(&infix)?;
    println!("Prefix: {prefix}");

    let formula = build_tree(prefix)?;
    println!("Parse tree (in-order): {formula}");
    println!("Height: {}", formula.height());

    match cli_config.show_table {
        true => {
            let table = context.truth_table(&formula, |atom_count| {
                misc::confirm_table(atom_count, cli_config.auto_confirm)
            })?;
            println!("Truth table:");
            table.write_to(std::io::stdout().lock())?;

            if let Some(path) = &cli_config.table_file {
                misc::write_table_file(&table, path)?;
                println!("c Truth table written to {path:?}");
            }
        }
        false => println!("Truth table: skipped"),
    }

    let report = match from_dimacs && cli_config.dimacs_cnf == DimacsCnf::Skip {
        true => {
            println!("CNF: skipped, as the DIMACS formula is a conjunction of clauses");
            context.validity(&formula)?
        }
        false => {
            let cnf = formula.to_cnf();
            println!("CNF: {cnf}");
            context.validity(&cnf)?
        }
    };

    misc::print_report(&report);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use otter_cnf::config::Config;
    use std::io::Write;

    #[test]
    fn long_clause_chain() {
        let clause_count = 60_000;
        let path = std::env::temp_dir().join(format!("otter_cnf_chain_{}.cnf", std::process::id()));

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "p cnf {} {clause_count}", clause_count + 1).unwrap();
        for index in 1..=clause_count {
            writeln!(file, "{index} -{} 0", index + 1).unwrap();
        }
        drop(file);

        let cli_config = CliConfig {
            source: Source::Dimacs(path.clone()),
            auto_confirm: false,
            show_table: false,
            table_file: None,
            dimacs_cnf: DimacsCnf::Skip,
        };

        let result = run_on_large_stack(Context::from_config(Config::default()), cli_config);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Ok(Ok(()))));
    }
}
