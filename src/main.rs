//! Eqsys - Linear Equation System Solver
//!
//! Solves a system of first-degree equations, one equation per line.
//!
//! # Usage
//!
//! ```bash
//! printf 'a = 1 - b\n4 + a = 2a\n' | eqsys
//! eqsys --decimal --precision 3 equations.txt
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eqsys_core::{
    dsl,
    error::{EqsysError, Result},
    Notation, RankPolicy, Solution, SolverConfig, SystemInput,
};
use tracing::Level;

/// Printed to stderr when a system cannot be solved.
const UNSOLVABLE_MESSAGE: &str = "The equations could not be solved.";

/// Linear equation system solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one equation per line (reads stdin when omitted)
    #[arg(value_name = "EQUATIONS_FILE")]
    equations_file: Option<PathBuf>,

    /// Print decimals instead of exact fractions
    #[arg(short, long)]
    decimal: bool,

    /// Digits after the decimal point in decimal notation
    #[arg(short, long, default_value_t = eqsys_core::number::DEFAULT_PRECISION)]
    precision: usize,

    /// Print HTML markup instead of plain text
    #[arg(short, long)]
    markup: bool,

    /// Fail instead of expressing unknowns through free variables
    #[arg(long)]
    strict: bool,

    /// Fail on inconsistent systems instead of approximating them
    #[arg(long)]
    no_least_squares: bool,

    /// Log solver steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "solve failed");
            eprintln!("{UNSOLVABLE_MESSAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let input = match &args.equations_file {
        Some(path) => dsl::parse_file(path)?,
        None => {
            let mut block = String::new();
            std::io::stdin()
                .read_to_string(&mut block)
                .map_err(|e| EqsysError::FileReadError {
                    path: "<stdin>".to_string(),
                    source: e,
                })?;
            SystemInput::from_text(&block)
        }
    };

    let config = SolverConfig::new()
        .with_policy(if args.strict {
            RankPolicy::Strict
        } else {
            RankPolicy::Parametrize
        })
        .with_least_squares(!args.no_least_squares);

    let solution = eqsys_core::solve_with(input, &config)?;
    Ok(format_solution(&solution, args))
}

fn format_solution(solution: &Solution, args: &Args) -> String {
    let notation = if args.decimal {
        Notation::Decimal {
            precision: args.precision,
        }
    } else {
        Notation::Rational
    };

    let body = if args.markup {
        solution.to_markup(notation)
    } else {
        solution.render(notation)
    };

    if solution.is_approximation() {
        format!("Approximate solution: {body}")
    } else {
        format!("Solution: {body}")
    }
}
