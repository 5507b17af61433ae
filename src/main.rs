use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use arithmetica::{
    error::EvalFailure,
    interpreter::{evaluator::evaluate, lexer::scan, parser::core::parse},
    util::num::format_number,
};
use clap::Parser;

/// Glyph printed on stdout in place of a result when an input is malformed.
const ERROR_GLYPH: &str = "Error";

/// arithmetica is a small calculator for arithmetic expressions.
///
/// With no input argument, expressions are read from stdin, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a file with one expression per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the scanned tokens before each result.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed expression tree before each result.
    #[arg(short, long)]
    ast: bool,

    /// The expression to compute, or a file path with `--file`. May start
    /// with `-`, as in `-5`.
    #[arg(allow_hyphen_values = true)]
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let all_ok = match (&args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            script.lines()
                  .filter(|line| !line.trim().is_empty())
                  .fold(true, |ok, line| run_line(line, &args) && ok)
        },
        (Some(expression), false) => run_line(expression, &args),
        (None, _) => {
            let mut ok = true;
            for line in io::stdin().lock().lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read from stdin: {e}");
                    std::process::exit(1);
                });
                if !line.trim().is_empty() {
                    ok &= run_line(&line, &args);
                }
            }
            ok
        },
    };

    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Computes one line and prints its result, or the error glyph.
///
/// Returns `false` if the line was malformed.
fn run_line(line: &str, args: &Args) -> bool {
    match compute_line(line, args) {
        Ok(result) => {
            println!("{result}");
            true
        },
        Err(e) => {
            println!("{ERROR_GLYPH}");
            eprintln!("{e}");
            false
        },
    }
}

/// Scans, parses and evaluates one line, printing the requested debug views
/// as each stage completes.
fn compute_line(line: &str, args: &Args) -> Result<String, EvalFailure> {
    let tokens = scan(line)?;
    if args.tokens {
        let shown: Vec<String> = tokens.iter().map(|(token, _)| token.to_string()).collect();
        println!("{}", shown.join(" "));
    }

    let ast = parse(&tokens)?;
    if args.ast {
        println!("{ast}");
    }

    Ok(format_number(evaluate(&ast)))
}
