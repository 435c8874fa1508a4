//! `sol25`: reads SOL25 source on standard input, writes its validated XML
//! AST to standard output (spec §6).
//!
//! No subcommands, no operands — the only recognised flags are `--help`/
//! `-h`. Parsed by hand rather than with `clap`: a one-flag CLI doesn't
//! need a builder.

use std::io::{self, Read, Write};
use std::process::ExitCode;

const HELP: &str = "\
sol25 - SOL25 front-end

Reads SOL25 source from standard input, checks its lexical, syntactic, and
static-semantic correctness, and writes the XML representation of its
abstract syntax tree to standard output.

USAGE:
    sol25
    sol25 --help

With no arguments, reads all of standard input and writes all of standard
output. Exits 0 on success; see the project documentation for the full
exit-code table.";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => run(),
        [flag] if flag == "--help" || flag == "-h" => {
            println!("{HELP}");
            ExitCode::from(0)
        }
        _ => {
            eprintln!("error: unrecognized arguments");
            ExitCode::from(10)
        }
    }
}

fn run() -> ExitCode {
    let mut source = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut source) {
        eprintln!("error: failed to read standard input: {err}");
        return ExitCode::from(11);
    }

    match sol25_core::compile(&source) {
        Ok(xml) => match io::stdout().write_all(xml.as_bytes()) {
            Ok(()) => ExitCode::from(0),
            Err(err) => {
                eprintln!("error: failed to write standard output: {err}");
                ExitCode::from(11)
            }
        },
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
