use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;

use headcheck::diagnostics::Reporter;
use headcheck::parsing::{self, Lookup};
use headcheck::report;

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .init();

    let matches = Command::new("headcheck")
        .version(VERSION)
        .propagate_version(true)
        .about("Validates the metadata header on student submissions.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Validate the header comment block in the given source file")
                .arg(
                    Arg::new("silent")
                        .long("silent")
                        .action(ArgAction::SetTrue)
                        .help("Suppress diagnostics; the exit status alone reports the outcome."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The source file whose header you want to validate."),
                ),
        )
        .subcommand(
            Command::new("field")
                .about("Look up a field from a validated header")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The source file whose header you want to query."),
                )
                .arg(
                    Arg::new("keyword")
                        .help("One of: name, class, email, github, asgt, partners, comment. Omit to print the whole record as JSON."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let silent = submatches.get_flag("silent");
            match submatches.get_one::<String>("filename") {
                Some(filename) => run_check(Path::new(filename), silent),
                None => ExitCode::FAILURE,
            }
        }
        Some(("field", submatches)) => {
            let keyword = submatches
                .get_one::<String>("keyword")
                .map(String::as_str);
            match submatches.get_one::<String>("filename") {
                Some(filename) => run_field(Path::new(filename), keyword),
                None => ExitCode::FAILURE,
            }
        }
        _ => {
            println!("usage: headcheck [COMMAND] ...");
            println!("Try '--help' for more information.");
            ExitCode::FAILURE
        }
    }
}

fn run_check(filename: &Path, silent: bool) -> ExitCode {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = if silent {
        Reporter::silent()
    } else {
        Reporter::verbose()
    };

    match parsing::parse_header(&content, &mut reporter) {
        Some(record) => {
            if !silent {
                print!("{}", report::render_summary(&record));
            }
            ExitCode::SUCCESS
        }
        None => {
            if !silent {
                eprintln!(
                    "{}: {}: submission header rejected",
                    "error".bright_red(),
                    filename.display()
                );
            }
            ExitCode::FAILURE
        }
    }
}

fn run_field(filename: &Path, keyword: Option<&str>) -> ExitCode {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return ExitCode::FAILURE;
        }
    };

    match parsing::lookup(&content, keyword) {
        Some(Lookup::Record(record)) => {
            println!("{}", report::render_json(&record));
            ExitCode::SUCCESS
        }
        Some(Lookup::Field(value)) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!(
                "{}: {}: no such field, or the header was rejected",
                "error".bright_red(),
                filename.display()
            );
            ExitCode::FAILURE
        }
    }
}
