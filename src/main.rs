use clap::{Arg, ArgAction, Command};
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use yamli::formatting::{self, Identity, Render, Syntax};
use yamli::language::Document;
use yamli::parsing;
use yamli::problem::{concise_loading_error, concise_parsing_error, full_parsing_error};
use yamli::rendering::Terminal;

#[derive(Eq, Debug, PartialEq)]
enum Output {
    Native,
    Json,
    Silent,
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("yamli")
        .version(VERSION)
        .propagate_version(true)
        .about("Parse and validate simple YAML configuration files.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("parse")
                .about("Parse the given file and describe each element found in it")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["native", "json", "none"])
                        .default_value("native")
                        .action(ArgAction::Set)
                        .help("Which kind of diagnostic output to print when parsing."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the document you want to parse, or '-' to read from standard input."),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check the syntax of the given file")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the document you want to validate, or '-' to read from standard input."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", submatches)) => {
            let output = match submatches
                .get_one::<String>("output")
                .map(String::as_str)
            {
                Some("json") => Output::Json,
                Some("none") => Output::Silent,
                _ => Output::Native,
            };
            debug!(?output);

            let raw_output = submatches.get_flag("raw-control-chars");

            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap(); // argument is required
            debug!(?filename);

            let renderer: &dyn Render = if raw_output || std::io::stdout().is_terminal() {
                &Terminal
            } else {
                &Identity
            };

            let document = load_and_parse(filename, renderer, true);

            match output {
                Output::Native => {
                    print!("{}", formatting::validate_document(&document, renderer));
                }
                Output::Json => match serde_json::to_string_pretty(&document) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("{}: {}", renderer.style(Syntax::Error, "error"), error);
                        std::process::exit(1);
                    }
                },
                Output::Silent => {}
            }
        }
        Some(("validate", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap(); // argument is required
            debug!(?filename);

            let renderer: &dyn Render = if std::io::stderr().is_terminal() {
                &Terminal
            } else {
                &Identity
            };

            load_and_parse(filename, renderer, false);

            println!("Valid syntax: {}", filename.display());
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: yamli [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Read and parse the given file, reporting any problem to stderr and
/// terminating the process if either step fails. Syntax errors are shown
/// with an explanation if `detailed` is set, otherwise on a single line.
fn load_and_parse(filename: &Path, renderer: &dyn Render, detailed: bool) -> Document {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error, renderer));
            std::process::exit(1);
        }
    };

    match parsing::parse(filename, &content) {
        Ok(document) => document,
        Err(error) => {
            debug!(%error);
            if detailed {
                eprintln!("{}", full_parsing_error(&error, filename, renderer));
            } else {
                eprintln!("{}", concise_parsing_error(&error, filename, renderer));
            }
            std::process::exit(1);
        }
    }
}
