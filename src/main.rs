use clap::{value_parser, Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use sgf::error::SgfError;
use sgf::formatting::{self, Identity, Layout, Terminal};
use sgf::language::Collection;
use sgf::parsing::{self, Duplicates, Options};

mod output;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("sgf")
        .version(VERSION)
        .propagate_version(true)
        .about("Check and format Smart Game Format (SGF) game records.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log details of what is being done to standard error."),
        )
        .arg(
            Arg::new("replace-duplicates")
                .long("replace-duplicates")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("When a node repeats a property, keep the last one rather than failing."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given game record and summarize its structure")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the game record you want to check, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Print the given game record in canonical form")
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .action(ArgAction::SetTrue)
                        .help("Write each game tree on a single line rather than indenting variations."),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .value_parser(value_parser!(u8))
                        .default_value("2")
                        .help("Number of spaces to indent each level of variation by."),
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
                        .help("The file containing the game record you want to format, or '-' for standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let options = Options {
        duplicates: if matches.get_flag("replace-duplicates") {
            Duplicates::Replace
        } else {
            Duplicates::Reject
        },
    };
    debug!(?options);

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename_from(submatches);
            let collection = load_and_parse(filename, options);

            match output::summary(filename, &collection) {
                Ok(text) => print!("{}", text),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(("format", submatches)) => {
            let filename = filename_from(submatches);
            let collection = load_and_parse(filename, options);

            let layout = if submatches.get_flag("compact") {
                Layout::Compact
            } else {
                let indent = submatches
                    .get_one::<u8>("indent")
                    .copied()
                    .unwrap_or(2);
                Layout::Pretty(indent)
            };

            let result = if submatches.get_flag("raw-control-chars")
                || std::io::stdout().is_terminal()
            {
                formatting::render(&Terminal, &collection, layout)
            } else {
                formatting::render(&Identity, &collection, layout)
            };

            print!("{}", result);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: sgf [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename_from(submatches: &clap::ArgMatches) -> &Path {
    // required(true) means clap has already rejected a missing filename
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or("-");

    Path::new(filename)
}

/// Read and parse the named file, or report why not and exit.
fn load_and_parse(filename: &Path, options: Options) -> Collection {
    info!("Reading file: {}", filename.display());

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!(
                "{}: {}: {}",
                "error".bright_red(),
                error
                    .filename
                    .display(),
                error
                    .problem
                    .bold()
            );
            std::process::exit(1);
        }
    };

    match parsing::parse_with_options(&content, options) {
        Ok(collection) => collection,
        Err(error) => {
            let report = SgfError::new(&error, filename, &content);
            eprintln!("{}", report.full_details());
            std::process::exit(1);
        }
    }
}
