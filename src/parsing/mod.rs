//! parser for SGF game records

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Collection, LoadingError};

pub mod parser;

pub use parser::{Duplicates, Options, Parser, ParsingError, Position};

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so the source text outlives any error report that borrows it. A
/// filename of "-" reads standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Collection, or return the located error that stopped
/// the parse.
pub fn parse(content: &str) -> Result<Collection, ParsingError> {
    parse_with_options(content, Options::default())
}

pub fn parse_with_options(content: &str, options: Options) -> Result<Collection, ParsingError> {
    let result = parser::parse_collection(content, options);

    match result {
        Ok(collection) => {
            debug!(
                "Found {} game tree{}",
                collection.len(),
                if collection.len() == 1 { "" } else { "s" }
            );
            Ok(collection)
        }
        Err(error) => {
            debug!(%error);
            Err(error)
        }
    }
}
