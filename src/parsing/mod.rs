//! parser for the restricted YAML grammar

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Document, Element, LoadingError, ParseError};

pub mod classify;
pub mod parser;

pub use classify::{classify, LineShape};
pub use parser::{parse_document, parse_line, parse_str, DocumentParser};

/// Read a file and return an owned String. A filename of "-" reads from
/// standard input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map(|_| buffer)
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

/// Parse text into a Document, or return the first syntax error
/// encountered.
pub fn parse(filename: &Path, content: &str) -> Result<Document, ParseError> {
    debug!("Parsing {}", filename.display());

    match parser::parse_str(content) {
        Ok(document) => {
            let mut pairs = 0;
            let mut items = 0;
            let mut blocks = 0;

            for element in &document {
                match element {
                    Element::KeyValue { .. } => pairs += 1,
                    Element::ListItem { .. } => items += 1,
                    Element::LiteralBlock { .. } => blocks += 1,
                }
            }

            debug!(
                "Found {} key/value pair{}, {} list item{}, {} literal block{}",
                pairs,
                if pairs == 1 { "" } else { "s" },
                items,
                if items == 1 { "" } else { "s" },
                blocks,
                if blocks == 1 { "" } else { "s" }
            );
            Ok(document)
        }
        Err(error) => {
            debug!(line = error.line_number, kind = ?error.kind, "parse failed");
            Err(error)
        }
    }
}
