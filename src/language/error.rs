use std::{fmt, path::Path};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// The ways a single line can violate the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyListItem,
    UnclosedInlineList,
    UnrecognizedLineShape,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::EmptyListItem => "empty list item",
            ErrorKind::UnclosedInlineList => "unclosed inline list",
            ErrorKind::UnrecognizedLineShape => "unrecognized line",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A syntax error located at a specific line. Parsing stops at the first
/// one encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub line_number: usize,
    pub line_text: String,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(line_number: usize, line_text: &str, kind: ErrorKind) -> ParseError {
        ParseError {
            line_number,
            line_text: line_text.to_string(),
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "syntax error at line {}: {}: {}",
            self.line_number,
            self.kind,
            self.line_text
                .trim()
        )
    }
}

impl std::error::Error for ParseError {}
