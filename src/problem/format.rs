use super::messages::generate_error_message;
use crate::formatting::{Render, Syntax};
use crate::language::{LoadingError, ParseError};
use std::path::Path;

/// Format a syntax error with full details including the offending line
pub fn full_parsing_error(error: &ParseError, filename: &Path, renderer: &dyn Render) -> String {
    let (problem, details) = generate_error_message(error, renderer);

    let code = &error.line_text;
    let line = error.line_number;
    let column = calculate_column_number(code) + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    // padding is applied before styling so escape codes don't count towards
    // the width
    let number = format!("{:>width$}", line);
    let indent = " ".repeat(column - 1);

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{} {} {}
{:width$} {} {}{}

{}
        "#,
        renderer.style(Syntax::Error, "error"),
        filename.to_string_lossy(),
        line,
        column,
        renderer.style(Syntax::Emphasis, &problem),
        ' ',
        renderer.style(Syntax::Gutter, "|"),
        renderer.style(Syntax::Gutter, &number),
        renderer.style(Syntax::Gutter, "|"),
        code,
        ' ',
        renderer.style(Syntax::Gutter, "|"),
        indent,
        renderer.style(Syntax::Error, "^"),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a syntax error with concise single-line output, ending with the
/// text of the offending line.
pub fn concise_parsing_error(error: &ParseError, filename: &Path, renderer: &dyn Render) -> String {
    let (problem, _) = generate_error_message(error, renderer);
    let line = error.line_number;
    let column = calculate_column_number(&error.line_text) + 1;

    format!(
        "{}: {}:{}:{} {}: {}",
        renderer.style(Syntax::Error, "error"),
        filename.to_string_lossy(),
        line,
        column,
        renderer.style(Syntax::Emphasis, &problem),
        error
            .line_text
            .trim(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>, renderer: &dyn Render) -> String {
    let problem = renderer.style(Syntax::Emphasis, &error.problem);

    if error
        .details
        .is_empty()
    {
        format!(
            "{}: {}: {}",
            renderer.style(Syntax::Error, "error"),
            error
                .filename
                .display(),
            problem
        )
    } else {
        format!(
            "{}: {}: {} ({})",
            renderer.style(Syntax::Error, "error"),
            error
                .filename
                .display(),
            problem,
            error.details
        )
    }
}

// Zero-origin column of the first non-whitespace character, which is where
// the caret goes since every error concerns the line as a whole.
fn calculate_column_number(code: &str) -> usize {
    code.chars()
        .take_while(|c| c.is_whitespace())
        .count()
}
