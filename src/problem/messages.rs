use crate::formatting::{Render, Syntax};
use crate::language::{ErrorKind, ParseError};

/// Generate problem and detail messages for a syntax error.
pub fn generate_error_message(error: &ParseError, renderer: &dyn Render) -> (String, String) {
    match error.kind {
        ErrorKind::EmptyListItem => (
            "Empty list item".to_string(),
            format!(
                r#"
A list marker must be followed by the value of the item, for example:

    {} {}

Remove the marker or give the item some content.
                "#,
                renderer.style(Syntax::Punctuation, "-"),
                renderer.style(Syntax::ListItem, "Alice"),
            )
            .trim_ascii()
            .to_string(),
        ),
        ErrorKind::UnclosedInlineList => (
            "Unclosed inline list".to_string(),
            format!(
                r#"
A value starting with '[' is an inline list and must be closed with ']' on
the same line:

    {}{} {}

Inline lists cannot continue onto following lines. Write the members as list
items instead, one per line, each starting with {}.
                "#,
                renderer.style(Syntax::Key, "tags"),
                renderer.style(Syntax::Punctuation, ":"),
                renderer.style(Syntax::Value, "[alpha, beta]"),
                renderer.style(Syntax::Punctuation, "\"- \""),
            )
            .trim_ascii()
            .to_string(),
        ),
        ErrorKind::UnrecognizedLineShape => (
            "Unrecognized line".to_string(),
            format!(
                r#"
Each line must be blank, a comment starting with '#', a list item starting
with "- ", or a key followed by a colon and its value:

    {}{} {}

Keys may contain only letters, digits, and underscores. A key whose value is
{} begins a literal block made of the lines indented beneath it.
                "#,
                renderer.style(Syntax::Key, "name"),
                renderer.style(Syntax::Punctuation, ":"),
                renderer.style(Syntax::Value, "ExampleProject"),
                renderer.style(Syntax::Punctuation, "|"),
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}
