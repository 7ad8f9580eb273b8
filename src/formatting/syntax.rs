//! Renderers for colourizing parser output

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    Neutral, // default
    Newline,
    Label,
    Key,
    Value,
    ListItem,
    Literal,
    Punctuation,
    Error,
    Emphasis,
    Gutter,
}

/// Trait for different rendering backends (the no-op no-markup one, ANSI
/// escapes for terminal colouring)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, content_type: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Newline => "\n".to_string(),
            _ => content.to_string(),
        }
    }
}
