//! Renderers for colourizing parser output

use crate::formatting::*;
use owo_colors::OwoColorize;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Label => content
                .bright_white()
                .bold()
                .to_string(),
            Syntax::Key => content // entity.name.tag.yaml - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Value => content // string.unquoted.yaml - #4e9a06 (green)
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .to_string(),
            Syntax::ListItem => content // markup.list - #8f5902 (brown)
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .to_string(),
            Syntax::Literal => content // string.unquoted.block.yaml - #75507b (purple)
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .to_string(),
            Syntax::Punctuation => content // punctuation.separator - #999999
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Error => content
                .bright_red()
                .to_string(),
            Syntax::Emphasis => content
                .bold()
                .to_string(),
            Syntax::Gutter => content
                .bright_blue()
                .to_string(),
        }
    }
}
