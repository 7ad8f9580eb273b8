//! Per-element listing of a parsed document.

use std::borrow::Cow;

use tracing::debug;

use crate::formatting::{Render, Syntax};
use crate::language::*;

/// Describe each element of the document, one entry per element, in
/// document order. This is a diagnostic pass only; the document is
/// neither modified nor judged.
///
/// This happens in two passes: first the document is converted to a Vec of
/// (Syntax, text) fragments, then the renderer is applied to each fragment.
pub fn validate_document(document: &Document, renderer: &dyn Render) -> String {
    let fragments = report_to_fragments(document);

    let mut output = String::new();
    for (syntax, content) in fragments {
        output.push_str(&renderer.style(syntax, &content));
    }
    output
}

fn report_to_fragments(document: &Document) -> Vec<(Syntax, Cow<'_, str>)> {
    let mut report = Report::new();

    for element in document {
        match element {
            Element::KeyValue { key, value } => {
                debug!(key = %key, value = %value, "key/value pair");
                report.append_key_value(key, value);
            }
            Element::ListItem { value } => {
                debug!(value = %value, "list item");
                report.append_list_item(value);
            }
            Element::LiteralBlock { key, text } => {
                debug!(key = %key, lines = text.lines().count(), "literal block");
                report.append_literal_block(key, text);
            }
        }
    }

    report.fragments
}

struct Report<'i> {
    fragments: Vec<(Syntax, Cow<'i, str>)>,
}

impl<'i> Report<'i> {
    fn new() -> Report<'i> {
        Report {
            fragments: Vec::new(),
        }
    }

    fn add(&mut self, syntax: Syntax, content: impl Into<Cow<'i, str>>) {
        self.fragments
            .push((syntax, content.into()));
    }

    fn newline(&mut self) {
        self.add(Syntax::Newline, "\n");
    }

    fn append_key_value(&mut self, key: &'i str, value: &'i str) {
        self.add(Syntax::Label, "Key");
        self.add(Syntax::Punctuation, ": ");
        self.add(Syntax::Key, key);
        self.add(Syntax::Punctuation, ", ");
        self.add(Syntax::Label, "Value");
        self.add(Syntax::Punctuation, ": ");
        self.add(Syntax::Value, value);
        self.newline();
    }

    fn append_list_item(&mut self, value: &'i str) {
        self.add(Syntax::Label, "List item");
        self.add(Syntax::Punctuation, ": ");
        self.add(Syntax::ListItem, value);
        self.newline();
    }

    fn append_literal_block(&mut self, key: &'i str, text: &'i str) {
        self.add(Syntax::Label, "Literal block");
        self.add(Syntax::Neutral, " ");
        self.add(Syntax::Punctuation, "(");
        self.add(Syntax::Key, key);
        self.add(Syntax::Punctuation, "):");
        self.newline();

        for line in text.lines() {
            self.add(Syntax::Literal, line);
            self.newline();
        }
        // blank line to separate the body from whatever follows
        self.newline();
    }
}
