//! Types representing the parsed form of a document

use serde::Serialize;

/// One physical line of input along with its 1-based position in the
/// source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'i> {
    pub number: usize,
    pub text: &'i str,
}

impl<'i> Line<'i> {
    pub fn new(number: usize, text: &'i str) -> Line<'i> {
        Line {
            number,
            text: strip_terminator(text),
        }
    }

    /// The count of leading whitespace characters.
    pub fn indent(&self) -> usize {
        measure_indent(self.text)
    }

    pub fn is_blank(&self) -> bool {
        self.text
            .trim()
            .is_empty()
    }
}

/// Remove a trailing "\n" or "\r\n" (or a lone "\r"), leaving everything
/// else about the line untouched.
pub fn strip_terminator(text: &str) -> &str {
    let text = text
        .strip_suffix('\n')
        .unwrap_or(text);
    text.strip_suffix('\r')
        .unwrap_or(text)
}

pub fn measure_indent(text: &str) -> usize {
    text.chars()
        .take_while(|c| c.is_whitespace())
        .count()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    KeyValue { key: String, value: String },
    ListItem { value: String },
    LiteralBlock { key: String, text: String },
}

/// The ordered result of parsing; element order is source line order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Document {
        Document { elements }
    }

    pub fn len(&self) -> usize {
        self.elements
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements
            .is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements
            .iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
