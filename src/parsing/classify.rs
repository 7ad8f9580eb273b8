//! Classification of a single physical line into one of the recognized
//! shapes. This is a pure function of its input; anything that spans more
//! than one line (literal blocks) is the business of the document parser.

use crate::language::ErrorKind;
use crate::regex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineShape {
    KeyValue { key: String, value: String },
    ListItem { value: String },
    /// `key: |`, which opens a literal block on the following lines.
    LiteralBlockStart { key: String },
}

/// Classify one line. Blank lines and comments give `Ok(None)`.
pub fn classify(line: &str) -> Result<Option<LineShape>, ErrorKind> {
    // leading whitespace is irrelevant to the shape of a line; indentation
    // is measured by the caller.
    let content = line.trim();

    if content.is_empty() || is_comment(content) {
        return Ok(None);
    }

    if is_list_item(content) {
        return read_list_item(content).map(Some);
    }

    if let Some(key) = read_literal_introducer(content) {
        return Ok(Some(LineShape::LiteralBlockStart {
            key: key.to_string(),
        }));
    }

    read_key_value(content).map(Some)
}

fn is_comment(content: &str) -> bool {
    content.starts_with('#')
}

fn is_list_item(content: &str) -> bool {
    // after trimming, a marker with nothing following it is a bare "-"
    content == "-" || content.starts_with("- ")
}

fn read_list_item(content: &str) -> Result<LineShape, ErrorKind> {
    let value = content
        .strip_prefix("- ")
        .unwrap_or("");

    if value.is_empty() {
        return Err(ErrorKind::EmptyListItem);
    }

    Ok(LineShape::ListItem {
        value: value.to_string(),
    })
}

fn read_literal_introducer(content: &str) -> Option<&str> {
    let re = regex!(r"^([A-Za-z0-9_]+): \|$");
    let cap = re.captures(content)?;

    cap.get(1)
        .map(|key| key.as_str())
}

fn read_key_value(content: &str) -> Result<LineShape, ErrorKind> {
    let re = regex!(r"^([A-Za-z0-9_]+):\s*(.*)$");
    let cap = re
        .captures(content)
        .ok_or(ErrorKind::UnrecognizedLineShape)?;

    let key = cap
        .get(1)
        .map(|m| m.as_str())
        .ok_or(ErrorKind::UnrecognizedLineShape)?;
    let value = cap
        .get(2)
        .map(|m| m.as_str())
        .unwrap_or("");

    // inline lists must be closed on the same line; there is no support for
    // flow collections spanning lines.
    if value.starts_with('[') && !value.ends_with(']') {
        return Err(ErrorKind::UnclosedInlineList);
    }

    Ok(LineShape::KeyValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
