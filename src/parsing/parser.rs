use tracing::debug;

use crate::language::*;
use crate::parsing::classify::{classify, LineShape};

/// Parse a single line outside of any document context. A literal block
/// introducer is only meaningful across lines, so here it is reported as
/// the ordinary key/value pair it looks like.
pub fn parse_line(line: &str) -> Result<Option<Element>, ErrorKind> {
    let shape = classify(line)?;

    Ok(shape.map(|shape| match shape {
        LineShape::KeyValue { key, value } => Element::KeyValue { key, value },
        LineShape::ListItem { value } => Element::ListItem { value },
        LineShape::LiteralBlockStart { key } => Element::KeyValue {
            key,
            value: "|".to_string(),
        },
    }))
}

/// Parse a sequence of lines into a Document. Lines may or may not still
/// carry their terminators. The first syntax error aborts the parse.
pub fn parse_document<I, S>(lines: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = DocumentParser::new();

    for line in lines {
        parser.feed(line.as_ref())?;
    }

    Ok(parser.finish())
}

/// Parse text, splitting it into lines first.
pub fn parse_str(content: &str) -> Result<Document, ParseError> {
    parse_document(content.lines())
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    InLiteralBlock {
        key: String,
        opening_indent: usize,
        collected_lines: Vec<String>,
    },
}

/// Drives line classification across a whole document, accumulating
/// literal block bodies as it goes. Lines are pushed in one at a time with
/// feed(), so input can arrive incrementally; finish() flushes any block
/// still open at end of input. After feed() returns an error the parser
/// must be discarded.
#[derive(Debug)]
pub struct DocumentParser {
    state: State,
    elements: Vec<Element>,
    count: usize,
}

impl Default for DocumentParser {
    fn default() -> Self {
        DocumentParser::new()
    }
}

impl DocumentParser {
    pub fn new() -> DocumentParser {
        DocumentParser {
            state: State::Scanning,
            elements: Vec::new(),
            count: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_seen(&self) -> usize {
        self.count
    }

    pub fn in_literal_block(&self) -> bool {
        matches!(self.state, State::InLiteralBlock { .. })
    }

    pub fn feed(&mut self, text: &str) -> Result<(), ParseError> {
        self.count += 1;
        let line = Line::new(self.count, text);
        self.process(line)
    }

    pub fn finish(mut self) -> Document {
        if let State::InLiteralBlock {
            key,
            collected_lines,
            ..
        } = std::mem::replace(&mut self.state, State::Scanning)
        {
            debug!(key = %key, "literal block closed by end of input");
            self.close_block(key, collected_lines);
        }

        Document::new(self.elements)
    }

    fn process(&mut self, line: Line) -> Result<(), ParseError> {
        match std::mem::replace(&mut self.state, State::Scanning) {
            State::Scanning => self.scan(line),
            State::InLiteralBlock {
                key,
                opening_indent,
                mut collected_lines,
            } => {
                if line.is_blank() || line.indent() > opening_indent {
                    collected_lines.push(
                        line.text
                            .trim()
                            .to_string(),
                    );
                    self.state = State::InLiteralBlock {
                        key,
                        opening_indent,
                        collected_lines,
                    };
                    Ok(())
                } else {
                    // this line belongs to whatever comes next, not the block
                    self.close_block(key, collected_lines);
                    self.scan(line)
                }
            }
        }
    }

    fn scan(&mut self, line: Line) -> Result<(), ParseError> {
        let shape = classify(line.text)
            .map_err(|kind| ParseError::new(line.number, line.text, kind))?;

        match shape {
            Some(LineShape::LiteralBlockStart { key }) => {
                debug!(key = %key, line = line.number, "literal block opened");
                self.state = State::InLiteralBlock {
                    key,
                    opening_indent: line.indent(),
                    collected_lines: Vec::new(),
                };
            }
            Some(LineShape::KeyValue { key, value }) => {
                self.elements
                    .push(Element::KeyValue { key, value });
            }
            Some(LineShape::ListItem { value }) => {
                self.elements
                    .push(Element::ListItem { value });
            }
            None => {}
        }

        Ok(())
    }

    fn close_block(&mut self, key: String, mut collected_lines: Vec<String>) {
        while collected_lines
            .last()
            .is_some_and(|line| line.is_empty())
        {
            collected_lines.pop();
        }

        self.elements
            .push(Element::LiteralBlock {
                key,
                text: collected_lines.join("\n"),
            });
    }
}
