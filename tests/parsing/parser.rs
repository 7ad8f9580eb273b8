#[cfg(test)]
mod verify {
    use yamli::language::*;
    use yamli::parsing::parser::{parse_document, parse_line, parse_str, DocumentParser};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn key_value(key: &str, value: &str) -> Element {
        Element::KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn list_item(value: &str) -> Element {
        Element::ListItem {
            value: value.to_string(),
        }
    }

    fn literal(key: &str, text: &str) -> Element {
        Element::LiteralBlock {
            key: key.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn parse_key_value() {
        let result = parse_line("name: ExampleProject");
        assert_eq!(result, Ok(Some(key_value("name", "ExampleProject"))));
    }

    #[test]
    fn parse_list_item() {
        let result = parse_line("- item1");
        assert_eq!(result, Ok(Some(list_item("item1"))));
    }

    #[test]
    fn only_blank_and_comments() {
        let inputs: Vec<Vec<&str>> = vec![
            vec![],
            vec![""],
            vec!["", "   ", "\t"],
            vec!["# one", "", "   # two", "#"],
            vec!["\n", "# comment\n", "\r\n"],
        ];

        for lines in inputs {
            let document = parse_document(&lines).unwrap();
            assert!(document.is_empty(), "expected empty for {:?}", lines);
        }
    }

    #[test]
    fn values_after_first_colon() {
        let cases = [
            ("key: value", "key", "value"),
            ("key: two  spaces  inside", "key", "two  spaces  inside"),
            ("time: 12:30:45", "time", "12:30:45"),
            ("key:    padded", "key", "padded"),
            ("key: value   ", "key", "value"),
            ("k_2: 'quoted: string'", "k_2", "'quoted: string'"),
        ];

        for (line, key, value) in cases {
            assert_eq!(
                parse_line(line),
                Ok(Some(key_value(key, value))),
                "for line {:?}",
                line
            );
        }
    }

    #[test]
    fn nesting_is_flat() {
        let document = parse_document(["database:", "  type: postgres"]).unwrap();
        assert_eq!(
            document,
            Document::new(vec![
                key_value("database", ""),
                key_value("type", "postgres")
            ])
        );
    }

    #[test]
    fn literal_block_closed_by_dedent() {
        let document = parse_str(trim(
            r#"
name: Example
description: |
  First line
  second line
version: 1.0
            "#,
        ))
        .unwrap();

        assert_eq!(
            document,
            Document::new(vec![
                key_value("name", "Example"),
                literal("description", "First line\nsecond line"),
                key_value("version", "1.0"),
            ])
        );
    }

    #[test]
    fn literal_block_closed_by_end_of_input() {
        let document = parse_document(["notes: |", "  rest of", "  the file", "", ""]).unwrap();

        assert_eq!(
            document,
            Document::new(vec![literal("notes", "rest of\nthe file")])
        );
    }

    #[test]
    fn literal_block_indentation_flattened() {
        let document = parse_document([
            "code: |",
            "  if x:",
            "      return y",
            "  done",
        ])
        .unwrap();

        assert_eq!(
            document,
            Document::new(vec![literal("code", "if x:\nreturn y\ndone")])
        );
    }

    #[test]
    fn nested_literal_block() {
        // the block ends at the first line no deeper than its introducer
        let document = parse_document([
            "server:",
            "  motd: |",
            "    Welcome",
            "  port: 8080",
            "- after",
        ])
        .unwrap();

        assert_eq!(
            document,
            Document::new(vec![
                key_value("server", ""),
                literal("motd", "Welcome"),
                key_value("port", "8080"),
                list_item("after"),
            ])
        );
    }

    #[test]
    fn mixed_document() {
        let document = parse_str(trim(
            r#"
# project settings
name: ExampleProject
authors:
  - Alice
  - Bob

notes: |
  Line one.

  Line three.
tags: [a, b]
            "#,
        ))
        .unwrap();

        assert_eq!(
            document,
            Document::new(vec![
                key_value("name", "ExampleProject"),
                key_value("authors", ""),
                list_item("Alice"),
                list_item("Bob"),
                literal("notes", "Line one.\n\nLine three."),
                key_value("tags", "[a, b]"),
            ])
        );
    }

    #[test]
    fn reparse_is_idempotent() {
        let lines = [
            "name: X\n",
            "items:\n",
            "  - one\n",
            "text: |\n",
            "  body\n",
            "\n",
            "  more\n",
            "end: true\n",
        ];

        let first = parse_document(lines).unwrap();
        let second = parse_str(&lines.concat()).unwrap();
        assert_eq!(first, second);

        let third = parse_str(&lines.concat()).unwrap();
        assert_eq!(second, third);
    }

    #[test]
    fn incremental_matches_batch() {
        let lines = ["a: 1", "b: |", "  x", "  y", "- z"];

        let mut parser = DocumentParser::new();
        for line in lines {
            parser
                .feed(line)
                .unwrap();
        }
        assert_eq!(parser.lines_seen(), 5);

        assert_eq!(parser.finish(), parse_document(lines).unwrap());
    }

    #[test]
    fn owned_lines_accepted() {
        let lines: Vec<String> = vec!["a: 1".to_string(), "- b".to_string()];
        let document = parse_document(lines).unwrap();
        assert_eq!(
            document,
            Document::new(vec![key_value("a", "1"), list_item("b")])
        );
    }
}
