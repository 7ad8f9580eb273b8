#[cfg(test)]
mod syntax {
    use yamli::language::{ErrorKind, ParseError};
    use yamli::parsing::parser::parse_document;

    /// Helper function to check that parsing fails with the expected error
    /// kind at the expected line.
    fn expect_error(lines: &[&str], line_number: usize, expected: ErrorKind) -> ParseError {
        match parse_document(lines) {
            Ok(document) => panic!(
                "Expected parsing to fail, but it succeeded for input {:?} giving {:?}",
                lines, document
            ),
            Err(error) => {
                assert_eq!(
                    error.kind, expected,
                    "Expected error kind {:?} but got {:?} for input {:?}",
                    expected, error.kind, lines
                );
                assert_eq!(
                    error.line_number, line_number,
                    "Expected error on line {} but got {} for input {:?}",
                    line_number, error.line_number, lines
                );
                error
            }
        }
    }

    #[test]
    fn error_locality() {
        let error = expect_error(
            &["name: X", "- item1", "invalid line"],
            3,
            ErrorKind::UnrecognizedLineShape,
        );
        assert_eq!(error.line_text, "invalid line");
    }

    #[test]
    fn unclosed_inline_list() {
        let error = expect_error(
            &["invalid: [unclosed_list"],
            1,
            ErrorKind::UnclosedInlineList,
        );
        assert_eq!(error.line_text, "invalid: [unclosed_list");
    }

    #[test]
    fn empty_list_item() {
        expect_error(&["items:", "  - a", "  -"], 3, ErrorKind::EmptyListItem);
        expect_error(&["- "], 1, ErrorKind::EmptyListItem);
    }

    #[test]
    fn key_with_spaces() {
        expect_error(
            &["name: Example", "version: 1.0", "  extra indent: wrong"],
            3,
            ErrorKind::UnrecognizedLineShape,
        );
    }

    #[test]
    fn key_with_dashes() {
        expect_error(&["my-key: value"], 1, ErrorKind::UnrecognizedLineShape);
    }

    #[test]
    fn list_marker_without_space() {
        expect_error(&["-item"], 1, ErrorKind::UnrecognizedLineShape);
    }

    #[test]
    fn blank_and_comment_lines_are_counted() {
        expect_error(
            &["# header", "", "name: X", "", "oops"],
            5,
            ErrorKind::UnrecognizedLineShape,
        );
    }

    #[test]
    fn lines_inside_literal_block_are_counted() {
        expect_error(
            &["notes: |", "  one", "  two", "", "  three", "[x"],
            6,
            ErrorKind::UnrecognizedLineShape,
        );
    }

    #[test]
    fn first_error_wins() {
        expect_error(
            &["ok: 1", "bad: [", "also bad", "-"],
            2,
            ErrorKind::UnclosedInlineList,
        );
    }

    #[test]
    fn original_text_preserved() {
        let error = parse_document(["    what is this?\r\n"]).unwrap_err();
        assert_eq!(error.line_number, 1);
        assert_eq!(error.line_text, "    what is this?");
        assert_eq!(error.kind, ErrorKind::UnrecognizedLineShape);
    }
}
