#[cfg(test)]
mod syntax {
    use sgf::parsing::{self, Duplicates, Options, ParsingError};

    /// Assert that the input fails to parse with the expected error variant
    /// at the expected character offset.
    fn expect_error(content: &str, expected: ParsingError) {
        let result = parsing::parse(content);
        match result {
            Ok(_) => panic!(
                "Expected parsing to fail, but it succeeded for input: {}",
                content
            ),
            Err(error) => {
                assert_eq!(
                    std::mem::discriminant(&error),
                    std::mem::discriminant(&expected),
                    "Wrong kind of error for input {:?}: {}",
                    content,
                    error
                );
                assert_eq!(
                    error.offset(),
                    expected.offset(),
                    "Wrong offset for input {:?}: {}",
                    content,
                    error
                );
            }
        }
    }

    fn at(offset: usize) -> parsing::Position {
        parsing::Position {
            offset,
            line: 1,
            column: offset + 1,
        }
    }

    #[test]
    fn empty_input() {
        expect_error("", ParsingError::UnexpectedToken(at(0), "collection"));
        expect_error("  \n", ParsingError::UnexpectedToken(at(3), "collection"));
    }

    #[test]
    fn text_before_first_tree() {
        expect_error("x(;)", ParsingError::UnexpectedToken(at(0), "collection"));
    }

    #[test]
    fn missing_sequence() {
        expect_error("()", ParsingError::UnexpectedToken(at(1), "sequence"));
        expect_error("(;B[dd]())", ParsingError::UnexpectedToken(at(8), "sequence"));
    }

    #[test]
    fn unterminated_game_tree() {
        expect_error(
            "(;B[dd]",
            ParsingError::UnterminatedConstruct(at(7), "game tree"),
        );
        expect_error(
            "(;B[dd](;W[pp])",
            ParsingError::UnterminatedConstruct(at(15), "game tree"),
        );
    }

    #[test]
    fn unterminated_value() {
        expect_error(
            "(;C[a comment",
            ParsingError::UnterminatedConstruct(at(4), "property value"),
        );
        expect_error(
            "(;C[a \\] comment",
            ParsingError::UnterminatedConstruct(at(8), "property value"),
        );
    }

    #[test]
    fn input_ends_after_opening_token() {
        expect_error("(", ParsingError::UnterminatedConstruct(at(1), "game tree"));
        expect_error(
            "(;B[dd](",
            ParsingError::UnterminatedConstruct(at(8), "game tree"),
        );
        expect_error("(;B", ParsingError::UnterminatedConstruct(at(3), "property"));
        expect_error(
            "(;B[dd]  B",
            ParsingError::UnterminatedConstruct(at(10), "property"),
        );

        // a wrong character rather than the end of input
        expect_error("(;B;", ParsingError::UnexpectedToken(at(3), "property value"));
    }

    #[test]
    fn form_feed_is_not_whitespace() {
        expect_error("(;)\x0c", ParsingError::ExtraData(at(3)));
        expect_error("\x0c(;)", ParsingError::UnexpectedToken(at(0), "collection"));
    }

    #[test]
    fn extra_data() {
        expect_error("(;B[dd]))", ParsingError::ExtraData(at(8)));
        expect_error("(;B[dd]) x", ParsingError::ExtraData(at(9)));
    }

    #[test]
    fn missing_value() {
        expect_error(
            "(;B;W[dd])",
            ParsingError::UnexpectedToken(at(3), "property value"),
        );
    }

    #[test]
    fn stray_characters_in_tree() {
        expect_error(
            "(;B[dd]1)",
            ParsingError::UnexpectedToken(at(7), "')' to close game tree"),
        );
        expect_error(
            "(;B[dd][pp)",
            ParsingError::UnterminatedConstruct(at(8), "property value"),
        );
    }

    #[test]
    fn duplicate_properties() {
        expect_error(
            "(;B[dd]C[x]B[pp])",
            ParsingError::DuplicateProperty(at(11), "B".to_string()),
        );

        let options = Options {
            duplicates: Duplicates::Replace,
        };
        let collection = parsing::parse_with_options("(;B[dd]C[x]B[pp])", options).unwrap();
        assert_eq!(collection.to_string(), "(;B[pp]C[x])");
    }

    #[test]
    fn positions_on_later_lines() {
        let error = parsing::parse("(;B[dd]\n;W[pp]\n").unwrap_err();

        assert_eq!(error.offset(), 15);
        assert_eq!(error.line(), 3);
        assert_eq!(error.column(), 1);
        assert_eq!(
            error.to_string(),
            "Unterminated game tree: line 3 column 1 (char 15)"
        );
    }

    #[test]
    fn messages() {
        let error = parsing::parse("()").unwrap_err();
        assert_eq!(error.message(), "expected sequence");
        assert_eq!(error.to_string(), "Expected sequence: line 1 column 2 (char 1)");

        let error = parsing::parse("(;B[dd]))").unwrap_err();
        assert_eq!(error.to_string(), "Extra data: line 1 column 9 (char 8)");
    }
}
