#[cfg(test)]
mod verify {
    use sgf::formatting::formatter::*;
    use sgf::formatting::*;
    use sgf::language::*;
    use sgf::parsing;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn compact_collection() {
        let collection = parsing::parse(
            r#"
(;GM[1] FF[4]
  ;B[dd] (;W[pd]) (;W[dp]) )
            "#,
        )
        .unwrap();

        assert_eq!(
            render_collection(&collection, &Identity),
            "(;FF[4]GM[1];B[dd](;W[pd])(;W[dp]))"
        );
        assert_eq!(collection.to_string(), "(;FF[4]GM[1];B[dd](;W[pd])(;W[dp]))");
    }

    #[test]
    fn pretty_tree() {
        let collection = parsing::parse("(;B[dd](;W[pd])(;W[dp]))").unwrap();
        let tree = collection
            .get(0)
            .unwrap();

        assert_eq!(
            tree.pretty(2),
            trim(
                r#"
(
  ;B[dd]
  (
    ;W[pd]
  )
  (
    ;W[dp]
  )
)"#
            )
        );
        assert_eq!(render_tree_pretty(tree, 2, &Identity), tree.pretty(2));
    }

    #[test]
    fn pretty_indent_width() {
        let collection = parsing::parse("(;B[dd];W[pp](;B[dp]))").unwrap();

        assert_eq!(
            collection.pretty(4),
            trim(
                r#"
(
    ;B[dd];W[pp]
    (
        ;B[dp]
    )
)"#
            )
        );
    }

    #[test]
    fn pretty_collection_separates_trees() {
        let collection = parsing::parse("(;B[dd])(;W[pp])").unwrap();

        assert_eq!(
            render_collection_pretty(&collection, 2, &Identity),
            "(\n  ;B[dd]\n)\n\n(\n  ;W[pp]\n)"
        );
    }

    #[test]
    fn values_are_escaped() {
        let mut node = Node::default();
        node.set("C", ["a ] b \\ c"])
            .unwrap();

        assert_eq!(render_node(&node, &Identity), ";C[a \\] b \\\\ c]");

        let tree = GameTree::from_nodes(vec![node], vec![]).unwrap();
        let again = parsing::parse(&tree.to_string()).unwrap();
        assert_eq!(again.get(0), Some(&tree));
    }

    #[test]
    fn sequences_render_in_order() {
        let collection = parsing::parse("(;W[pp];B[dd];W[aa])").unwrap();
        let sequence = collection
            .get(0)
            .unwrap()
            .sequence();

        assert_eq!(render_sequence(sequence, &Identity), ";W[pp];B[dd];W[aa]");
    }

    #[test]
    fn values_render_sorted() {
        let value = PropertyValue::new(["pp", "dd", "aa"]).unwrap();
        assert_eq!(render_value(&value, &Identity), "[aa][dd][pp]");
        assert_eq!(value.to_string(), "[aa][dd][pp]");
    }

    #[test]
    fn terminal_output_contains_text() {
        let collection = parsing::parse("(;B[dd])").unwrap();
        let result = render(&Terminal, &collection, Layout::Compact);

        assert!(result.contains("dd"));
        assert!(result.contains('\u{1b}'));
        assert!(result.ends_with('\n'));
    }
}
