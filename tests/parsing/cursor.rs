#[cfg(test)]
mod verify {
    use sgf::language::*;
    use sgf::parsing;

    const GAME: &str = r#"
(;GM[1]FF[4]SZ[19]PB[Black]PW[White]C[Opening position]
 ;B[pd];W[dp]
 (;B[pp];W[dd];B[pj]C[Main line])
 (;B[dd];W[pp]
  (;B[jj])
  (;B[cc];W[dc]))
 (;B[qq]))
"#;

    fn moves(node: &Node) -> String {
        node.get("B")
            .or_else(|_| node.get("W"))
            .map(|value| {
                value
                    .first()
                    .to_string()
            })
            .unwrap_or_default()
    }

    #[test]
    fn walking_the_main_line() {
        let collection = parsing::parse(GAME).unwrap();
        let tree = collection
            .get(0)
            .unwrap();
        let mut cursor = Cursor::new(tree);

        assert_eq!(
            cursor
                .node()
                .get("C")
                .unwrap()
                .first(),
            "Opening position"
        );

        let mut seen = Vec::new();
        while let Ok(node) = cursor.next(0) {
            seen.push(moves(node));
        }

        assert_eq!(seen, vec!["pd", "dp", "pp", "dd", "pj"]);
        assert_eq!(cursor.branches(), 0);
        assert_eq!(cursor.next(0), Err(NavigationError::EndOfTree));
    }

    #[test]
    fn choosing_variations() {
        let collection = parsing::parse(GAME).unwrap();
        let tree = collection
            .get(0)
            .unwrap();
        let mut cursor = Cursor::new(tree);

        cursor
            .next(0)
            .unwrap();
        cursor
            .next(0)
            .unwrap();
        assert_eq!(cursor.branches(), 3);

        assert_eq!(
            cursor.next(3),
            Err(NavigationError::InvalidVariation(3))
        );

        let node = cursor
            .next(1)
            .unwrap();
        assert_eq!(moves(node), "dd");
        assert_eq!(cursor.depth(), 1);

        cursor
            .next(0)
            .unwrap();
        assert_eq!(cursor.branches(), 2);

        let node = cursor
            .next(1)
            .unwrap();
        assert_eq!(moves(node), "cc");
        assert_eq!(cursor.depth(), 2);

        // back out to the branch point, then up to the root
        cursor
            .previous()
            .unwrap();
        assert_eq!(moves(cursor.node()), "pp");
        assert_eq!(cursor.depth(), 1);

        while cursor
            .previous()
            .is_ok()
        {}
        assert_eq!(cursor.depth(), 0);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.previous(), Err(NavigationError::StartOfTree));
    }

    #[test]
    fn reset_returns_to_root() {
        let collection = parsing::parse(GAME).unwrap();
        let tree = collection
            .get(0)
            .unwrap();
        let mut cursor = Cursor::new(tree);

        cursor
            .next(0)
            .unwrap();
        cursor
            .next(0)
            .unwrap();
        cursor
            .next(2)
            .unwrap();
        assert_eq!(moves(cursor.node()), "qq");

        cursor.reset();
        assert_eq!(cursor.depth(), 0);
        assert!(std::ptr::eq(cursor.tree(), cursor.root()));
        assert!(cursor
            .node()
            .contains("GM"));
    }
}
