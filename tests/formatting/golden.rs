#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use sgf::formatting::*;
    use sgf::parsing;

    /// Golden test for the format command
    ///
    /// Every .sgf file in tests/golden/ is expected to already be in its
    /// canonical pretty-printed form. Formatting it must therefore
    /// reproduce the file exactly. If a file fails this test either the
    /// parser or formatter is wrong, or the file was written by hand and
    /// needs reformatting.

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("sgf")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .sgf files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let original = parsing::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let collection = parsing::parse(&original)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", file, e));

            // Same as `sgf format` with its default indent of 2
            let result = render(&Identity, &collection, Layout::Pretty(2));

            if result != original {
                show_diff(&original, &result, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "All golden files must format unchanged, but {} differed",
                failures.len()
            );
        }
    }
}
