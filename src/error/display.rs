use std::{fmt, path::Path};

use owo_colors::OwoColorize;

use crate::parsing::ParsingError;

/// A parsing failure bundled with the document it occurred in, so that it
/// can be shown to a person alongside the offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgfError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
    pub source: &'i str,
    pub offset: usize,
}

impl<'i> SgfError<'i> {
    pub fn new(error: &ParsingError, filename: &'i Path, source: &'i str) -> SgfError<'i> {
        SgfError {
            problem: error.message(),
            details: error.details(),
            filename,
            source,
            offset: error.offset(),
        }
    }

    // Verbose detailed explanation
    pub fn full_details(&self) -> String {
        let i = calculate_line_number(self.source, self.offset);
        let j = calculate_column_number(self.source, self.offset);

        let code = self
            .source
            .lines()
            .nth(i)
            .unwrap_or("");

        let line = i + 1;
        let column = j + 1;

        let width = line
            .to_string()
            .len();
        let width = 3.max(width);

        format!(
            r#"
{}: {}
{}:{}:{}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
            "#,
            "error".bright_red(),
            self.problem
                .bold(),
            self.filename
                .to_string_lossy(),
            line,
            column,
            ' ',
            '|'.bright_blue(),
            line.bright_blue(),
            '|'.bright_blue(),
            code,
            ' ',
            '|'.bright_blue(),
            '^'.bright_red(),
            self.details
        )
        .trim_ascii()
        .to_string()
    }
}

// Concise version for internal use
impl<'i> fmt::Display for SgfError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = calculate_line_number(self.source, self.offset);
        let j = calculate_column_number(self.source, self.offset);

        let line = i + 1;
        let column = j + 1;

        write!(
            f,
            "error: {}:{}:{} {}",
            self.filename
                .to_string_lossy(),
            line,
            column,
            self.problem
        )
    }
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
pub(crate) fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number in characters, also zero-origin for
// consistency.
pub(crate) fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => before[start + 1..]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
