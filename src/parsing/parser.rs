use std::fmt;

use thiserror::Error;

use crate::error::{calculate_column_number, calculate_line_number};
use crate::language::*;

/// What to do when a node in the input repeats a property label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Duplicates {
    /// Fail with ParsingError::DuplicateProperty.
    #[default]
    Reject,
    /// Keep the last occurrence.
    Replace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub duplicates: Duplicates,
}

/// Where in the input a problem was found. Line and column are 1-origin;
/// the column counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} column {} (char {})",
            self.line, self.column, self.offset
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    #[error("Expected {1}: {0}")]
    UnexpectedToken(Position, &'static str),
    #[error("Unterminated {1}: {0}")]
    UnterminatedConstruct(Position, &'static str),
    #[error("Extra data: {0}")]
    ExtraData(Position),
    #[error("Duplicate property {1}: {0}")]
    DuplicateProperty(Position, String),
}

impl ParsingError {
    pub fn position(&self) -> Position {
        match self {
            ParsingError::UnexpectedToken(position, _) => *position,
            ParsingError::UnterminatedConstruct(position, _) => *position,
            ParsingError::ExtraData(position) => *position,
            ParsingError::DuplicateProperty(position, _) => *position,
        }
    }

    pub fn offset(&self) -> usize {
        self.position()
            .offset
    }

    pub fn line(&self) -> usize {
        self.position()
            .line
    }

    pub fn column(&self) -> usize {
        self.position()
            .column
    }

    /// Short description of the problem, without location.
    pub fn message(&self) -> String {
        match self {
            ParsingError::UnexpectedToken(_, expected) => format!("expected {}", expected),
            ParsingError::UnterminatedConstruct(_, construct) => {
                format!("unterminated {}", construct)
            }
            ParsingError::ExtraData(_) => "extra data after last game tree".to_string(),
            ParsingError::DuplicateProperty(_, label) => {
                format!("duplicate property '{}'", label)
            }
        }
    }

    /// A longer explanation, suitable for showing beneath the offending
    /// source line.
    pub fn details(&self) -> String {
        match self {
            ParsingError::UnexpectedToken(_, expected) => format!(
                "The parser was looking for {} but found something else.",
                expected
            ),
            ParsingError::UnterminatedConstruct(_, construct) => format!(
                "The {} was opened but the input ended before it was closed.",
                construct
            ),
            ParsingError::ExtraData(_) => {
                "Only whitespace may follow the closing ')' of the last game tree.".to_string()
            }
            ParsingError::DuplicateProperty(_, label) => format!(
                "A node may hold each property only once, but '{}' appears again here.",
                label
            ),
        }
    }
}

pub fn parse_collection(content: &str, options: Options) -> Result<Collection, ParsingError> {
    let mut input = Parser::new().with_options(options);
    input.initialize(content);

    input.read_collection()
}

#[derive(Debug)]
pub struct Parser<'i> {
    original: &'i str,
    source: &'i str,
    offset: usize,
    options: Options,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            original: "",
            source: "",
            offset: 0,
            options: Options::default(),
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
    }

    pub fn with_options(mut self, options: Options) -> Parser<'i> {
        self.options = options;
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn advance(&mut self, width: usize) {
        // advance the parser position
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn entire(&self) -> &'i str {
        self.source
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn peek_next_char(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    /// Skip spaces, tabs, and line breaks between tokens.
    fn trim_whitespace(&mut self) {
        let content = self.entire();
        let trimmed = content.trim_start_matches([' ', '\t', '\n', '\r']);

        self.advance(content.len() - trimmed.len());
    }

    fn position_at(&self, offset: usize) -> Position {
        Position {
            offset,
            line: calculate_line_number(self.original, offset) + 1,
            column: calculate_column_number(self.original, offset) + 1,
        }
    }

    fn position(&self) -> Position {
        self.position_at(self.offset)
    }

    /// Collection := GameTree+ followed by nothing but whitespace.
    pub fn read_collection(&mut self) -> Result<Collection, ParsingError> {
        let mut trees = Vec::new();

        loop {
            self.trim_whitespace();
            if self.peek_next_char() != Some('(') {
                break;
            }
            trees.push(self.read_game_tree()?);
        }

        if trees.is_empty() {
            return Err(ParsingError::UnexpectedToken(self.position(), "collection"));
        }

        if !self.is_finished() {
            return Err(ParsingError::ExtraData(self.position()));
        }

        Ok(Collection::new(trees))
    }

    /// GameTree := "(" Sequence GameTree* ")"
    pub fn read_game_tree(&mut self) -> Result<GameTree, ParsingError> {
        self.trim_whitespace();

        if self.peek_next_char() != Some('(') {
            return Err(ParsingError::UnexpectedToken(self.position(), "game tree"));
        }
        self.advance(1);

        let sequence = self.read_sequence()?;

        let mut variations = Vec::new();
        loop {
            self.trim_whitespace();

            match self.peek_next_char() {
                Some('(') => variations.push(self.read_game_tree()?),
                Some(')') => {
                    self.advance(1);
                    break;
                }
                Some(_) => {
                    return Err(ParsingError::UnexpectedToken(
                        self.position(),
                        "')' to close game tree",
                    ))
                }
                None => {
                    return Err(ParsingError::UnterminatedConstruct(
                        self.position(),
                        "game tree",
                    ))
                }
            }
        }

        Ok(GameTree::new(sequence, variations))
    }

    /// Sequence := Node+
    pub fn read_sequence(&mut self) -> Result<Sequence, ParsingError> {
        let mut nodes = Vec::new();

        loop {
            self.trim_whitespace();
            if self.peek_next_char() != Some(';') {
                break;
            }
            nodes.push(self.read_node()?);
        }

        if nodes.is_empty() && self.is_finished() {
            return Err(ParsingError::UnterminatedConstruct(
                self.position(),
                "game tree",
            ));
        }

        Sequence::new(nodes)
            .map_err(|_| ParsingError::UnexpectedToken(self.position(), "sequence"))
    }

    /// Node := ";" Property*
    pub fn read_node(&mut self) -> Result<Node, ParsingError> {
        self.trim_whitespace();

        if self.peek_next_char() != Some(';') {
            return Err(ParsingError::UnexpectedToken(self.position(), "node"));
        }
        self.advance(1);

        let mut node = Node::default();

        loop {
            self.trim_whitespace();
            if !is_label_start(self.entire()) {
                break;
            }

            let start = self.offset;
            let property = self.read_property()?;

            match self
                .options
                .duplicates
            {
                Duplicates::Reject => {
                    let label = property
                        .label()
                        .to_string();
                    node.add(property)
                        .map_err(|_| {
                            ParsingError::DuplicateProperty(self.position_at(start), label)
                        })?;
                }
                Duplicates::Replace => node.replace(property),
            }
        }

        Ok(node)
    }

    /// Property := Label Value+
    pub fn read_property(&mut self) -> Result<Property, ParsingError> {
        self.trim_whitespace();

        let label = self.read_label()?;

        let mut values = Vec::new();
        loop {
            self.trim_whitespace();
            if self.peek_next_char() != Some('[') {
                break;
            }
            values.push(self.read_value()?);
        }

        match PropertyValue::new(values) {
            Ok(value) => Ok(Property::from_parts(label.to_string(), value)),
            Err(_) if self.is_finished() => Err(ParsingError::UnterminatedConstruct(
                self.position(),
                "property",
            )),
            Err(_) => Err(ParsingError::UnexpectedToken(
                self.position(),
                "property value",
            )),
        }
    }

    fn read_label(&mut self) -> Result<&'i str, ParsingError> {
        let re = regex!(r"^[A-Za-z]+");

        let content = self.entire();
        let label = re
            .find(content)
            .ok_or_else(|| ParsingError::UnexpectedToken(self.position(), "property"))?
            .as_str();

        self.advance(label.len());
        Ok(label)
    }

    /// Value := "[" (escaped | plain)* "]", returned decoded. If the closing
    /// bracket is missing the error is reported just past the last escape
    /// pair consumed (or just past the "[" if there were none).
    pub fn read_value(&mut self) -> Result<String, ParsingError> {
        self.trim_whitespace();

        if self.peek_next_char() != Some('[') {
            return Err(ParsingError::UnexpectedToken(
                self.position(),
                "property value",
            ));
        }
        self.advance(1);

        let content = self.entire();
        let mut consumed = 0;
        let mut chars = content
            .char_indices()
            .peekable();

        let end = loop {
            match chars.next() {
                Some((i, '\\')) => {
                    if let Some((_, ']' | '\\')) = chars.peek() {
                        chars.next();
                        consumed = i + 2;
                    }
                }
                Some((i, ']')) => break i,
                Some(_) => continue,
                None => {
                    self.advance(consumed);
                    return Err(ParsingError::UnterminatedConstruct(
                        self.position(),
                        "property value",
                    ));
                }
            }
        };

        let value = text::decode(&content[..end]);
        self.advance(end + 1);

        Ok(value)
    }
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Parser::new()
    }
}

fn is_label_start(content: &str) -> bool {
    content
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}
