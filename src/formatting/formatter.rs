//! Code formatter for SGF game records
//!
//! Canonical output is deterministic: properties appear in ascending label
//! order and values in ascending order within each property, whatever order
//! they were read or inserted in.

use crate::formatting::*;
use crate::language::*;

/// How a Collection is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Canonical text, each game tree on one line.
    Compact,
    /// Nested game trees indented by the given number of spaces per level.
    Pretty(u8),
}

pub fn format_with_layout(collection: &Collection, layout: Layout) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new(layout);
    output.append_collection(collection);
    output.fragments
}

pub fn render_value(value: &PropertyValue, renderer: &impl Render) -> String {
    let mut output = Formatter::new(Layout::Compact);
    output.append_value(value);
    output.render(renderer)
}

pub fn render_property(label: &str, value: &PropertyValue, renderer: &impl Render) -> String {
    let mut output = Formatter::new(Layout::Compact);
    output.append_property(label, value);
    output.render(renderer)
}

pub fn render_node(node: &Node, renderer: &impl Render) -> String {
    let mut output = Formatter::new(Layout::Compact);
    output.append_node(node);
    output.render(renderer)
}

pub fn render_sequence(sequence: &Sequence, renderer: &impl Render) -> String {
    let mut output = Formatter::new(Layout::Compact);
    output.append_sequence(sequence);
    output.render(renderer)
}

pub fn render_tree(tree: &GameTree, renderer: &impl Render) -> String {
    let mut output = Formatter::new(Layout::Compact);
    output.append_tree(tree, 0);
    output.render(renderer)
}

pub fn render_tree_pretty(tree: &GameTree, indent: u8, renderer: &impl Render) -> String {
    let mut output = Formatter::new(Layout::Pretty(indent));
    output.append_tree(tree, 0);
    output.render(renderer)
}

pub fn render_collection(collection: &Collection, renderer: &impl Render) -> String {
    let mut output = Formatter::new(Layout::Compact);
    output.append_collection(collection);
    output.render(renderer)
}

pub fn render_collection_pretty(
    collection: &Collection,
    indent: u8,
    renderer: &impl Render,
) -> String {
    let mut output = Formatter::new(Layout::Pretty(indent));
    output.append_collection(collection);
    output.render(renderer)
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    layout: Layout,
}

impl Formatter {
    fn new(layout: Layout) -> Formatter {
        Formatter {
            fragments: Vec::new(),
            layout,
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn render(self, renderer: &impl Render) -> String {
        self.fragments
            .iter()
            .map(|(syntax, content)| renderer.style(*syntax, content))
            .collect()
    }

    #[cfg(test)]
    fn reset(&mut self) {
        self.fragments
            .clear();
    }

    fn newline(&mut self) {
        self.append(Syntax::Newline, "\n");
    }

    fn indent(&mut self, depth: usize) {
        if let Layout::Pretty(width) = self.layout {
            let spaces = depth * width as usize;
            if spaces > 0 {
                self.append(Syntax::Indent, &" ".repeat(spaces));
            }
        }
    }

    fn append_value(&mut self, value: &PropertyValue) {
        for v in value.iter() {
            self.append(Syntax::Bracket, "[");
            self.append(Syntax::Value, &text::escape(v));
            self.append(Syntax::Bracket, "]");
        }
    }

    fn append_property(&mut self, label: &str, value: &PropertyValue) {
        self.append(Syntax::Label, label);
        self.append_value(value);
    }

    fn append_node(&mut self, node: &Node) {
        self.append(Syntax::Semicolon, ";");
        for (label, value) in node.iter() {
            self.append_property(label, value);
        }
    }

    fn append_sequence(&mut self, sequence: &Sequence) {
        for node in sequence {
            self.append_node(node);
        }
    }

    fn append_tree(&mut self, tree: &GameTree, depth: usize) {
        match self.layout {
            Layout::Compact => {
                self.append(Syntax::Parenthesis, "(");
                self.append_sequence(tree.sequence());
                for variation in tree.variations() {
                    self.append_tree(variation, depth + 1);
                }
                self.append(Syntax::Parenthesis, ")");
            }
            Layout::Pretty(_) => {
                self.indent(depth);
                self.append(Syntax::Parenthesis, "(");
                self.newline();

                self.indent(depth + 1);
                self.append_sequence(tree.sequence());

                for variation in tree.variations() {
                    self.newline();
                    self.append_tree(variation, depth + 1);
                }

                self.newline();
                self.indent(depth);
                self.append(Syntax::Parenthesis, ")");
            }
        }
    }

    fn append_collection(&mut self, collection: &Collection) {
        for (i, tree) in collection
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.newline();
                self.newline();
            }
            self.append_tree(tree, 0);
        }
    }
}

#[cfg(test)]
impl std::fmt::Display for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, content) in &self.fragments {
            f.write_str(content)?;
        }
        Ok(())
    }
}
