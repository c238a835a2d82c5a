use std::fmt;

use crate::formatting::{formatter, Identity};
use crate::language::{ModelError, Node};

/// A line of play without branching. Always holds at least one Node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    nodes: Vec<Node>,
}

impl Sequence {
    pub fn new(nodes: Vec<Node>) -> Result<Sequence, ModelError> {
        if nodes.is_empty() {
            return Err(ModelError::EmptySequence);
        }
        Ok(Sequence { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes
            .len()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes
            .get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes
            .get_mut(index)
    }

    pub fn first(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn last(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes
            .iter()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes
            .push(node);
    }

    pub fn extend(&mut self, other: Sequence) {
        self.nodes
            .extend(other.nodes);
    }

    pub fn remove(&mut self, index: usize) -> Result<Node, ModelError> {
        if index >= self.nodes.len() {
            return Err(ModelError::InvalidIndex(index));
        }
        if self.nodes.len() == 1 {
            return Err(ModelError::EmptySequence);
        }
        Ok(self
            .nodes
            .remove(index))
    }

    /// Split into [0, at) which stays here and [at, len) which is returned.
    /// Callers guarantee 0 < at < len so both halves are non-empty.
    pub(crate) fn split_off(&mut self, at: usize) -> Sequence {
        debug_assert!(at > 0 && at < self.nodes.len());
        Sequence {
            nodes: self
                .nodes
                .split_off(at),
        }
    }
}

impl std::ops::Index<usize> for Sequence {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::render_sequence(self, &Identity))
    }
}
