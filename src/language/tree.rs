//! Game trees and the collection of them making up one document.

use std::fmt;

use crate::formatting::{formatter, Identity};
use crate::language::{ModelError, Node, Sequence};

/// A Sequence followed by zero or more alternative continuations, each
/// branching after the Sequence's last node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameTree {
    sequence: Sequence,
    variations: Vec<GameTree>,
}

impl GameTree {
    pub fn new(sequence: Sequence, variations: Vec<GameTree>) -> GameTree {
        GameTree {
            sequence,
            variations,
        }
    }

    pub fn from_nodes(nodes: Vec<Node>, variations: Vec<GameTree>) -> Result<GameTree, ModelError> {
        let sequence = Sequence::new(nodes)?;
        Ok(GameTree::new(sequence, variations))
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn sequence_mut(&mut self) -> &mut Sequence {
        &mut self.sequence
    }

    pub fn variations(&self) -> &[GameTree] {
        &self.variations
    }

    pub fn variation(&self, index: usize) -> Option<&GameTree> {
        self.variations
            .get(index)
    }

    pub fn variation_mut(&mut self, index: usize) -> Option<&mut GameTree> {
        self.variations
            .get_mut(index)
    }

    /// Graft `tree` on as a branch after the first `index` nodes of this
    /// tree's sequence, where 1 <= index <= len.
    ///
    /// Splitting inside the sequence moves the tail, along with the existing
    /// variations, into a new first branch and adds `tree` beside it. At the
    /// end of the sequence `tree` becomes another sibling if there are
    /// already variations, otherwise it is simply joined on with no new
    /// branch point.
    pub fn insert(&mut self, tree: GameTree, index: usize) -> Result<(), ModelError> {
        let length = self
            .sequence
            .len();

        if index < 1 || index > length {
            return Err(ModelError::InvalidIndex(index));
        }

        if index < length {
            let tail = self
                .sequence
                .split_off(index);
            let variations = std::mem::take(&mut self.variations);

            let continuation = GameTree::new(tail, variations);
            self.variations = vec![continuation, tree];
        } else if !self
            .variations
            .is_empty()
        {
            self.variations
                .push(tree);
        } else {
            let GameTree {
                sequence,
                variations,
            } = tree;

            self.sequence
                .extend(sequence);
            self.variations = variations;
        }

        Ok(())
    }

    /// Remove and return the variation at `index`.
    pub fn cut_variation(&mut self, index: usize) -> Result<GameTree, ModelError> {
        if index >= self
            .variations
            .len()
        {
            return Err(ModelError::InvalidIndex(index));
        }

        Ok(self
            .variations
            .remove(index))
    }

    /// Keep only the first `index` nodes, 1 <= index < len. Everything after,
    /// including all variations, is detached and handed back as its own tree.
    pub fn cut_tree(&mut self, index: usize) -> Result<GameTree, ModelError> {
        if index < 1
            || index
                >= self
                    .sequence
                    .len()
        {
            return Err(ModelError::InvalidIndex(index));
        }

        let tail = self
            .sequence
            .split_off(index);
        let variations = std::mem::take(&mut self.variations);

        Ok(GameTree::new(tail, variations))
    }

    /// Number of nodes in this tree and all of its variations.
    pub fn node_count(&self) -> usize {
        self.sequence
            .len()
            + self
                .variations
                .iter()
                .map(GameTree::node_count)
                .sum::<usize>()
    }

    /// Number of branches anywhere in this tree.
    pub fn variation_count(&self) -> usize {
        self.variations
            .len()
            + self
                .variations
                .iter()
                .map(GameTree::variation_count)
                .sum::<usize>()
    }

    pub fn pretty(&self, indent: u8) -> String {
        formatter::render_tree_pretty(self, indent, &Identity)
    }
}

impl fmt::Display for GameTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::render_tree(self, &Identity))
    }
}

/// Every root GameTree in a document, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Collection {
    trees: Vec<GameTree>,
}

impl Collection {
    pub fn new(trees: Vec<GameTree>) -> Collection {
        Collection { trees }
    }

    pub fn len(&self) -> usize {
        self.trees
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees
            .is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GameTree> {
        self.trees
            .get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut GameTree> {
        self.trees
            .get_mut(index)
    }

    pub fn push(&mut self, tree: GameTree) {
        self.trees
            .push(tree);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameTree> {
        self.trees
            .iter()
    }

    pub fn pretty(&self, indent: u8) -> String {
        formatter::render_collection_pretty(self, indent, &Identity)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a GameTree;
    type IntoIter = std::slice::Iter<'a, GameTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::render_collection(self, &Identity))
    }
}
