use crate::language::{GameTree, NavigationError, Node};

/// Walks one path through a GameTree, one node at a time, with the caller
/// choosing which variation to follow at each branch point.
///
/// The cursor only borrows the tree, so the tree cannot be edited while a
/// cursor over it is alive.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    root: &'t GameTree,
    tree: &'t GameTree,
    index: usize,
    stack: Vec<&'t GameTree>,
}

impl<'t> Cursor<'t> {
    pub fn new(tree: &'t GameTree) -> Cursor<'t> {
        Cursor {
            root: tree,
            tree,
            index: 0,
            stack: Vec::new(),
        }
    }

    pub fn node(&self) -> &'t Node {
        &self.tree.sequence()[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The (sub)tree whose sequence the cursor is currently in.
    pub fn tree(&self) -> &'t GameTree {
        self.tree
    }

    pub fn root(&self) -> &'t GameTree {
        self.root
    }

    /// How many branch points have been passed on the way here.
    pub fn depth(&self) -> usize {
        self.stack
            .len()
    }

    /// The number of choices next() will accept from here: 1 within a
    /// sequence, the number of variations at its end, 0 at a leaf.
    pub fn branches(&self) -> usize {
        if self.index + 1
            < self
                .tree
                .sequence()
                .len()
        {
            1
        } else {
            self.tree
                .variations()
                .len()
        }
    }

    /// Move forward one node. Within a sequence only variation 0 is valid;
    /// at the end of one, `variation` selects which branch to enter.
    pub fn next(&mut self, variation: usize) -> Result<&'t Node, NavigationError> {
        let tree = self.tree;

        if self.index + 1
            < tree
                .sequence()
                .len()
        {
            if variation != 0 {
                return Err(NavigationError::InvalidVariation(variation));
            }
            self.index += 1;
        } else if !tree
            .variations()
            .is_empty()
        {
            let branch = tree
                .variation(variation)
                .ok_or(NavigationError::InvalidVariation(variation))?;

            self.stack
                .push(tree);
            self.tree = branch;
            self.index = 0;
        } else {
            return Err(NavigationError::EndOfTree);
        }

        Ok(self.node())
    }

    /// Move back one node, climbing out of a variation when at its start.
    pub fn previous(&mut self) -> Result<&'t Node, NavigationError> {
        if self.index > 0 {
            self.index -= 1;
        } else if let Some(parent) = self
            .stack
            .pop()
        {
            self.tree = parent;
            self.index = parent
                .sequence()
                .len()
                - 1;
        } else {
            return Err(NavigationError::StartOfTree);
        }

        Ok(self.node())
    }

    /// Return to the first node of the root tree.
    pub fn reset(&mut self) {
        self.tree = self.root;
        self.index = 0;
        self.stack
            .clear();
    }
}
