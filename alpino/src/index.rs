//! Index of the tokens of a tree.

use std::collections::btree_map::{BTreeMap, Iter};

use crate::error::ConversionError;
use crate::tree::{AlpinoTree, NodeId};

/// Mapping from token positions to the tree nodes of the tokens.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenIndex {
    positions: BTreeMap<usize, NodeId>,
}

impl TokenIndex {
    /// Index every node of the tree that has a word by its position.
    ///
    /// Returns an error when two words share a position.
    pub fn build(tree: &AlpinoTree) -> Result<Self, ConversionError> {
        let mut positions = BTreeMap::new();

        for id in tree.descendants(tree.top()) {
            if tree[id].word().is_none() {
                continue;
            }

            let position = tree[id].begin();
            if positions.insert(position, id).is_some() {
                return Err(ConversionError::DuplicatePosition { position });
            }
        }

        Ok(TokenIndex { positions })
    }

    /// Get the node of the token at `position`.
    pub fn get(&self, position: usize) -> Option<NodeId> {
        self.positions.get(&position).copied()
    }

    /// Get the node of the token at `position`.
    ///
    /// Returns an error when there is no token at `position`.
    pub fn lookup(&self, position: usize) -> Result<NodeId, ConversionError> {
        self.get(position)
            .ok_or_else(|| ConversionError::TokenAlignment {
                position,
                reason: "no word in the tree at this position".to_owned(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get the number of indexed tokens.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over the indexed tokens in position order.
    pub fn iter(&self) -> Iter<usize, NodeId> {
        self.positions.iter()
    }

    /// Get the words of the indexed tokens in position order.
    pub fn words<'a>(&'a self, tree: &'a AlpinoTree) -> impl Iterator<Item = &'a str> + 'a {
        self.positions
            .values()
            .filter_map(move |&id| tree[id].word())
    }
}

impl<'a> IntoIterator for &'a TokenIndex {
    type Item = (&'a usize, &'a NodeId);
    type IntoIter = Iter<'a, usize, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
