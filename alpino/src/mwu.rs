//! Concatenation of multi-word units.

use std::collections::HashSet;
use std::iter;

use itertools::Itertools;
use log::debug;

use crate::error::ConversionError;
use crate::tree::{AlpinoTree, NodeId, TreeTransform};

/// Category of multi-word units.
pub const MWU_CATEGORY: &str = "mwu";

/// Part-of-speech tag of concatenated multi-word units.
pub const MWU_POS: &str = "mwu";

/// Collapses multi-word units into single tokens.
///
/// The tokens of a multi-word unit are joined with underscores and the
/// token positions of all nodes following the unit are shifted to the
/// left. The lemma of the unit is the underscore-joined lemmas of its
/// parts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MwuCollapser {
    mark_alpino: bool,
}

impl MwuCollapser {
    pub fn new() -> Self {
        MwuCollapser::default()
    }

    /// Mark concatenated units as `[_@mwu_..._]`, as Alpino does.
    pub fn mark_alpino(mut self, mark_alpino: bool) -> Self {
        self.mark_alpino = mark_alpino;
        self
    }

    fn collapse(
        self,
        tree: &mut AlpinoTree,
        mwu: NodeId,
        nodes: &mut Vec<NodeId>,
    ) -> Result<(), ConversionError> {
        let (begin, end) = (tree[mwu].begin(), tree[mwu].end());
        if begin >= end || end > tree.tokens().len() {
            return Err(ConversionError::TokenAlignment {
                position: begin,
                reason: format!(
                    "multi-word unit {:?} spans [{}, {}) of {} tokens",
                    tree[mwu].id().unwrap_or_default(),
                    begin,
                    end,
                    tree.tokens().len()
                ),
            });
        }
        let decrement = end - begin - 1;

        let joined = tree.tokens()[begin..end].join("_");
        let word = if self.mark_alpino {
            format!("[_@mwu_{}_]", joined)
        } else {
            joined
        };
        tree.tokens_mut()
            .splice(begin..end, iter::once(word.clone()))
            .for_each(drop);

        let parts = tree.children(mwu).to_vec();
        let lemma = parts
            .iter()
            .filter_map(|&part| tree[part].lemma())
            .join("_");

        let mut removed = HashSet::new();
        for part in parts {
            removed.extend(tree.descendants(part));
            tree.detach(part);
        }
        nodes.retain(|id| !removed.contains(id));

        debug!("concatenated multi-word unit {:?} at {}", word, begin);

        let node = &mut tree[mwu];
        node.pos = Some(MWU_POS.to_owned());
        node.lemma = Some(lemma);
        node.word = Some(word);
        node.cat = None;

        for &id in nodes.iter() {
            if tree[id].begin > begin {
                let shifted = shift(tree[id].begin, decrement)
                    .ok_or_else(|| negative_head(tree, mwu, begin, end, id))?;
                tree[id].begin = shifted;
            }

            if tree[id].end > begin {
                let shifted = shift(tree[id].end, decrement)
                    .ok_or_else(|| negative_head(tree, mwu, begin, end, id))?;
                tree[id].end = shifted;
            }
        }

        Ok(())
    }
}

impl TreeTransform for MwuCollapser {
    fn transform(&self, tree: &mut AlpinoTree) -> Result<(), ConversionError> {
        // Units are collapsed in document order, so that the spans of
        // later units are already shifted when they are processed.
        let mut nodes = tree.descendants(tree.top());

        let mut idx = 0;
        while idx < nodes.len() {
            let node = nodes[idx];
            idx += 1;

            if tree[node].cat() == Some(MWU_CATEGORY) {
                // Only descendants of the unit are removed from nodes,
                // these follow idx.
                self.collapse(tree, node, &mut nodes)?;
            }
        }

        Ok(())
    }
}

fn shift(position: usize, decrement: usize) -> Option<usize> {
    position.checked_sub(decrement)
}

fn negative_head(
    tree: &AlpinoTree,
    mwu: NodeId,
    begin: usize,
    end: usize,
    node: NodeId,
) -> ConversionError {
    ConversionError::NegativeHead {
        mwu: tree[mwu].id().unwrap_or_default().to_owned(),
        begin,
        end,
        node: tree[node].id().unwrap_or_default().to_owned(),
    }
}
