//! Removal of whitespace and empty nodes.

use crate::error::ConversionError;
use crate::tree::{AlpinoTree, NodeId, TreeTransform};

/// Removes whitespace text nodes and empty nodes (traces).
///
/// If an initial (final) daughter of a phrase is a trace, the begin
/// (end) of the phrase is that of the antecedent. The spans of the
/// phrases are therefore corrected from their remaining children after
/// pruning, bottom-up, so that multi-word units are concatenated using
/// the correct tokens.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pruner;

impl Pruner {
    pub fn new() -> Self {
        Pruner
    }

    fn prune(self, tree: &mut AlpinoTree, node: NodeId) {
        for child in tree.children(node).to_vec() {
            if tree[child].is_whitespace_text() || tree[child].is_empty() {
                tree.detach(child);
            } else {
                self.prune(tree, child);
            }
        }

        let span = match (tree.children(node).first(), tree.children(node).last()) {
            (Some(&first), Some(&last)) => Some((tree[first].begin(), tree[last].end())),
            _ => None,
        };

        if let Some((begin, end)) = span {
            tree[node].begin = begin;
            tree[node].end = end;
        }
    }
}

impl TreeTransform for Pruner {
    fn transform(&self, tree: &mut AlpinoTree) -> Result<(), ConversionError> {
        let top = tree.top();
        self.prune(tree, top);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Pruner;
    use crate::tests::{find_word, JAN_LOOPT, TRACE};
    use crate::tree::{AlpinoTree, TreeNode, TreeTransform};

    #[test]
    fn removes_whitespace_and_traces() {
        let mut tree = AlpinoTree::from_xml(TRACE).unwrap();
        Pruner::new().transform(&mut tree).unwrap();

        for id in tree.descendants(tree.top()) {
            assert!(!tree[id].is_whitespace_text());
            if id != tree.top() {
                assert!(!tree[id].is_empty(), "{} survived pruning", tree[id]);
            }
        }
    }

    #[test]
    fn repairs_span_after_initial_trace() {
        let mut tree = AlpinoTree::from_xml(TRACE).unwrap();
        let inf = tree
            .descendants(tree.top())
            .into_iter()
            .find(|&id| tree[id].cat() == Some("inf"))
            .unwrap();
        assert_eq!(tree[inf].begin(), 0);

        Pruner::new().transform(&mut tree).unwrap();
        assert_eq!(tree[inf].begin(), 2);
        assert_eq!(tree[inf].end(), 3);
        assert_eq!(tree.children(inf).len(), 1);
        assert_eq!(tree.children(inf), &[find_word(&tree, "slapen")]);
    }

    #[test]
    fn pruning_is_idempotent() {
        for xml in &[TRACE, JAN_LOOPT] {
            let mut tree = AlpinoTree::from_xml(xml).unwrap();
            Pruner::new().transform(&mut tree).unwrap();
            let once = tree.clone();
            Pruner::new().transform(&mut tree).unwrap();
            assert_eq!(once, tree);
        }
    }

    #[test]
    fn childless_phrase_keeps_span() {
        let mut tree = AlpinoTree::new(TreeNode::phrase("top", "top", 0, 2), vec![]);
        let top = tree.top();
        let phrase = tree.add_child(top, TreeNode::phrase("np", "--", 1, 2));
        tree.add_child(phrase, TreeNode::default());

        Pruner::new().transform(&mut tree).unwrap();
        assert!(tree.children(phrase).is_empty());
        assert_eq!((tree[phrase].begin(), tree[phrase].end()), (1, 2));
        assert_eq!((tree[top].begin(), tree[top].end()), (1, 2));
    }
}
