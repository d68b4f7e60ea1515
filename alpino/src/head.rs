//! Head promotion.

use log::{debug, warn};

use crate::error::ConversionError;
use crate::tree::{AlpinoTree, NodeId, TreeTransform, ROOT_RELATION, TOP_CATEGORY};

/// Relations that mark the head of a phrase.
pub const HEAD_RELATIONS: &[&str] = &["hd", "rhd", "whd", "crd", "cmp"];

const DU_CATEGORY: &str = "du";

const DU_HEAD_RELATIONS: &[&str] = &["dlink", "nucl"];

const QUIET_FALLBACK_CATEGORIES: &[&str] = &["mwu", "conj"];

/// Replaces every phrase by its head.
///
/// The head of a phrase takes the place of the phrase: the phrase node
/// takes over the token and span of the head, the dependents of the head
/// become dependents of the phrase node, and the head itself is removed.
/// Since phrases are processed bottom-up, every remaining node is a token
/// after promotion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeadPromoter {
    link_du: bool,
    all_warnings: bool,
}

impl Default for HeadPromoter {
    fn default() -> Self {
        HeadPromoter {
            link_du: true,
            all_warnings: false,
        }
    }
}

impl HeadPromoter {
    pub fn new() -> Self {
        HeadPromoter::default()
    }

    /// Find heads in discourse units.
    ///
    /// When disabled, all the daughters of a discourse unit are attached
    /// to the root.
    pub fn link_du(mut self, link_du: bool) -> Self {
        self.link_du = link_du;
        self
    }

    /// Warn about head fallbacks in multi-word units and conjunctions.
    pub fn all_warnings(mut self, all_warnings: bool) -> Self {
        self.all_warnings = all_warnings;
        self
    }

    fn promote(self, tree: &mut AlpinoTree, node: NodeId) {
        let children = tree.children(node).to_vec();
        for &child in &children {
            self.promote(tree, child);
        }

        if children.is_empty() || tree[node].cat() == Some(TOP_CATEGORY) {
            return;
        }

        if tree[node].cat() == Some(DU_CATEGORY) && !self.link_du {
            for child in children {
                tree[child].set_rel(ROOT_RELATION);
            }
            return;
        }

        let head = self.find_head(tree, node, &children);

        let head_node = &mut tree[head];
        let id = head_node.id.take();
        let begin = head_node.begin;
        let end = head_node.end;
        let pos = head_node.pos.take();
        let lemma = head_node.lemma.take();
        let word = head_node.word.take();

        let phrase = &mut tree[node];
        phrase.id = id;
        phrase.begin = begin;
        phrase.end = end;
        phrase.pos = pos;
        phrase.lemma = lemma;
        phrase.word = word;
        phrase.cat = None;

        for dependent in tree.children(head).to_vec() {
            tree.append(node, dependent);
        }
        tree.detach(head);
    }

    fn find_head(self, tree: &AlpinoTree, node: NodeId, children: &[NodeId]) -> NodeId {
        let find_rel = |relations: &[&str]| {
            children.iter().copied().find(|&child| {
                tree[child]
                    .rel()
                    .map_or(false, |rel| relations.iter().any(|&relation| relation == rel))
            })
        };

        if let Some(head) = find_rel(HEAD_RELATIONS) {
            return head;
        }

        if tree[node].cat() == Some(DU_CATEGORY) {
            for &relation in DU_HEAD_RELATIONS {
                if let Some(head) = find_rel(&[relation]) {
                    return head;
                }
            }
        }

        let quiet = !self.all_warnings
            && tree[node]
                .cat()
                .map_or(false, |cat| QUIET_FALLBACK_CATEGORIES.contains(&cat));
        if quiet {
            debug!("no head found, using first daughter of {}", tree[node]);
        } else {
            warn!("no head found, using first daughter of {}", tree[node]);
        }

        children[0]
    }
}

impl TreeTransform for HeadPromoter {
    fn transform(&self, tree: &mut AlpinoTree) -> Result<(), ConversionError> {
        let top = tree.top();
        self.promote(tree, top);
        Ok(())
    }
}
