//! Attachment of punctuation.

use log::debug;

use crate::error::ConversionError;
use crate::index::TokenIndex;
use crate::tree::AlpinoTree;

/// Relation of reattached punctuation.
pub const PUNCTUATION_RELATION: &str = "punct";

/// Attaches punctuation to the preceding non-punctuation token.
///
/// Alpino attaches punctuation to the top node. This transformation
/// moves every punctuation token below the top node to the closest
/// preceding token that is not punctuation. Sentence-initial
/// punctuation stays attached to the top node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PunctuationReattacher;

impl PunctuationReattacher {
    pub fn new() -> Self {
        PunctuationReattacher
    }

    /// Reattach the punctuation of `tree`, using `index` to find tokens.
    pub fn reattach(self, tree: &mut AlpinoTree, index: &TokenIndex) -> Result<(), ConversionError> {
        let top = tree.top();

        for punct in tree.children(top).to_vec() {
            if !tree[punct].is_punctuation() {
                continue;
            }

            let mut position = tree[punct].begin();
            let head = loop {
                if position == 0 {
                    break None;
                }
                position -= 1;

                let candidate = index.lookup(position)?;
                if !tree[candidate].is_punctuation() {
                    break Some(candidate);
                }
            };

            let head = match head {
                Some(head) if !tree.dominates(punct, head) => head,
                _ => continue,
            };

            debug!("attaching {} to {}", tree[punct], tree[head]);

            tree.append(head, punct);
            tree[punct].set_rel(PUNCTUATION_RELATION);
        }

        Ok(())
    }
}
