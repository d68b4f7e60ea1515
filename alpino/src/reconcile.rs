//! Alignment of the sentence tokens with the words of a tree.
//!
//! Alpino splits the sentence on whitespace, but a word in the tree can
//! contain whitespace (e.g. a non-breaking space). Such a word covers
//! several tokens of the sentence, which are joined to restore a one to
//! one correspondence between tokens and words.

use std::collections::HashMap;

use log::debug;

use crate::error::ConversionError;
use crate::index::TokenIndex;
use crate::tree::AlpinoTree;

/// Join tokens that together form a tree word with internal whitespace.
///
/// Returns an error when a token starts such a word, but neither
/// matches the word nor occurs in the tree itself.
pub fn reconcile_tokens(tree: &mut AlpinoTree, index: &TokenIndex) -> Result<(), ConversionError> {
    let words = index.words(tree).collect::<Vec<_>>();

    let mut candidates: HashMap<&str, Vec<Vec<&str>>> = HashMap::new();
    for &word in &words {
        if !word.contains(char::is_whitespace) || tree.tokens().iter().any(|token| token == word) {
            continue;
        }

        let pieces = word.split_whitespace().collect::<Vec<_>>();
        if let Some(&first) = pieces.first() {
            candidates.entry(first).or_default().push(pieces);
        }
    }

    if candidates.is_empty() {
        return Ok(());
    }

    let tokens = tree.tokens();
    let mut reconciled = Vec::with_capacity(tokens.len());
    let mut position = 0;
    while position < tokens.len() {
        let token = &tokens[position];

        let group = match candidates.get(token.as_str()) {
            Some(group) => group,
            None => {
                reconciled.push(token.clone());
                position += 1;
                continue;
            }
        };

        let rest = &tokens[position..];
        let matching = group.iter().find(|pieces| {
            pieces.len() <= rest.len()
                && pieces
                    .iter()
                    .zip(rest)
                    .all(|(&piece, token)| piece == token.as_str())
        });

        match matching {
            Some(pieces) => {
                let joined = rest[..pieces.len()].concat();
                debug!("joined tokens {:?} at {}", pieces, position);
                reconciled.push(joined);
                position += pieces.len();
            }
            None if words.contains(&token.as_str()) => {
                reconciled.push(token.clone());
                position += 1;
            }
            None => {
                return Err(ConversionError::TokenAlignment {
                    position,
                    reason: format!("token {:?} does not match a word in the tree", token),
                })
            }
        }
    }

    *tree.tokens_mut() = reconciled;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::reconcile_tokens;
    use crate::error::ConversionError;
    use crate::index::TokenIndex;
    use crate::tests::{read_tree, DEN_HAAG, JAN_LOOPT};
    use crate::tree::{AlpinoTree, TreeNode};

    fn reconcile(mut tree: AlpinoTree) -> Result<Vec<String>, ConversionError> {
        let index = TokenIndex::build(&tree)?;
        reconcile_tokens(&mut tree, &index)?;
        Ok(tree.tokens().to_vec())
    }

    #[test]
    fn joins_tokens_of_word_with_space() {
        let tree = read_tree(DEN_HAAG);
        assert_eq!(tree.tokens().len(), 6);

        assert_eq!(
            reconcile(tree).unwrap(),
            vec!["Hij", "woont", "in", "DenHaag", "."]
        );
    }

    #[test]
    fn leaves_aligned_tokens_alone() {
        let tree = read_tree(JAN_LOOPT);
        let tokens = tree.tokens().to_vec();
        assert_eq!(reconcile(tree).unwrap(), tokens);
    }

    #[test]
    fn keeps_token_that_is_a_word() {
        let tokens = vec!["Den".to_owned(), "Bosch".to_owned(), "Den".to_owned(), "Haag".to_owned()];
        let mut tree = AlpinoTree::new(TreeNode::phrase("top", "top", 0, 3), tokens);
        let top = tree.top();
        tree.add_child(top, TreeNode::terminal("Den", "de", "det", "--", 0));
        tree.add_child(top, TreeNode::terminal("Bosch", "Bosch", "name", "--", 1));
        tree.add_child(top, TreeNode::terminal("Den Haag", "Den Haag", "name", "--", 2));

        assert_eq!(reconcile(tree).unwrap(), vec!["Den", "Bosch", "DenHaag"]);
    }

    #[test]
    fn unmatched_token_is_alignment_error() {
        let tokens = vec!["Den".to_owned(), "Bosch".to_owned()];
        let mut tree = AlpinoTree::new(TreeNode::phrase("top", "top", 0, 1), tokens);
        let top = tree.top();
        tree.add_child(top, TreeNode::terminal("Den Haag", "Den Haag", "name", "--", 0));

        assert!(matches!(
            reconcile(tree),
            Err(ConversionError::TokenAlignment { position: 0, .. })
        ));
    }
}
