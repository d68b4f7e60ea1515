//! Conversion of Alpino trees to dependency graphs.

use depgraph::graph::{DepTriple, Sentence, ROOT_RELATION as GRAPH_ROOT_RELATION};
use depgraph::token::Token;

use crate::error::ConversionError;
use crate::head::HeadPromoter;
use crate::index::TokenIndex;
use crate::mwu::MwuCollapser;
use crate::prune::Pruner;
use crate::punct::PunctuationReattacher;
use crate::reconcile::reconcile_tokens;
use crate::tree::{AlpinoTree, TreeTransform, ROOT_RELATION};

/// Conversion options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConvertOptions {
    concat_mwu: bool,
    link_du: bool,
    mark_mwu_alpino: bool,
    all_warnings: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            concat_mwu: true,
            link_du: true,
            mark_mwu_alpino: false,
            all_warnings: false,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        ConvertOptions::default()
    }

    /// Concatenate multi-word units into single tokens.
    pub fn concat_mwu(mut self, concat_mwu: bool) -> Self {
        self.concat_mwu = concat_mwu;
        self
    }

    /// Find heads in discourse units.
    pub fn link_du(mut self, link_du: bool) -> Self {
        self.link_du = link_du;
        self
    }

    /// Mark concatenated multi-word units as `[_@mwu_..._]`.
    pub fn mark_mwu_alpino(mut self, mark_mwu_alpino: bool) -> Self {
        self.mark_mwu_alpino = mark_mwu_alpino;
        self
    }

    /// Warn about every head fallback.
    pub fn all_warnings(mut self, all_warnings: bool) -> Self {
        self.all_warnings = all_warnings;
        self
    }

    pub fn get_concat_mwu(&self) -> bool {
        self.concat_mwu
    }

    pub fn get_link_du(&self) -> bool {
        self.link_du
    }

    pub fn get_mark_mwu_alpino(&self) -> bool {
        self.mark_mwu_alpino
    }

    pub fn get_all_warnings(&self) -> bool {
        self.all_warnings
    }
}

/// Converter from Alpino trees to dependency graphs.
///
/// The converter applies the following steps to a tree:
///
/// 1. Whitespace and traces are removed.
/// 2. Multi-word units are concatenated (optional).
/// 3. Every phrase is replaced by its head.
/// 4. Punctuation is attached to the preceding token.
///
/// The result is a `Sentence` with one token per word of the sentence.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Converter { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert an `alpino_ds` XML fragment.
    pub fn convert(&self, xml: &str) -> Result<Sentence, ConversionError> {
        self.convert_tree(AlpinoTree::from_xml(xml)?)
    }

    /// Convert a tree.
    pub fn convert_tree(&self, mut tree: AlpinoTree) -> Result<Sentence, ConversionError> {
        Pruner::new().transform(&mut tree)?;

        if self.options.concat_mwu {
            MwuCollapser::new()
                .mark_alpino(self.options.mark_mwu_alpino)
                .transform(&mut tree)?;
        }

        HeadPromoter::new()
            .link_du(self.options.link_du)
            .all_warnings(self.options.all_warnings)
            .transform(&mut tree)?;

        let index = TokenIndex::build(&tree)?;
        reconcile_tokens(&mut tree, &index)?;
        PunctuationReattacher::new().reattach(&mut tree, &index)?;

        to_sentence(&tree, &index)
    }
}

/// Construct a dependency graph from a promoted tree.
///
/// Token `i` of the sentence is the word at position `i - 1` of the tree.
/// Its head is the token of its parent, or the root when its relation is
/// `--`. A daughter of the top node with another relation is an error.
pub fn to_sentence(tree: &AlpinoTree, index: &TokenIndex) -> Result<Sentence, ConversionError> {
    let tokens = tree.tokens();

    if let Some((&position, _)) = index.iter().find(|&(&position, _)| position >= tokens.len()) {
        return Err(ConversionError::TokenAlignment {
            position,
            reason: format!("the sentence has only {} tokens", tokens.len()),
        });
    }

    let mut sentence = Sentence::new();
    let mut nodes = Vec::with_capacity(tokens.len());
    for (position, form) in tokens.iter().enumerate() {
        let node = index.lookup(position)?;
        nodes.push(node);

        let mut token = Token::new(form.as_str());
        token.set_lemma(tree[node].lemma());
        token.set_pos(tree[node].pos());
        sentence.push(token);
    }

    for (position, &node) in nodes.iter().enumerate() {
        let dependent = position + 1;

        let triple = match tree[node].rel() {
            None | Some(ROOT_RELATION) => DepTriple::new(0, Some(GRAPH_ROOT_RELATION), dependent),
            Some(rel) => {
                let parent = tree.parent(node).ok_or_else(|| ConversionError::TokenAlignment {
                    position,
                    reason: format!("{} is not attached to the tree", tree[node]),
                })?;

                if parent == tree.top() {
                    return Err(ConversionError::TokenAlignment {
                        position,
                        reason: format!("{} is attached to the top node as {:?}", tree[node], rel),
                    });
                }

                let head = tree[parent].begin() + 1;
                if head > tokens.len() {
                    return Err(ConversionError::TokenAlignment {
                        position,
                        reason: format!("head {} is outside the sentence", head),
                    });
                }

                DepTriple::new(head, Some(rel), dependent)
            }
        };

        sentence.dep_graph_mut().add_deprel(triple)?;
    }

    Ok(sentence)
}
