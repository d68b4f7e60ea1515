//! Alpino trees.

use std::fmt;
use std::ops::{Index, IndexMut};

use roxmltree::{Document, ParsingOptions};

use crate::error::ConversionError;

/// Category of the technical top node of a sentence.
pub const TOP_CATEGORY: &str = "top";

/// Relation of nodes that are attached to the root.
pub const ROOT_RELATION: &str = "--";

/// Part-of-speech tag of punctuation.
pub const PUNCTUATION_POS: &str = "punct";

const NODE_ELEMENT: &str = "node";

const SENTENCE_ELEMENT: &str = "sentence";

/// Index of a node in an `AlpinoTree`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of an Alpino tree.
///
/// Before head promotion, a node is either a phrase (it has a category
/// and children) or a terminal (it has a part-of-speech tag and a word).
/// Whitespace between elements is stored as text nodes, which carry
/// neither.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TreeNode {
    pub(crate) id: Option<String>,
    pub(crate) begin: usize,
    pub(crate) end: usize,
    pub(crate) cat: Option<String>,
    pub(crate) pos: Option<String>,
    pub(crate) rel: Option<String>,
    pub(crate) lemma: Option<String>,
    pub(crate) word: Option<String>,
    pub(crate) text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl TreeNode {
    /// Construct a phrasal node spanning `[begin, end)`.
    pub fn phrase(cat: impl Into<String>, rel: impl Into<String>, begin: usize, end: usize) -> Self {
        TreeNode {
            cat: Some(cat.into()),
            rel: Some(rel.into()),
            begin,
            end,
            ..TreeNode::default()
        }
    }

    /// Construct a terminal node for the token at `begin`.
    pub fn terminal(
        word: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        rel: impl Into<String>,
        begin: usize,
    ) -> Self {
        TreeNode {
            word: Some(word.into()),
            lemma: Some(lemma.into()),
            pos: Some(pos.into()),
            rel: Some(rel.into()),
            begin,
            end: begin + 1,
            ..TreeNode::default()
        }
    }

    /// Construct a text node.
    pub fn text(text: impl Into<String>) -> Self {
        TreeNode {
            text: Some(text.into()),
            ..TreeNode::default()
        }
    }

    /// Set the parser-assigned identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn from_element(element: roxmltree::Node) -> Result<Self, ConversionError> {
        let cat = element.attribute("cat").map(ToOwned::to_owned);
        let pos = element.attribute("pos").map(ToOwned::to_owned);

        let begin = parse_position(element, "begin")?;
        let end = parse_position(element, "end")?;
        let (begin, end) = match (begin, end) {
            (Some(begin), Some(end)) => (begin, end),
            _ if cat.is_none() && pos.is_none() => (0, 0),
            _ => {
                return Err(ConversionError::MalformedTree {
                    reason: format!(
                        "node {:?} has no span",
                        element.attribute("id").unwrap_or_default()
                    ),
                })
            }
        };

        Ok(TreeNode {
            id: element.attribute("id").map(ToOwned::to_owned),
            begin,
            end,
            cat,
            pos,
            rel: element.attribute("rel").map(ToOwned::to_owned),
            lemma: element
                .attribute("root")
                .or_else(|| element.attribute("lemma"))
                .map(ToOwned::to_owned),
            word: element.attribute("word").map(ToOwned::to_owned),
            text: None,
            parent: None,
            children: Vec::new(),
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Start of the token span.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// End of the token span (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Phrasal category, absent on terminals.
    pub fn cat(&self) -> Option<&str> {
        self.cat.as_deref()
    }

    /// Part-of-speech tag, absent on phrases.
    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    /// Dependency relation to the parent.
    pub fn rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    /// Surface word, present on terminals.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_punctuation(&self) -> bool {
        self.pos() == Some(PUNCTUATION_POS)
    }

    /// Returns `true` for text nodes that only contain whitespace.
    pub fn is_whitespace_text(&self) -> bool {
        self.text
            .as_ref()
            .map(|text| text.trim().is_empty())
            .unwrap_or(false)
    }

    /// Returns `true` for nodes without category and part of speech,
    /// such as traces.
    pub fn is_empty(&self) -> bool {
        self.cat.is_none() && self.pos.is_none()
    }

    pub(crate) fn set_rel(&mut self, rel: impl Into<String>) {
        self.rel = Some(rel.into());
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<node begin=\"{}\" end=\"{}\"", self.begin, self.end)?;

        let attrs = [
            ("cat", &self.cat),
            ("id", &self.id),
            ("pos", &self.pos),
            ("rel", &self.rel),
            ("root", &self.lemma),
            ("word", &self.word),
        ];
        for (name, value) in attrs.iter() {
            if let Some(value) = value {
                write!(f, " {}={:?}", name, value)?;
            }
        }

        write!(f, ">")
    }
}

fn parse_position(element: roxmltree::Node, name: &str) -> Result<Option<usize>, ConversionError> {
    element
        .attribute(name)
        .map(|value| {
            value
                .parse::<usize>()
                .map_err(|_| ConversionError::MalformedTree {
                    reason: format!("cannot parse {} as position: {:?}", name, value),
                })
        })
        .transpose()
}

/// A tree transformation.
pub trait TreeTransform {
    /// Transform the tree in place.
    ///
    /// # Errors
    ///
    /// An error indicates that the sentence cannot be converted. The
    /// tree is left in a partially transformed state.
    fn transform(&self, tree: &mut AlpinoTree) -> Result<(), ConversionError>;
}

/// An Alpino dependency tree together with the tokens of its sentence.
///
/// The nodes are stored in an arena and addressed by `NodeId`. Removing
/// a node from the tree only unlinks it from its parent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AlpinoTree {
    nodes: Vec<TreeNode>,
    top: NodeId,
    tokens: Vec<String>,
}

impl AlpinoTree {
    /// Construct a tree consisting of the given top node.
    pub fn new(top: TreeNode, tokens: Vec<String>) -> Self {
        AlpinoTree {
            nodes: vec![top],
            top: NodeId(0),
            tokens,
        }
    }

    /// Read a tree from an `alpino_ds` XML fragment.
    ///
    /// The top node is the first `node` element below the document
    /// element, the tokens are the whitespace-separated words of the
    /// `sentence` element.
    pub fn from_xml(xml: &str) -> Result<Self, ConversionError> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let doc = Document::parse_with_options(xml, options).map_err(|err| {
            ConversionError::MalformedTree {
                reason: err.to_string(),
            }
        })?;
        let root = doc.root_element();

        let top_element = root
            .children()
            .find(|child| child.has_tag_name(NODE_ELEMENT))
            .ok_or(ConversionError::MissingTopNode)?;

        let sentence = root
            .descendants()
            .find(|node| node.has_tag_name(SENTENCE_ELEMENT))
            .ok_or_else(|| ConversionError::MalformedTree {
                reason: "sentence element is missing".to_owned(),
            })?;
        let tokens = sentence
            .text()
            .unwrap_or_default()
            .split_whitespace()
            .map(ToOwned::to_owned)
            .collect();

        let mut tree = AlpinoTree::new(TreeNode::from_element(top_element)?, tokens);
        let top = tree.top();
        tree.add_elements(top, top_element)?;

        Ok(tree)
    }

    fn add_elements(
        &mut self,
        parent: NodeId,
        element: roxmltree::Node,
    ) -> Result<(), ConversionError> {
        for child in element.children() {
            if child.has_tag_name(NODE_ELEMENT) {
                let id = self.add_child(parent, TreeNode::from_element(child)?);
                self.add_elements(id, child)?;
            } else if child.is_text() {
                self.add_child(parent, TreeNode::text(child.text().unwrap_or_default()));
            }
        }

        Ok(())
    }

    /// Get the top node.
    pub fn top(&self) -> NodeId {
        self.top
    }

    /// Get the tokens of the sentence.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut Vec<String> {
        &mut self.tokens
    }

    /// Add `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, mut node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Get the children of `node`.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Get the parent of `node`, `None` for the top node and for
    /// detached nodes.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Unlink `node` from its parent.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&child| child != node);
        }
    }

    /// Move `node` to the end of the children of `parent`.
    pub fn append(&mut self, parent: NodeId, node: NodeId) {
        self.detach(node);
        self.nodes[node.0].parent = Some(parent);
        self.nodes[parent.0].children.push(node);
    }

    /// Returns `true` if `ancestor` dominates `node` (reflexively).
    pub fn dominates(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }

        false
    }

    /// Get `node` and its descendants in document order.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut descendants = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            descendants.push(id);
            stack.extend(self.children(id).iter().rev());
        }

        descendants
    }
}

impl Index<NodeId> for AlpinoTree {
    type Output = TreeNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for AlpinoTree {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}
