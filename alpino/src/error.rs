use depgraph::GraphError;
use thiserror::Error;

/// Errors that abandon the conversion of a single sentence.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ConversionError {
    /// The XML is not well-formed or lacks required parts.
    #[error("malformed tree: {reason}")]
    MalformedTree { reason: String },

    /// The tree does not contain a top node.
    #[error("cannot find top node")]
    MissingTopNode,

    /// Collapsing a multi-word unit shifted a token position below zero.
    #[error(
        "negative position for node {node:?} after collapsing multi-word unit {mwu:?} [{begin}, {end})"
    )]
    NegativeHead {
        mwu: String,
        begin: usize,
        end: usize,
        node: String,
    },

    /// Surface tokens and tree tokens could not be aligned.
    #[error("tokens do not align with the tree at position {position}: {reason}")]
    TokenAlignment { position: usize, reason: String },

    /// Two tree tokens start at the same position.
    #[error("more than one token at position {position}")]
    DuplicatePosition { position: usize },

    /// Error constructing the dependency graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
