use std::io;

use thiserror::Error;

/// MALT-Tab writer error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Error in file IO.
    #[error("error writing sentence")]
    IO(#[from] io::Error),

    /// The output encoding is not known.
    #[error("unknown encoding: {label:?}")]
    UnknownEncoding { label: String },

    /// A character cannot be represented in the output encoding.
    #[error("character {character:?} cannot be encoded in {encoding}")]
    Unencodable {
        character: char,
        encoding: &'static str,
    },
}
