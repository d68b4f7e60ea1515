//! Conversion of Alpino XML trees to dependency graphs.

mod convert;
pub use crate::convert::{to_sentence, ConvertOptions, Converter};

mod error;
pub use crate::error::ConversionError;

pub mod head;

pub mod index;

pub mod mwu;

pub mod prune;

pub mod punct;

mod reconcile;
pub use crate::reconcile::reconcile_tokens;

pub mod tree;
