//! Writer for sentences in the MALT-Tab dependency format.

mod display;
pub use crate::display::{TabSentence, TableOptions};

mod encoding;
pub use crate::encoding::OutputEncoding;

mod error;
pub use crate::error::Error;

pub mod io;

#[cfg(test)]
mod tests;
