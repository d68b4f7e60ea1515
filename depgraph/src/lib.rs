mod error;
pub use crate::error::GraphError;

pub mod graph;

pub mod token;

#[cfg(test)]
mod tests;
