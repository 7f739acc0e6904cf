//! The C4.5 decision tree algorithm.

/// Defines the tree and its induction.
pub mod dtree;
/// Defines the inner representation of `DecisionTree`.
pub mod node;
/// Entropy, partition and gain ratio scoring.
pub mod gain_ratio;
pub(crate) mod builder;
mod render;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use node::{Node, Leaves};
