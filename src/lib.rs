#![warn(missing_docs)]

//!
//! A crate that induces C4.5 decision trees.
//!
//! Given a table of discrete tokens whose last column is the class label,
//! [`DecisionTree`] recursively splits the rows on the attribute
//! with the greatest gain ratio
//! (information gain normalized by the split information)
//! until every leaf is pure, no attribute is left,
//! or no attribute has a positive gain ratio.
//!
//! ```no_run
//! use c45::{DecisionTreeBuilder, TableReader};
//!
//! let table = TableReader::default()
//!     .file("data.txt")
//!     .read()
//!     .unwrap();
//! let tree = DecisionTreeBuilder::new(&table).build();
//! tree.print_tree();
//! tree.to_dot_file("data.dot").unwrap();
//! ```

/// Named constants of the induction and rendering.
pub mod constants;
/// Defines [`C45Error`].
pub mod errors;
/// Defines [`Table`] and [`TableReader`].
pub mod sample;
/// Defines [`DecisionTree`] and its builder.
pub mod decision_tree;


pub use errors::C45Error;

pub use sample::{Table, TableReader};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    Node,
};
