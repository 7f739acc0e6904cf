use crate::Table;
use crate::constants::ROOT_VALUE;
use super::dtree::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use c45::{DecisionTreeBuilder, Table};
///
/// let table = Table::new(vec![
///     vec!["a", "yes"],
///     vec!["a", "yes"],
///     vec!["b", "no"],
///     vec!["b", "no"],
/// ]).unwrap();
/// let tree = DecisionTreeBuilder::new(&table)
///     .parallel(true)
///     .build();
/// assert_eq!(tree.depth(), 1);
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    table: &'a Table,
    root_value: String,
    parallel: bool,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// root_value: ROOT_VALUE == "root",
    /// parallel: false,
    /// ```
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            root_value: ROOT_VALUE.to_string(),
            parallel: false,
        }
    }


    /// Build sibling sub-trees on the rayon thread pool.
    /// The resulting tree is the same as the sequential one.
    #[inline]
    pub fn parallel(mut self, flag: bool) -> Self {
        self.parallel = flag;
        self
    }


    /// Set the `value` carried by the root node.
    #[inline]
    pub fn root_value<S>(mut self, value: S) -> Self
        where S: Into<String>
    {
        self.root_value = value.into();
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<'a> {
        DecisionTree::new(self.table, &self.root_value, self.parallel)
    }
}
