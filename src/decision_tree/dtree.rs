use rayon::prelude::*;

use crate::Table;
use crate::errors::C45Error;

use super::gain_ratio::{entropy, best_split};
use super::node::*;

use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;


/// A C4.5 decision tree over discrete attributes.
/// Given a [`Table`] whose last column is the class label,
/// the tree is grown by repeatedly splitting on the attribute
/// with the greatest gain ratio.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use c45::{DecisionTreeBuilder, TableReader};
///
/// let table = TableReader::default()
///     .file("/path/to/data.txt")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&table).build();
///
/// println!("depth = {}, leaves = {}", tree.depth(), tree.n_leaves());
/// tree.to_dot_file("tree.dot").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree<'a> {
    table: &'a Table,
    root:  Node,
}


impl<'a> DecisionTree<'a> {
    /// Grow a tree over the whole `table`.
    /// This method is called only via `DecisionTreeBuilder::build`.
    pub(super) fn new(table: &'a Table, root_value: &str, parallel: bool)
        -> Self
    {
        let (n_rows, _) = table.shape();
        let mut root = Node::root(n_rows, table.n_attributes(), root_value);
        grow(table, &mut root, parallel);

        let tree = Self { table, root };
        log::info!(
            "built a decision tree over {n_rows} rows: \
            {} nodes, {} leaves, depth {}",
            tree.n_nodes(),
            tree.n_leaves(),
            tree.depth(),
        );
        tree
    }


    /// The table this tree was grown from.
    #[inline]
    pub fn table(&self) -> &'a Table {
        self.table
    }


    /// The root node, covering every row.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// The length of the longest root-to-leaf path.
    /// Never exceeds the number of attributes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of nodes, the root included.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Depth-first iterator over the leaves.
    #[inline]
    pub fn leaves(&self) -> Leaves<'_> {
        self.root.leaves()
    }


    /// Returns the full record of the row representing `node`.
    pub fn representative_row(&self, node: &Node) -> Result<&'a [String], C45Error> {
        let row = node.representative_row().ok_or(C45Error::EmptySample)?;
        self.table.record(row)
    }


    /// Returns the class label of the row representing `node`.
    pub fn leaf_label(&self, node: &Node) -> Result<&'a str, C45Error> {
        let row = node.representative_row().ok_or(C45Error::EmptySample)?;
        self.table.label(row)
    }


    /// Follow `record` (attribute tokens, the label may be omitted)
    /// from the root to a leaf and return that leaf's class label.
    /// Returns `None` if the record has a value
    /// that no branch on its path was grown for.
    pub fn classify<S>(&self, record: &[S]) -> Option<&'a str>
        where S: AsRef<str>,
    {
        let mut node = &self.root;
        while let Some(attribute) = node.split_attribute() {
            let value = record.get(attribute)?.as_ref();
            node = node.child_by_value(value)?;
        }
        self.table.label(node.representative_row()?).ok()
    }


    /// Returns the tree in Graphviz DOT format.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph DecisionTree {\n");
        let info = self.root.to_dot_info(self.table, 0).0;
        info.into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push('}');
        dot
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<(), C45Error>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }


    /// Dump the node structure as a json object.
    pub fn json_dump(&self) -> Result<String, C45Error> {
        serde_json::to_string(&self.root)
            .map_err(|e| C45Error::UnableToWrite(e.to_string()))
    }


    /// Save the node structure as a json object to a file.
    pub fn save_json<P>(&self, path: P) -> Result<(), C45Error>
        where P: AsRef<Path>
    {
        let json = self.json_dump()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}


/// Returns the children of `node`, or nothing if `node` is a leaf.
/// 1. no attribute is left,
/// 2. the sample is pure,
/// 3. no attribute has a positive gain ratio.
pub(super) fn split(table: &Table, node: &Node) -> Vec<Node> {
    if node.available.count_ones(..) == 0 { return Vec::new(); }

    let base_entropy = entropy(table, &node.sample);
    if base_entropy == 0f64 { return Vec::new(); }

    let Some(best) = best_split(
        table, &node.sample, node.available_attributes(), base_entropy
    )
    else {
        return Vec::new();
    };

    log::debug!(
        "split {} rows on attribute {} (gain ratio {:.4}) into {} children",
        node.sample.len(),
        best.attribute,
        best.gain_ratio,
        best.partition.len(),
    );

    let mut available = node.available.clone();
    available.set(best.attribute, false);

    best.partition.into_iter()
        .map(|(value, rows)| {
            Node::child(rows, available.clone(), best.attribute, value)
        })
        .collect()
}


/// Split `node` and grow every child recursively.
fn grow(table: &Table, node: &mut Node, parallel: bool) {
    node.children = split(table, node);
    node.split_attribute = node.children.first()
        .and_then(Node::parent_attribute);

    if parallel {
        node.children.par_iter_mut()
            .for_each(|child| grow(table, child, parallel));
    } else {
        node.children.iter_mut()
            .for_each(|child| grow(table, child, parallel));
    }
}


impl fmt::Display for DecisionTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in super::render::text_lines(self) {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}
