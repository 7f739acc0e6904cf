//! A node struct used in the decision tree algorithm.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use crate::Table;


/// One point of the induced tree.
/// A node covers a non-empty set of rows (`sample`)
/// and exclusively owns its children.
/// A node without children is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(super) sample:           Vec<usize>,
    pub(super) available:        FixedBitSet,
    pub(super) split_attribute:  Option<usize>,
    pub(super) parent_attribute: Option<usize>,
    pub(super) value:            String,
    pub(super) children:         Vec<Node>,
}


impl Node {
    /// The root covers every row and may use every attribute.
    pub(super) fn root<S>(n_rows: usize, n_attributes: usize, value: S) -> Self
        where S: Into<String>,
    {
        let mut available = FixedBitSet::with_capacity(n_attributes);
        available.insert_range(..);

        Self {
            sample: (0..n_rows).collect(),
            available,
            split_attribute: None,
            parent_attribute: None,
            value: value.into(),
            children: Vec::new(),
        }
    }


    /// A node created by splitting its parent on `parent_attribute`.
    pub(super) fn child(
        sample:           Vec<usize>,
        available:        FixedBitSet,
        parent_attribute: usize,
        value:            &str,
    ) -> Self
    {
        Self {
            sample,
            available,
            split_attribute: None,
            parent_attribute: Some(parent_attribute),
            value: value.to_string(),
            children: Vec::new(),
        }
    }


    /// Row indices covered by this node.
    #[inline]
    pub fn sample(&self) -> &[usize] {
        &self.sample[..]
    }


    /// Attributes not used on the path from the root to this node,
    /// in ascending column order.
    #[inline]
    pub fn available_attributes(&self) -> impl Iterator<Item = usize> + '_ {
        self.available.ones()
    }


    /// The attribute this node was split on. `None` at leaves.
    #[inline]
    pub fn split_attribute(&self) -> Option<usize> {
        self.split_attribute
    }


    /// The attribute the parent was split on. `None` at the root.
    #[inline]
    pub fn parent_attribute(&self) -> Option<usize> {
        self.parent_attribute
    }


    /// The attribute value that leads from the parent to this node.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }


    /// Children in the order their values were first seen.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children[..]
    }


    /// A leaf is a node that was not split.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }


    /// Returns the child reached by `value`, if any.
    pub fn child_by_value(&self, value: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.value == value)
    }


    /// The row whose record represents this node.
    /// Any member of `sample` would do; the first one is used.
    /// Returns `None` if the node covers no rows,
    /// which only happens for a node deserialized from a hand-made dump.
    #[inline]
    pub fn representative_row(&self) -> Option<usize> {
        self.sample.first().copied()
    }


    /// Returns the depth of the sub-tree rooted at this node.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.children.iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }


    /// Returns the number of nodes of this sub-tree.
    pub fn n_nodes(&self) -> usize {
        1 + self.children.iter().map(Node::n_nodes).sum::<usize>()
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        if self.is_leaf() { return 1; }
        self.children.iter().map(Node::n_leaves).sum()
    }


    /// Depth-first iterator over the leaves of this sub-tree,
    /// visiting children in order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }


    pub(super) fn to_dot_info(&self, table: &Table, id: usize)
        -> (Vec<String>, usize)
    {
        if self.is_leaf() {
            let label = self.representative_row()
                .and_then(|row| table.label(row).ok())
                .unwrap_or_default();
            let info = format!(
                "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                label = escape(label),
            );
            return (vec![info], id + 1);
        }

        let attribute = self.split_attribute
            .and_then(|a| table.name(a))
            .unwrap_or_default();
        let mut info = vec![format!(
            "\tnode_{id} [ label = \"{feat} ?\" ];\n",
            feat = escape(attribute),
        )];

        let mut next_id = id + 1;
        for child in self.children.iter() {
            let child_id = next_id;
            let (mut child_info, return_id) = child.to_dot_info(table, child_id);
            info.append(&mut child_info);

            let edge = format!(
                "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                value = escape(&child.value),
            );
            info.push(edge);
            next_id = return_id;
        }

        (info, next_id)
    }
}


/// Iterator returned by [`Node::leaves`].
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}


impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.is_leaf() { return Some(node); }
            self.stack.extend(node.children.iter().rev());
        }
        None
    }
}


fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
