//! Plain-text rendering of a `DecisionTree`.
//! Each node is one line, indented by its depth.
//!
//! ```text
//! root -> outlook ?
//!   outlook = sunny -> humidity ?
//!     humidity = high: no (3 rows)
//!     humidity = normal: yes (2 rows)
//!   outlook = overcast: yes (4 rows)
//! ```
use colored::Colorize;

use crate::Table;
use crate::constants::PRINT_WIDTH;
use super::dtree::DecisionTree;
use super::node::Node;


const INDENT: &str = "  ";


/// One rendered node.
pub(super) struct TextLine {
    pub(super) depth:    usize,
    pub(super) edge:     String,
    pub(super) decision: Option<String>,
    pub(super) leaf:     Option<(String, usize)>,
    pub(super) text:     String,
}


/// Depth-first, children in order.
pub(super) fn text_lines(tree: &DecisionTree<'_>) -> Vec<TextLine> {
    let mut lines = Vec::with_capacity(tree.n_nodes());
    collect(tree.table(), tree.root(), 0, &mut lines);
    lines
}


fn collect(table: &Table, node: &Node, depth: usize, lines: &mut Vec<TextLine>) {
    let column_name = |column: Option<usize>| {
        column.and_then(|c| table.name(c))
            .unwrap_or_default()
            .to_string()
    };

    let edge = match node.parent_attribute() {
        Some(_) => format!(
            "{} = {}", column_name(node.parent_attribute()), node.value()
        ),
        None => node.value().to_string(),
    };

    let (decision, leaf) = if node.is_leaf() {
        let label = node.representative_row()
            .and_then(|row| table.label(row).ok())
            .unwrap_or_default()
            .to_string();
        (None, Some((label, node.sample().len())))
    } else {
        (Some(column_name(node.split_attribute())), None)
    };

    let mut text = INDENT.repeat(depth);
    text.push_str(&edge);
    if let Some(attribute) = decision.as_ref() {
        text.push_str(&format!(" -> {attribute} ?"));
    }
    if let Some((label, n_rows)) = leaf.as_ref() {
        text.push_str(&format!(": {label} ({n_rows} rows)"));
    }

    lines.push(TextLine { depth, edge, decision, leaf, text, });

    for child in node.children() {
        collect(table, child, depth + 1, lines);
    }
}


impl DecisionTree<'_> {
    /// Print the tree to stdout with colors.
    pub fn print_tree(&self) {
        let width = PRINT_WIDTH;
        println!("{}", "-".repeat(width));
        println!(
            "{} {: >5} {} {: >5} {} {: >5}",
            "NODES".bold().red(),
            self.n_nodes(),
            "LEAVES".bold().green(),
            self.n_leaves(),
            "DEPTH".bold().blue(),
            self.depth(),
        );
        println!("{}", "-".repeat(width));

        for line in text_lines(self) {
            let mut out = format!("{}{}", INDENT.repeat(line.depth), line.edge);
            if let Some(attribute) = line.decision {
                out.push_str(&format!(" -> {} ?", attribute.bold().blue()));
            }
            if let Some((label, n_rows)) = line.leaf {
                out.push_str(
                    &format!(": {} ({n_rows} rows)", label.bold().green())
                );
            }
            println!("{out}");
        }
        println!("{}", "-".repeat(width));
    }
}
