use c45::{C45Error, DecisionTreeBuilder, Node, Table};
use c45::decision_tree::gain_ratio::{entropy, partition_by, gain_ratio};


// Scenario A: one attribute that predicts the label perfectly.
#[test]
fn perfect_single_attribute() {
    let table = Table::new(vec![
        vec!["a", "yes"],
        vec!["a", "yes"],
        vec!["b", "no"],
        vec!["b", "no"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();
    let root = tree.root();

    assert_eq!(root.value(), "root");
    assert_eq!(root.split_attribute(), Some(0));
    assert_eq!(tree.depth(), 1);
    assert_eq!(root.children().len(), 2);

    let a = &root.children()[0];
    let b = &root.children()[1];
    assert_eq!((a.value(), a.sample()), ("a", &[0, 1][..]));
    assert_eq!((b.value(), b.sample()), ("b", &[2, 3][..]));

    for leaf in root.children() {
        assert!(leaf.is_leaf());
        assert_eq!(entropy(&table, leaf.sample()), 0f64);
        assert_eq!(leaf.parent_attribute(), Some(0));
        assert_eq!(leaf.available_attributes().count(), 0);
    }
    assert_eq!(tree.leaf_label(a).unwrap(), "yes");
    assert_eq!(tree.leaf_label(b).unwrap(), "no");
}


// Scenario B: a constant label gives a single leaf.
#[test]
fn constant_label() {
    let table = Table::new(vec![
        vec!["a", "x", "yes"],
        vec!["b", "y", "yes"],
        vec!["c", "z", "yes"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();

    assert!(tree.root().is_leaf());
    assert_eq!(tree.n_nodes(), 1);
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.root().split_attribute(), None);
}


// Scenario C: the second attribute is irrelevant after the first split.
#[test]
fn irrelevant_second_attribute() {
    let table = Table::new(vec![
        vec!["sunny", "p", "no"],
        vec!["sunny", "q", "no"],
        vec!["sunny", "p", "yes"],
        vec!["sunny", "q", "yes"],
        vec!["rainy", "p", "yes"],
        vec!["rainy", "q", "yes"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();
    let root = tree.root();

    assert_eq!(root.split_attribute(), Some(0));
    assert_eq!(tree.depth(), 1);

    let sunny = root.child_by_value("sunny").unwrap();
    assert!(sunny.is_leaf());
    assert_eq!(sunny.available_attributes().collect::<Vec<_>>(), vec![1]);
    assert!(entropy(&table, sunny.sample()) > 0f64);
}


// Scenario D: a constant attribute is never selected.
#[test]
fn constant_attribute_is_skipped() {
    let table = Table::new(vec![
        vec!["x", "p", "no"],
        vec!["x", "p", "yes"],
        vec!["x", "q", "no"],
        vec!["x", "q", "yes"],
    ]).unwrap();
    let rows = [0, 1, 2, 3];
    let partition = partition_by(&table, &rows, 0);
    assert_eq!(gain_ratio(&table, &rows, &partition, 1f64), None);

    let tree = DecisionTreeBuilder::new(&table).build();
    assert!(tree.root().is_leaf());
}


// The value split keeps the label ratio 7 : 6 on both sides,
// yet the computed gain ratio is a rounding residue around 1e-16.
#[test]
fn irrelevant_attribute_with_rounding_noise() {
    let mut rows = Vec::new();
    rows.extend(std::iter::repeat(["u", "yes"]).take(28));
    rows.extend(std::iter::repeat(["u", "no"]).take(24));
    rows.extend(std::iter::repeat(["v", "yes"]).take(21));
    rows.extend(std::iter::repeat(["v", "no"]).take(18));
    let table = Table::new(rows).unwrap();

    let tree = DecisionTreeBuilder::new(&table).build();
    let root = tree.root();
    assert!(root.is_leaf(), "expected a leaf, got {} children.", root.children().len());
    assert_eq!(root.split_attribute(), None);
    assert_eq!(tree.n_nodes(), 1);
}


#[test]
fn child_order_follows_first_appearance() {
    let table = Table::new(vec![
        vec!["c", "no"],
        vec!["a", "yes"],
        vec!["b", "maybe"],
        vec!["a", "yes"],
        vec!["c", "no"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();

    let res = tree.root()
        .children()
        .iter()
        .map(Node::value)
        .collect::<Vec<_>>();
    let exp = vec!["c", "a", "b"];
    assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
}


#[test]
fn root_value_is_configurable() {
    let table = Table::new(vec![vec!["a", "yes"]]).unwrap();
    let tree = DecisionTreeBuilder::new(&table)
        .root_value("start")
        .build();
    assert_eq!(tree.root().value(), "start");
}


#[test]
fn representative_row_of_leaf() {
    let table = Table::new(vec![
        vec!["a", "yes"],
        vec!["b", "no"],
        vec!["b", "no"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();
    let b = tree.root().child_by_value("b").unwrap();

    let res = tree.representative_row(b).unwrap();
    assert!(b.sample().iter().any(|&i| table.record(i).unwrap() == res));
    assert_eq!(res.last().map(String::as_str), Some("no"));
}


#[test]
fn dot_output() {
    let table = Table::with_names(
        vec!["outlook", "play"],
        vec![
            vec!["sunny",    "no"],
            vec!["overcast", "yes"],
            vec!["rainy",    "yes"],
        ],
    ).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();
    let dot = tree.to_dot();

    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.ends_with('}'));
    assert!(dot.contains("node_0 [ label = \"outlook ?\" ];"));
    assert_eq!(dot.matches("shape = box").count(), tree.n_leaves());
    assert!(dot.contains("node_0 -- node_1 [ label = \"sunny\" ];"));
    assert!(dot.contains("node_0 -- node_3 [ label = \"rainy\" ];"));

    let path = std::env::temp_dir()
        .join(format!("c45-dot-{}.dot", std::process::id()));
    tree.to_dot_file(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(dot, written);
}


#[test]
fn json_dump() {
    let table = Table::new(vec![
        vec!["a", "yes"],
        vec!["b", "no"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();
    let json = tree.json_dump().unwrap();

    let root: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(&root, tree.root());
}


#[test]
fn save_json() {
    let table = Table::new(vec![
        vec!["a", "x", "yes"],
        vec!["b", "x", "no"],
        vec!["b", "y", "no"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();

    let path = std::env::temp_dir()
        .join(format!("c45-json-{}.json", std::process::id()));
    tree.save_json(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(tree.json_dump().unwrap(), written);
    let root: Node = serde_json::from_str(&written).unwrap();
    assert_eq!(&root, tree.root());
}


#[test]
fn node_without_rows_is_an_error() {
    let table = Table::new(vec![
        vec!["a", "yes"],
        vec!["b", "no"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();

    // A dump edited by hand: the first leaf lost its rows.
    let mut json: serde_json::Value = serde_json::from_str(
        &tree.json_dump().unwrap()
    ).unwrap();
    json["children"][0]["sample"] = serde_json::json!([]);
    let root: Node = serde_json::from_value(json).unwrap();
    let leaf = &root.children()[0];

    assert_eq!(leaf.representative_row(), None);
    let res = tree.leaf_label(leaf);
    assert!(matches!(res, Err(C45Error::EmptySample)), "got {res:?}.");
    let res = tree.representative_row(leaf);
    assert!(matches!(res, Err(C45Error::EmptySample)), "got {res:?}.");
}


#[test]
fn classify_training_rows() {
    let table = Table::new(vec![
        vec!["sunny",    "hot",  "high",   "no"],
        vec!["sunny",    "hot",  "normal", "yes"],
        vec!["overcast", "hot",  "high",   "yes"],
        vec!["rainy",    "mild", "high",   "yes"],
        vec!["rainy",    "cool", "normal", "yes"],
        vec!["rainy",    "cool", "high",   "no"],
        vec!["overcast", "cool", "normal", "yes"],
        vec!["sunny",    "mild", "high",   "no"],
    ]).unwrap();
    let tree = DecisionTreeBuilder::new(&table).build();

    // The table is consistent, so every leaf is pure.
    for i in 0..table.shape().0 {
        let record = table.record(i).unwrap();
        let res = tree.classify(record);
        let exp = table.label(i).ok();
        assert_eq!(exp, res, "row {i}: expected {exp:?}, got {res:?}.");
    }
}
