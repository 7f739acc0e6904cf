//! Information-theoretic scores used to choose a splitting attribute.
use std::collections::HashMap;

use crate::Table;
use crate::constants::{
    ENTROPY_BASE,
    GAIN_RATIO_TOLERANCE,
    INITIAL_GAIN_RATIO,
};


/// The rows of a sample grouped by the value of one attribute.
/// Values appear in the order they are first seen,
/// rows keep their order within each value.
pub type Partition<'a> = Vec<(&'a str, Vec<usize>)>;


/// The best attribute found for a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCandidate<'a> {
    /// Column index of the attribute.
    pub attribute: usize,
    /// Its gain ratio, always greater than
    /// `INITIAL_GAIN_RATIO + GAIN_RATIO_TOLERANCE`.
    pub gain_ratio: f64,
    /// The rows grouped by the attribute values.
    pub partition: Partition<'a>,
}


/// `-p log(p)` for a fraction `p` in `(0, 1]`.
#[inline(always)]
fn information(p: f64) -> f64 {
    -p * p.log(ENTROPY_BASE)
}


/// Returns the Shannon entropy (base 2)
/// of the class-label distribution over `rows`.
/// Returns `0` for an empty slice.
pub fn entropy(table: &Table, rows: &[usize]) -> f64 {
    if rows.is_empty() { return 0f64; }

    // Counts are kept in first-seen label order
    // so that the sum below is evaluated in the same order on every run.
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<usize> = Vec::new();
    for &i in rows {
        let label = table.target(i);
        match position.get(label) {
            Some(&k) => { counts[k] += 1; },
            None => {
                position.insert(label, counts.len());
                counts.push(1);
            },
        }
    }

    // A single label has no uncertainty.
    if counts.len() == 1 { return 0f64; }

    let total = rows.len() as f64;
    counts.into_iter()
        .map(|n| information(n as f64 / total))
        .sum::<f64>()
}


/// Groups `rows` by the token found in `attribute`'s column.
pub fn partition_by<'a>(table: &'a Table, rows: &[usize], attribute: usize)
    -> Partition<'a>
{
    let mut position: HashMap<&'a str, usize> = HashMap::new();
    let mut partition: Partition<'a> = Vec::new();

    for &i in rows {
        let value = table.token(i, attribute);
        match position.get(value) {
            Some(&k) => { partition[k].1.push(i); },
            None => {
                position.insert(value, partition.len());
                partition.push((value, vec![i]));
            },
        }
    }
    partition
}


/// Returns the pair `(weighted entropy, split information)`
/// of `partition` over the `rows` it was built from.
pub fn conditional_entropy(
    table: &Table,
    rows: &[usize],
    partition: &Partition<'_>,
) -> (f64, f64)
{
    let total = rows.len() as f64;

    partition.iter()
        .fold((0f64, 0f64), |(weighted, split_info), (_, part)| {
            let r = part.len() as f64 / total;
            (weighted + r * entropy(table, part), split_info + information(r))
        })
}


/// Returns the gain ratio of splitting `rows` by `partition`,
/// given the entropy of `rows`.
/// Returns `None` when the split information is zero,
/// i.e., the attribute takes one value over `rows`.
pub fn gain_ratio(
    table: &Table,
    rows: &[usize],
    partition: &Partition<'_>,
    base_entropy: f64,
) -> Option<f64>
{
    let (weighted, split_info) = conditional_entropy(table, rows, partition);
    if split_info == 0f64 { return None; }

    Some((base_entropy - weighted) / split_info)
}


/// Scans `attributes` in order and returns the attribute
/// with the strictly greatest gain ratio.
/// Ties keep the first attribute.
/// Returns `None` if no attribute has a gain ratio
/// greater than `INITIAL_GAIN_RATIO` by more than `GAIN_RATIO_TOLERANCE`.
pub fn best_split<'a, I>(
    table: &'a Table,
    rows: &[usize],
    attributes: I,
    base_entropy: f64,
) -> Option<SplitCandidate<'a>>
    where I: IntoIterator<Item = usize>,
{
    let mut best: Option<SplitCandidate<'a>> = None;
    let mut best_ratio = INITIAL_GAIN_RATIO;

    for attribute in attributes {
        let partition = partition_by(table, rows, attribute);
        let Some(ratio) = gain_ratio(table, rows, &partition, base_entropy)
        else {
            log::trace!("attribute {attribute} is constant, skipped");
            continue;
        };
        log::trace!("attribute {attribute}: gain ratio = {ratio}");

        if ratio <= INITIAL_GAIN_RATIO + GAIN_RATIO_TOLERANCE { continue; }

        if ratio > best_ratio {
            best_ratio = ratio;
            best = Some(SplitCandidate {
                attribute,
                gain_ratio: ratio,
                partition,
            });
        }
    }
    best
}
