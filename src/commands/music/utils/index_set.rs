//! Merges literal and range-derived indices into one removal plan.

use std::collections::BTreeSet;

/// A set of distinct queue positions, iterated in ascending order.
pub type IndexSet = BTreeSet<usize>;

/// Collects every index named by `tokens` (literal integers only, anything else is dropped)
/// together with the `expanded` range indices, and returns them distinct and strictly
/// descending.
///
/// Removing from the highest position down keeps every position still pending valid, since
/// `remove_at` only shifts the items after the removed one.
pub fn removal_order<S, I>(tokens: &[S], expanded: I) -> Vec<usize>
where
    S: AsRef<str>,
    I: IntoIterator<Item = usize>,
{
    let indices: IndexSet = tokens
        .iter()
        .filter_map(|token| token.as_ref().parse::<usize>().ok())
        .chain(expanded)
        .collect();

    indices.into_iter().rev().collect()
}

/// Renders an index set ascending and comma-separated, e.g. `1,4,5`.
pub fn join_indices(indices: &IndexSet) -> String {
    indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
