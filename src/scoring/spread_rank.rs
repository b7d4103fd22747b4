//! SpreadRank concentration score.
//!
//! The score is the mean relative drop between adjacent frequencies once the
//! per-label counts are sorted in descending order. A perfectly uniform
//! distribution has no drops and scores `0.0`; a distribution where one label
//! dominates every other scores close to (but never exactly) `1.0`.

use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences of each distinct label.
pub fn count_frequencies<I, T>(items: I) -> HashMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut frequencies = HashMap::new();
    for item in items {
        *frequencies.entry(item).or_insert(0) += 1;
    }
    frequencies
}

/// Per-label counts sorted from most to least frequent.
pub fn sorted_frequencies<I, T>(items: I) -> Vec<usize>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut counts: Vec<usize> = count_frequencies(items).into_values().collect();
    sort_descending(&mut counts);
    counts
}

/// Relative drop `(higher - lower) / higher` for every adjacent pair of a
/// descending frequency list. Pairs led by a zero count are skipped.
pub fn relative_drops(sorted: &[usize]) -> Vec<f64> {
    sorted
        .windows(2)
        .filter(|pair| pair[0] > 0)
        .map(|pair| (pair[0] - pair[1].min(pair[0])) as f64 / pair[0] as f64)
        .collect()
}

/// Score a list of raw counts given in any order.
///
/// Zero counts are discarded first, so the result matches [`spread_rank`] on
/// any sequence that realises the same non-zero counts.
pub fn spread_rank_from_counts(counts: &[usize]) -> f64 {
    let mut present: Vec<usize> = counts.iter().copied().filter(|&c| c > 0).collect();
    if present.len() <= 1 {
        return 0.0;
    }

    sort_descending(&mut present);
    mean(&relative_drops(&present))
}

/// Compute the SpreadRank score of a sequence of labels.
///
/// Only the multiset of counts matters: the result is invariant under
/// reordering the input and under any bijective relabeling.
///
/// # Examples
///
/// ```
/// use spreadrank::scoring::spread_rank;
///
/// assert_eq!(spread_rank(Vec::<&str>::new()), 0.0);
/// assert_eq!(spread_rank(["a", "b", "c", "d"]), 0.0);
///
/// let score = spread_rank(["a", "a", "a", "b"]);
/// assert!((score - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn spread_rank<I, T>(items: I) -> f64
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let frequencies = count_frequencies(items);
    if frequencies.len() <= 1 {
        return 0.0;
    }

    let counts: Vec<usize> = frequencies.into_values().collect();
    let score = spread_rank_from_counts(&counts);
    log::trace!("spread_rank over {} distinct labels = {}", counts.len(), score);
    score
}

pub(crate) fn sort_descending(counts: &mut [usize]) {
    // Tie order is irrelevant to the drop formula.
    counts.sort_unstable_by(|a, b| b.cmp(a));
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
