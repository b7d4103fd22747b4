use serde::Serialize;
use std::hash::Hash;

use super::spread_rank::{mean, relative_drops, sorted_frequencies};

/// Every intermediate value of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total_items: usize,
    pub distinct_labels: usize,
    /// Per-label counts, most frequent first
    pub frequencies: Vec<usize>,
    /// Relative drop between each adjacent pair of `frequencies`
    pub drops: Vec<f64>,
    pub score: f64,
}

impl ScoreBreakdown {
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Eq + Hash,
    {
        let frequencies = sorted_frequencies(items);
        let total_items = frequencies.iter().sum();
        let distinct_labels = frequencies.len();

        let drops = if distinct_labels <= 1 {
            Vec::new()
        } else {
            relative_drops(&frequencies)
        };
        let score = mean(&drops);

        Self {
            total_items,
            distinct_labels,
            frequencies,
            drops,
            score,
        }
    }

    /// The label holding the largest share of items, as a fraction of all items.
    pub fn dominant_share(&self) -> f64 {
        match self.frequencies.first() {
            Some(&top) if self.total_items > 0 => top as f64 / self.total_items as f64,
            _ => 0.0,
        }
    }
}

/// Shorthand for [`ScoreBreakdown::from_items`].
pub fn breakdown<I, T>(items: I) -> ScoreBreakdown
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    ScoreBreakdown::from_items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::spread_rank;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_breakdown_of_staircase() {
        let items = ["a", "a", "a", "b", "b", "c"];
        let result = breakdown(items);

        assert_eq!(result.total_items, 6);
        assert_eq!(result.distinct_labels, 3);
        assert_eq!(result.frequencies, vec![3, 2, 1]);
        assert_eq!(result.drops.len(), 2);
        assert_eq!(result.score, spread_rank(items));
    }

    #[test]
    fn test_breakdown_of_empty_input() {
        let result = breakdown(Vec::<String>::new());
        assert_eq!(
            result,
            ScoreBreakdown {
                total_items: 0,
                distinct_labels: 0,
                frequencies: vec![],
                drops: vec![],
                score: 0.0,
            }
        );
        assert_eq!(result.dominant_share(), 0.0);
    }

    #[test]
    fn test_breakdown_single_label_has_no_drops() {
        let result = breakdown(["z", "z", "z"]);
        assert_eq!(result.frequencies, vec![3]);
        assert!(result.drops.is_empty());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.dominant_share(), 1.0);
    }

    #[test]
    fn test_dominant_share() {
        let result = breakdown(["a", "a", "a", "b"]);
        assert_eq!(result.dominant_share(), 0.75);
    }

    #[test]
    fn test_breakdown_serializes_field_names() {
        let json = serde_json::to_value(breakdown(["a", "b"])).unwrap();
        assert_eq!(json["distinct_labels"], 2);
        assert_eq!(json["frequencies"], serde_json::json!([1, 1]));
        assert_eq!(json["score"], 0.0);
    }
}
