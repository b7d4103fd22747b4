pub mod breakdown;
pub mod spread_rank;

pub use breakdown::{breakdown, ScoreBreakdown};
pub use spread_rank::{
    count_frequencies, relative_drops, sorted_frequencies, spread_rank, spread_rank_from_counts,
};
