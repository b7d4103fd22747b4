//! SpreadRank: a concentration score for sequences of categorical labels.
//!
//! The score sorts per-label counts in descending order and averages the
//! relative drop between each adjacent pair. It is `0.0` for a uniform
//! distribution (or fewer than two distinct labels) and approaches `1.0` as a
//! single label dominates.
//!
//! ```
//! use spreadrank::spread_rank;
//!
//! let score = spread_rank(["a", "a", "a", "b", "b", "c"]);
//! assert!((score - 0.416_667).abs() < 1e-6);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod input;
pub mod io;
pub mod scoring;
pub mod setup;

pub use crate::errors::SpreadRankError;
pub use crate::input::InputSource;
pub use crate::scoring::{breakdown, spread_rank, spread_rank_from_counts, ScoreBreakdown};
