//! CLI command implementations.
//!
//! - **score**: read labels from the selected source and report their
//!   SpreadRank score

pub mod score;

pub use score::{default_score_config, handle_score, resolve_config, ScoreConfig};
