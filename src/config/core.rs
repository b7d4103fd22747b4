use serde::{Deserialize, Serialize};

use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;

/// Largest number of decimal places worth printing for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Root configuration structure for spreadrank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadRankConfig {
    /// Output rendering options
    #[serde(default)]
    pub output: OutputConfig,
}

/// How the score is rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places in terminal output (default: 6)
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Color handling for terminal output
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
            color: ColorMode::default(),
        }
    }
}

pub fn default_precision() -> usize {
    6
}
