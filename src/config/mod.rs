//! Configuration loaded from `.spreadrank.toml`.
//!
//! ```toml
//! [output]
//! format = "terminal"   # or "json"
//! precision = 6
//! color = "auto"        # auto | always | never
//! ```

mod core;
mod loader;

pub use self::core::{default_precision, OutputConfig, SpreadRankConfig, MAX_PRECISION};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
