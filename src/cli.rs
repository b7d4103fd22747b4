use clap::{ArgGroup, Parser};
use std::path::PathBuf;

pub use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "spreadrank")]
#[command(about = "Concentration score for a list of categorical labels", long_about = None)]
#[command(version)]
#[command(group(
    ArgGroup::new("source")
        .args(["items", "file", "stdin"])
        .multiple(false)
))]
pub struct Cli {
    /// Space-separated list of labels, e.g. "a a b c"
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    pub items: Option<String>,

    /// Read labels from a file, one per line (blank lines are skipped)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read labels from standard input, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Output format (defaults to the config file, then terminal)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places in terminal output (default: 6)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Configuration file (defaults to the nearest .spreadrank.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show the score breakdown
    /// -vv: Debug logging
    /// -vvv: Trace logging
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
