use anyhow::{Context, Result};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{load_config, SpreadRankConfig, MAX_PRECISION};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::input::{read_labels, InputSource};
use crate::io::output::{create_writer, OutputFormat, ScoreReport};
use crate::scoring::ScoreBreakdown;

/// Fully resolved settings for one `spreadrank` run.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub source: InputSource,
    pub format: OutputFormat,
    pub precision: usize,
    pub formatting: FormattingConfig,
    pub verbosity: u8,
}

impl ScoreConfig {
    /// Merge CLI flags over file configuration.
    ///
    /// `stdin_is_terminal` decides between the prompt and reading piped
    /// input when no source flag is given.
    pub fn from_cli(cli: Cli, file_config: &SpreadRankConfig, stdin_is_terminal: bool) -> Self {
        let output = &file_config.output;
        let formatting = if cli.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env_with(output.color)
        };

        Self {
            source: InputSource::resolve(cli.items, cli.file, cli.stdin, stdin_is_terminal),
            format: cli.format.unwrap_or(output.format),
            precision: cli
                .precision
                .unwrap_or(output.precision)
                .min(MAX_PRECISION),
            formatting,
            verbosity: cli.verbosity,
        }
    }
}

/// Load configuration for `cli`, honouring an explicit `--config` path.
pub fn resolve_config(cli: Cli) -> Result<ScoreConfig> {
    let explicit: Option<PathBuf> = cli.config.clone();
    let file_config = load_config(explicit.as_deref())?;
    let stdin_is_terminal = std::io::stdin().is_terminal();
    Ok(ScoreConfig::from_cli(cli, &file_config, stdin_is_terminal))
}

/// Read labels, score them and write the report.
///
/// Returns the computed breakdown so callers can inspect what was printed.
pub fn handle_score<R, P, W>(
    config: &ScoreConfig,
    stdin: R,
    prompt: P,
    out: W,
) -> Result<ScoreBreakdown>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let labels = read_labels(&config.source, stdin, prompt)
        .with_context(|| format!("Could not read labels ({:?} input)", config.source.kind()))?;

    let breakdown = ScoreBreakdown::from_items(&labels);
    log::info!(
        "Scored {} labels ({} distinct): {}",
        breakdown.total_items,
        breakdown.distinct_labels,
        breakdown.score
    );

    let report = ScoreReport {
        source: config.source.kind(),
        breakdown,
    };
    let mut writer = create_writer(
        config.format,
        out,
        config.formatting,
        config.precision,
        config.verbosity,
    );
    writer.write_report(&report)?;

    Ok(report.breakdown)
}

/// Plain terminal defaults, handy for embedding and tests.
pub fn default_score_config(source: InputSource) -> ScoreConfig {
    ScoreConfig {
        source,
        format: OutputFormat::Terminal,
        precision: crate::config::default_precision(),
        formatting: FormattingConfig::new(ColorMode::Never),
        verbosity: 0,
    }
}
