use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::input::SourceKind;
use crate::scoring::ScoreBreakdown;

/// Fixed prefix of the terminal score line.
pub const SCORE_LABEL: &str = "SpreadRank score:";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

/// Everything a writer needs to render one run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub source: SourceKind,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    precision: usize,
    verbosity: u8,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig, precision: usize, verbosity: u8) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
            precision,
            verbosity,
        }
    }

    fn write_breakdown(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()> {
        let precision = self.precision;
        writeln!(self.writer, "{}", self.formatter.header("Breakdown"))?;
        writeln!(self.writer, "  Items:           {}", breakdown.total_items)?;
        writeln!(self.writer, "  Distinct labels: {}", breakdown.distinct_labels)?;
        writeln!(
            self.writer,
            "  Frequencies:     {}",
            join(breakdown.frequencies.iter().map(|f| f.to_string()))
        )?;
        if !breakdown.drops.is_empty() {
            writeln!(
                self.writer,
                "  Relative drops:  {}",
                join(breakdown.drops.iter().map(|d| format!("{:.*}", precision, d)))
            )?;
        }
        writeln!(
            self.writer,
            "  {}",
            self.formatter.dim(&format!(
                "Top label share: {:.1}%",
                breakdown.dominant_share() * 100.0
            ))
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        if self.verbosity > 0 {
            self.write_breakdown(&report.breakdown)?;
        }

        let score = format!("{:.*}", self.precision, report.breakdown.score);
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.bold(SCORE_LABEL),
            self.formatter.info(&score)
        )?;
        Ok(())
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
    precision: usize,
    verbosity: u8,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(writer, formatting, precision, verbosity))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::breakdown;
    use pretty_assertions::assert_eq;

    fn report(items: &[&str]) -> ScoreReport {
        ScoreReport {
            source: SourceKind::Inline,
            breakdown: breakdown(items.iter().copied()),
        }
    }

    fn render(format: OutputFormat, verbosity: u8, report: &ScoreReport) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer =
                create_writer(format, &mut buffer, FormattingConfig::plain(), 6, verbosity);
            writer.write_report(report).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_terminal_prints_six_decimals() {
        let output = render(OutputFormat::Terminal, 0, &report(&["a", "a", "a", "b"]));
        assert_eq!(output, "SpreadRank score: 0.666667\n");
    }

    #[test]
    fn test_terminal_zero_score() {
        let output = render(OutputFormat::Terminal, 0, &report(&[]));
        assert_eq!(output, "SpreadRank score: 0.000000\n");
    }

    #[test]
    fn test_terminal_custom_precision() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain(), 2, 0)
            .write_report(&report(&["a", "a", "a", "b", "b", "c"]))
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "SpreadRank score: 0.42\n");
    }

    #[test]
    fn test_verbose_terminal_includes_breakdown() {
        let output = render(OutputFormat::Terminal, 1, &report(&["a", "a", "a", "b", "b", "c"]));
        assert!(output.contains("Frequencies:     3, 2, 1"), "got:\n{}", output);
        assert!(output.contains("Relative drops:  0.333333, 0.500000"), "got:\n{}", output);
        assert!(output.contains("Top label share: 50.0%"), "got:\n{}", output);
        assert!(output.ends_with("SpreadRank score: 0.416667\n"));
    }

    #[test]
    fn test_json_output() {
        let output = render(OutputFormat::Json, 0, &report(&["x", "x", "y"]));
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["source"], "inline");
        assert_eq!(json["total_items"], 3);
        assert_eq!(json["frequencies"], serde_json::json!([2, 1]));
        assert_eq!(json["score"], 0.5);
    }
}
