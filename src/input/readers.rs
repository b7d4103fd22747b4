use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use super::InputSource;
use crate::errors::{Result, SpreadRankError};

pub const PROMPT: &str = "Enter items separated by spaces: ";

/// Split a single line into whitespace-separated labels.
pub fn parse_inline(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Read one label per line, trimming each line and skipping blank ones.
pub fn parse_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let label = line.trim();
        if !label.is_empty() {
            labels.push(label.to_string());
        }
    }
    Ok(labels)
}

/// Read labels from `source`.
///
/// `stdin` backs both the stdin and interactive modes; `prompt` receives the
/// interactive prompt text. Taking both as parameters keeps every mode
/// testable without a terminal.
pub fn read_labels<R, W>(source: &InputSource, stdin: R, prompt: W) -> Result<Vec<String>>
where
    R: BufRead,
    W: Write,
{
    let labels = match source {
        InputSource::InlineList(list) => parse_inline(list),
        InputSource::FilePath(path) => {
            let file = File::open(path).map_err(|e| SpreadRankError::io_with_path(e, path))?;
            parse_lines(BufReader::new(file)).map_err(|e| SpreadRankError::io_with_path(e, path))?
        }
        InputSource::Stdin => parse_lines(stdin).map_err(SpreadRankError::io)?,
        InputSource::InteractivePrompt => read_interactive(stdin, prompt)?,
    };

    log::debug!("Read {} labels from {:?}", labels.len(), source.kind());
    Ok(labels)
}

fn read_interactive<R: BufRead, W: Write>(mut stdin: R, mut prompt: W) -> Result<Vec<String>> {
    write!(prompt, "{}", PROMPT).map_err(SpreadRankError::io)?;
    prompt.flush().map_err(SpreadRankError::io)?;

    let mut line = String::new();
    stdin.read_line(&mut line).map_err(SpreadRankError::io)?;

    let labels = parse_inline(&line);
    if labels.is_empty() {
        return Err(SpreadRankError::EmptyInput);
    }
    Ok(labels)
}
