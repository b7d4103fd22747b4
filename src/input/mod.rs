//! Input sources for label sequences.
//!
//! The CLI accepts labels from exactly one place. That choice is resolved once
//! into an [`InputSource`] before any reading happens, so the scorer never
//! knows where its labels came from.

pub mod readers;

pub use readers::{parse_inline, parse_lines, read_labels, PROMPT};

use serde::Serialize;
use std::path::PathBuf;

/// Where labels are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Space-separated labels given directly on the command line
    InlineList(String),
    /// File with one label per line
    FilePath(PathBuf),
    /// Standard input with one label per line
    Stdin,
    /// Ask the user for a space-separated line
    InteractivePrompt,
}

/// Serializable tag for reporting which source was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Inline,
    File,
    Stdin,
    Interactive,
}

impl InputSource {
    /// Pick the source from the CLI selections.
    ///
    /// Inline wins over file, file over stdin. With none selected, piped
    /// input is read as stdin and only a terminal gets the prompt.
    pub fn resolve(
        items: Option<String>,
        file: Option<PathBuf>,
        stdin: bool,
        stdin_is_terminal: bool,
    ) -> Self {
        let source = match (items, file, stdin) {
            (Some(list), _, _) => Self::InlineList(list),
            (None, Some(path), _) => Self::FilePath(path),
            (None, None, true) => Self::Stdin,
            (None, None, false) if !stdin_is_terminal => Self::Stdin,
            (None, None, false) => Self::InteractivePrompt,
        };
        log::debug!("Resolved input source: {:?}", source.kind());
        source
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::InlineList(_) => SourceKind::Inline,
            Self::FilePath(_) => SourceKind::File,
            Self::Stdin => SourceKind::Stdin,
            Self::InteractivePrompt => SourceKind::Interactive,
        }
    }
}
