use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Start from `base` and let the environment override it.
    pub fn from_env_with(base: ColorMode) -> Self {
        Self::new(color_from_env(base, |key| env::var(key).ok()))
    }

    /// Plain output configuration (no colors)
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }
}

/// Apply `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` on top of `base`.
pub(crate) fn color_from_env<F>(base: ColorMode, lookup: F) -> ColorMode
where
    F: Fn(&str) -> Option<String>,
{
    let mut color = base;

    // Per the no-color.org standard
    if lookup("NO_COLOR").is_some() {
        color = ColorMode::Never;
    }

    if lookup("CLICOLOR").as_deref() == Some("0") {
        color = ColorMode::Never;
    }

    if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
        color = ColorMode::Always;
    }

    color
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn info(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn info(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
