use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratio applied when a request does not carry one.
pub const DEFAULT_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "my")]
    Myanmar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Myanmar => "my",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
    #[serde(default = "default_ratio")]
    pub ratio: f64,
}

fn default_ratio() -> f64 {
    DEFAULT_RATIO
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub language: Language,
    pub summary: String,
    /// Character count of the input text.
    pub original_length: usize,
    /// Character count of the summary.
    pub summary_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SummaryResult {
    pub fn new(language: Language, text: &str, summary: String) -> Self {
        Self {
            language,
            original_length: text.chars().count(),
            summary_length: summary.chars().count(),
            summary,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
