use std::sync::Arc;

use crate::language::detect_language;
use crate::models::SummarizationModel;
use crate::types::{Language, SummaryResult};
use crate::{myanmar, Result};

/// Output budget for the model path: the whitespace word count scaled by
/// `ratio`, truncated toward zero. Ratios are not clamped.
pub fn length_budget(text: &str, ratio: f64) -> i64 {
    (word_count(text) as f64 * ratio) as i64
}

/// Counts words separated by Unicode whitespace or the ASCII information
/// separators U+001C..=U+001F.
pub fn word_count(text: &str) -> usize {
    text.split(|c: char| c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c))
        .filter(|w| !w.is_empty())
        .count()
}

/// Routes text to the Myanmar heuristic or to the injected model.
#[derive(Debug, Clone)]
pub struct SummaryEngine {
    model: Arc<dyn SummarizationModel>,
}

impl SummaryEngine {
    pub fn new(model: Arc<dyn SummarizationModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Summarize `text`. `ratio` only affects non-Myanmar text; model
    /// failures are returned as-is.
    pub async fn summarize(&self, text: &str, ratio: f64) -> Result<SummaryResult> {
        match detect_language(text) {
            Language::Myanmar => Ok(myanmar::summarize(text)),
            Language::English => self.summarize_with_model(text, ratio).await,
        }
    }

    async fn summarize_with_model(&self, text: &str, ratio: f64) -> Result<SummaryResult> {
        let max_length = length_budget(text, ratio);
        tracing::debug!(
            "Summarizing {} chars with {} (max_length={})",
            text.chars().count(),
            self.model.name(),
            max_length
        );
        let summary = self.model.summarize(text, max_length).await?;
        Ok(SummaryResult::new(Language::English, text, summary))
    }
}
