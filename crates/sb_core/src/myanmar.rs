use crate::types::{Language, SummaryResult};

pub const MAX_SENTENCES: usize = 3;
pub const NOTES: &str = "Basic Myanmar summarization";

const SENTENCE_DELIMITERS: [char; 4] = ['။', '၏', '?', '!'];

/// Splits on Myanmar sentence delimiters, trimming each piece and
/// dropping the empty ones.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(|c| SENTENCE_DELIMITERS.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lead-sentence summary for Myanmar text. There is no length budget on
/// this path: the first [`MAX_SENTENCES`] sentences are always kept.
pub fn summarize(text: &str) -> SummaryResult {
    let summary = split_sentences(text)
        .into_iter()
        .take(MAX_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!("Myanmar summary kept {} chars", summary.chars().count());
    SummaryResult::new(Language::Myanmar, text, summary).with_notes(NOTES)
}
