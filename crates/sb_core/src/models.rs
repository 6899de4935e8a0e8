use async_trait::async_trait;
use std::fmt;

use crate::Result;

/// A text summarization backend.
#[async_trait]
pub trait SummarizationModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Return the single best summary of `text`, using `max_length` as an
    /// upper bound on output length. The budget is passed through as
    /// computed; backends decide what to do with a non-positive one.
    async fn summarize(&self, text: &str, max_length: i64) -> Result<String>;
}
