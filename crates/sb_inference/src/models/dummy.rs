use async_trait::async_trait;
use sb_core::{Error, Result, SummarizationModel};
use std::fmt;

/// Offline backend that keeps the leading `max_length` words.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummarizationModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, text: &str, max_length: i64) -> Result<String> {
        if max_length <= 0 {
            return Err(Error::Inference(format!(
                "max_length must be positive, got {}",
                max_length
            )));
        }
        let words: Vec<&str> = text
            .split_whitespace()
            .take(max_length as usize)
            .collect();
        Ok(words.join(" "))
    }
}
