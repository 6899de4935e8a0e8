use std::time::Duration;

pub mod models;

pub const DEFAULT_MODEL: &str = "dummy";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend name: `dummy`, `huggingface` or `ollama`.
    pub model_name: Option<String>,
    pub model_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: None,
            model_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use sb_core::{Error, Result, SummarizationModel};
}

pub use models::create_model;
