use anyhow::anyhow;
use async_trait::async_trait;
use sb_core::{Error, Result, SummarizationModel};
use std::fmt;
use std::sync::Arc;
use url::Url;

use langchain_rust::language_models::llm::LLM;
use langchain_rust::llm::client::GenerationOptions;
use langchain_rust::llm::ollama::client::{Ollama, OllamaClient};

use crate::Config;

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/gemma3:12b";
const DEFAULT_OLLAMA_MODEL: &str = "gemma3:12b";

#[derive(Debug, Clone, PartialEq)]
pub struct OllamaEndpoint {
    pub host: String,
    pub port: u16,
    pub model_name: String,
}

impl OllamaEndpoint {
    /// Parses `scheme://host:port/model`; the path names the model.
    pub fn parse(model_url: Option<&str>) -> Result<Self> {
        let raw = model_url.unwrap_or(DEFAULT_OLLAMA_URL);
        let url = Url::parse(raw)
            .map_err(|e| Error::Config(format!("invalid ollama url '{}': {}", raw, e)))?;
        let model_name = url.path().trim_start_matches('/').to_string();
        Ok(Self {
            host: format!("{}://{}", url.scheme(), url.host_str().unwrap_or("localhost")),
            port: url.port().unwrap_or(11434),
            model_name: if model_name.is_empty() {
                DEFAULT_OLLAMA_MODEL.to_string()
            } else {
                model_name
            },
        })
    }
}

/// Prompts a local Ollama model through langchain-rust.
pub struct LangChainModel {
    ollama: Ollama,
    endpoint: OllamaEndpoint,
}

impl fmt::Debug for LangChainModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LangChainModel")
            .field("ollama", &"<Ollama>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl LangChainModel {
    pub async fn new(config: &Config) -> Result<Self> {
        let endpoint = OllamaEndpoint::parse(config.model_url.as_deref())?;
        let client = Arc::new(OllamaClient::new(endpoint.host.clone(), endpoint.port));
        let ollama = Ollama::new(
            client,
            endpoint.model_name.clone(),
            Some(GenerationOptions::default()),
        );

        if let Err(e) = ollama.invoke("ping").await {
            return Err(Error::External(anyhow!(
                "Ollama is not available at {}:{}: {}. Please ensure Ollama is running and the model '{}' is installed.",
                endpoint.host,
                endpoint.port,
                e,
                endpoint.model_name
            )));
        }
        tracing::info!("Connected to Ollama model {}", endpoint.model_name);

        Ok(Self { ollama, endpoint })
    }
}

#[async_trait]
impl SummarizationModel for LangChainModel {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn summarize(&self, text: &str, max_length: i64) -> Result<String> {
        if max_length <= 0 {
            return Err(Error::Inference(format!(
                "max_length must be positive, got {}",
                max_length
            )));
        }
        let prompt = format!(
            "Summarize the following text in at most {} words. Reply with the summary only.\n\n{}",
            max_length, text
        );
        let response = self
            .ollama
            .invoke(&prompt)
            .await
            .map_err(|e| Error::External(anyhow!("Failed to generate summary: {}", e)))?;
        Ok(response.trim().to_string())
    }
}
