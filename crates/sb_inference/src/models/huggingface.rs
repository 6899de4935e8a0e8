use async_trait::async_trait;
use reqwest::Client;
use sb_core::{Error, Result, SummarizationModel};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::Config;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL_ID: &str = "facebook/bart-large-cnn";

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: Parameters,
}

#[derive(Serialize)]
struct Parameters {
    max_length: i64,
}

#[derive(Deserialize)]
struct Candidate {
    summary_text: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Summarization pipeline served over the Hugging Face inference API.
pub struct HuggingFaceModel {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HuggingFaceModel {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = endpoint_from(config.model_url.as_deref())?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolves the request URL. A full URL is used verbatim; a bare model id
/// such as `sshleifer/distilbart-cnn-12-6` is mounted under the default
/// inference host.
fn endpoint_from(model_url: Option<&str>) -> Result<Url> {
    let target = model_url.unwrap_or(DEFAULT_MODEL_ID);
    if target.starts_with("http://") || target.starts_with("https://") {
        return Url::parse(target)
            .map_err(|e| Error::Config(format!("invalid model url '{}': {}", target, e)));
    }
    let url = format!("{}/models/{}", DEFAULT_BASE_URL, target.trim_matches('/'));
    Url::parse(&url).map_err(|e| Error::Config(format!("invalid model id '{}': {}", target, e)))
}

#[async_trait]
impl SummarizationModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, text: &str, max_length: i64) -> Result<String> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: Parameters { max_length },
        };

        let mut builder = self.client.post(self.endpoint.clone()).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            tracing::warn!("Inference backend returned {}: {}", status, message);
            return Err(Error::Inference(format!("backend returned {}: {}", status, message)));
        }

        let candidates: Vec<Candidate> = serde_json::from_str(&body)?;
        candidates
            .into_iter()
            .next()
            .map(|c| c.summary_text)
            .ok_or_else(|| Error::Inference("backend returned no summary".to_string()))
    }
}
