use std::sync::Arc;

use sb_core::{Error, Result, SummarizationModel};

use crate::{Config, DEFAULT_MODEL};

pub mod dummy;
pub mod huggingface;
#[cfg(feature = "ollama")]
pub mod langchain;

/// Build the backend named in `config`, defaulting to the offline dummy model.
pub async fn create_model(config: Option<Config>) -> Result<Arc<dyn SummarizationModel>> {
    let config = config.unwrap_or_default();
    let name = config
        .model_name
        .clone()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    match name.to_lowercase().as_str() {
        "dummy" => Ok(Arc::new(dummy::DummyModel::new())),
        "huggingface" | "hf" => Ok(Arc::new(huggingface::HuggingFaceModel::new(&config)?)),
        #[cfg(feature = "ollama")]
        "ollama" => Ok(Arc::new(langchain::LangChainModel::new(&config).await?)),
        #[cfg(not(feature = "ollama"))]
        "ollama" => Err(Error::Config(
            "the ollama backend requires building with the `ollama` feature".to_string(),
        )),
        other => Err(Error::Config(format!(
            "unknown model '{}'; available models: dummy, huggingface, ollama",
            other
        ))),
    }
}
