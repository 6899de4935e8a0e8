use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use sb_core::{Language, SummaryRequest, SummaryResult};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// The ratio the caller asked for, as a whole percentage. This is not
    /// the achieved `summary_length / original_length`.
    pub compression_ratio: String,
    pub original_length: usize,
    pub summary_length: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub language: Language,
    pub metrics: SummaryMetrics,
}

impl SummaryResponse {
    pub fn from_result(result: SummaryResult, requested_ratio: f64) -> Self {
        Self {
            summary: result.summary,
            language: result.language,
            metrics: SummaryMetrics {
                compression_ratio: format_percent(requested_ratio),
                original_length: result.original_length,
                summary_length: result.summary_length,
            },
        }
    }
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let result = state.engine.summarize(&request.text, request.ratio).await?;
    tracing::info!(
        "Summarized {} chars of {} text into {} chars",
        result.original_length,
        result.language,
        result.summary_length
    );
    Ok(Json(SummaryResponse::from_result(result, request.ratio)))
}
