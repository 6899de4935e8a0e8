use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/summarize", post(handlers::summarize))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::handlers::{SummaryMetrics, SummaryResponse};
    pub use crate::AppState;
    pub use sb_core::{Error, Result, SummaryEngine};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use sb_core::{Error, Result, SummarizationModel, SummaryEngine};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    /// Keeps the first `max_length` words, refusing empty budgets.
    #[derive(Debug)]
    struct LeadWords;

    #[async_trait]
    impl SummarizationModel for LeadWords {
        fn name(&self) -> &str {
            "LeadWords"
        }

        async fn summarize(&self, text: &str, max_length: i64) -> Result<String> {
            if max_length <= 0 {
                return Err(Error::Inference("max_length must be positive".to_string()));
            }
            Ok(text
                .split_whitespace()
                .take(max_length as usize)
                .collect::<Vec<_>>()
                .join(" "))
        }
    }

    fn app() -> Router {
        create_app(AppState::new(SummaryEngine::new(Arc::new(LeadWords))))
    }

    async fn post_json(body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_summarize_english() {
        let (status, body) = post_json(json!({
            "text": "The quick brown fox jumps over the lazy dog.",
            "ratio": 0.5
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "summary": "The quick brown fox",
                "language": "en",
                "metrics": {
                    "compression_ratio": "50%",
                    "original_length": 44,
                    "summary_length": 19
                }
            })
        );
    }

    #[tokio::test]
    async fn test_summarize_myanmar_with_default_ratio() {
        let text = "ဒီနေ့ မိုးရွာတယ်။ ကျွန်တော် အိမ်မှာ ရှိနေတယ်။ စာအုပ် ဖတ်နေတယ်။ နောက်နေ့ အလုပ်သွားမယ်။";
        let (status, body) = post_json(json!({ "text": text })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "my");
        assert_eq!(
            body["summary"],
            "ဒီနေ့ မိုးရွာတယ် ကျွန်တော် အိမ်မှာ ရှိနေတယ် စာအုပ် ဖတ်နေတယ်"
        );
        assert_eq!(body["metrics"]["compression_ratio"], "30%");
        assert_eq!(body["metrics"]["original_length"], text.chars().count());
        // notes stay internal to the result record
        assert!(body.get("notes").is_none());
    }

    #[tokio::test]
    async fn test_summarize_backend_failure() {
        let (status, body) = post_json(json!({ "text": "" })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("max_length"));
    }

    #[tokio::test]
    async fn test_summarize_rejects_missing_text() {
        let (status, _) = post_json(json!({ "ratio": 0.3 })).await;
        assert!(status.is_client_error());
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(handlers::format_percent(0.3), "30%");
        assert_eq!(handlers::format_percent(1.0), "100%");
        assert_eq!(handlers::format_percent(0.456), "46%");
        assert_eq!(handlers::format_percent(-0.5), "-50%");
    }
}
