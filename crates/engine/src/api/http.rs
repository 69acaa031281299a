//! HTTP routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use storyteller_domain::DomainError;
use storyteller_shared::{GenerateStoryRequest, GenerateStoryResponse};

use crate::app::App;
use crate::use_cases::GenerationResult;

/// Message returned for every post-dispatch failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Story generation failed.";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/generate", post(generate_story))
}

async fn health() -> &'static str {
    "OK"
}

async fn generate_story(
    State(app): State<Arc<App>>,
    payload: Result<Json<GenerateStoryRequest>, JsonRejection>,
) -> Result<Json<GenerateStoryResponse>, ApiError> {
    let Json(request) = payload?;
    let inputs = request.into_creative_inputs()?;

    match app.use_cases.story.generate.execute(inputs).await {
        GenerationResult::Story(story) => Ok(Json(GenerateStoryResponse::story(story))),
        GenerationResult::Failed(_) => Err(ApiError::GenerationFailed),
    }
}

/// Build the CORS layer from a comma-separated origin list, or `*` for any.
///
/// Returns `None` when no usable origin is configured.
pub fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.map(str::trim).filter(|s| !s.is_empty())?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(cors.allow_origin(origins))
}

// =============================================================================
// Error Handling
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    /// Inputs rejected before any provider call.
    BadRequest(String),
    /// Anything after dispatch; details stay in the logs.
    GenerationFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::GenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATION_FAILED_MESSAGE.to_string(),
            ),
        };
        (status, Json(GenerateStoryResponse::error(message))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        tracing::debug!(error = %e, "Rejected generation request");
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::config::GenerationSettings;
    use crate::infrastructure::ports::{LlmError, LlmRequest, LlmResponse, MockLlmPort};

    fn router(llm: MockLlmPort) -> Router {
        let app = Arc::new(App::new(Arc::new(llm), GenerationSettings::default()));
        routes().with_state(app)
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_routes_return_ok() {
        for uri in ["/", "/api/health"] {
            let response = router(MockLlmPort::new())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&bytes[..], b"OK");
        }
    }

    #[tokio::test]
    async fn when_generation_succeeds_then_story_body() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|request: &LlmRequest| {
                request.messages[0]
                    .content
                    .starts_with("Schrijf een leuk en origineel voorleesverhaaltje in het Nederlands.")
            })
            .times(1)
            .returning(|_| Ok(LlmResponse::new("Er was eens een draak.")));

        let body = json!({
            "language": "nl",
            "listeners": [{"name": "Mila", "description": "houdt van draken"}],
            "synopsis": "Een draak leert delen",
            "style": {"spannend": 2, "grappig": 5}
        });
        let (status, json) = send(router(llm), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"story": "Er was eens een draak."}));
    }

    #[tokio::test]
    async fn when_language_is_missing_or_unknown_then_bad_request_without_provider_call() {
        for body in [json!({"synopsis": "x"}), json!({"language": "fr"})] {
            let mut llm = MockLlmPort::new();
            llm.expect_generate().times(0);

            let (status, json) = send(router(llm), post_json(body.to_string())).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(json["error"].as_str().unwrap().contains("Invalid input"));
            assert!(json.get("story").is_none());
        }
    }

    #[tokio::test]
    async fn when_slider_exceeds_maximum_then_bad_request() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(0);

        let body = json!({"language": "en", "style": {"humor": 9}});
        let (status, _) = send(router(llm), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_provider_fails_then_generic_error_body() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(1).returning(|_| {
            Err(LlmError::Provider {
                status: 401,
                body: "Incorrect API key provided".into(),
            })
        });

        let (status, json) =
            send(router(llm), post_json(json!({"language": "en"}).to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"error": GENERATION_FAILED_MESSAGE}));
    }

    #[tokio::test]
    async fn when_body_is_not_json_then_bad_request() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(0);

        let (status, json) = send(router(llm), post_json("{not json".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[test]
    fn test_cors_layer_requires_an_origin() {
        assert!(build_cors_layer(None).is_none());
        assert!(build_cors_layer(Some("  ")).is_none());
        assert!(build_cors_layer(Some(" , ")).is_none());
        assert!(build_cors_layer(Some("*")).is_some());
        assert!(build_cors_layer(Some("http://localhost:5173, https://example.org")).is_some());
    }
}
