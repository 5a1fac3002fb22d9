//! mindtrace-api - HTTP API server for the mindtrace wellbeing analyzer.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use mindtrace_core::defaults::{
    ANALYSIS_PERIOD_DAYS, BODY_LIMIT_BYTES, SAMPLE_POST_COUNT, SERVER_PORT,
};
use mindtrace_core::{AnalysisRequest, AnalysisResponse, Error, GenerationBackend};
use mindtrace_inference::{validate_batch, AnalysisService, OllamaBackend};

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// APP STATE
// =============================================================================

#[derive(Clone)]
struct AppState {
    service: Arc<AnalysisService>,
    model_name: String,
}

// =============================================================================
// CORS CONFIGURATION HELPER
// =============================================================================

/// Parse allowed origins from the comma-separated `ALLOWED_ORIGINS`
/// environment variable. Defaults to localhost dev origins when unset.
fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   RUST_LOG    - standard env filter (default: "mindtrace_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mindtrace_api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    info!(log_format = %log_format, "Logging initialized");

    // Get configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(SERVER_PORT);

    // Generation backend (Ollama); analysis still works when the backend is
    // unreachable because every generation path has a deterministic fallback.
    let backend = OllamaBackend::from_env()?;
    let model_name = backend.model_name().to_string();
    info!(model = %model_name, "Generation backend configured");

    let backend: Arc<dyn GenerationBackend> = Arc::new(backend);
    let state = AppState {
        service: Arc::new(AnalysisService::new(backend)),
        model_name,
    };

    let cors = CorsLayer::new()
        .allow_origin(parse_allowed_origins())
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/analyze-batch", post(analyze_batch))
        .route("/generate-data", post(generate_data))
        .route("/sample-data", get(sample_data))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Health check endpoint.
async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Mindtrace Wellbeing Analyzer API",
        "status": "healthy",
        "model": state.model_name,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Detailed health check.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "generation_model": state.model_name,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Analyze one dataset into the six-series response.
///
/// Rejects empty or too-small batches with 400. Any processing failure past
/// validation is recovered with the canonical fallback response rather than
/// surfaced as an error.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    info!(
        record_count = request.data_points.len(),
        "Received analysis request"
    );
    validate_batch(&request.data_points)?;
    let response = state.service.analyze_or_fallback(&request.data_points).await;
    Ok(Json(response))
}

/// Analyze multiple datasets; per-dataset failures are replaced by the
/// canonical fallback without aborting the batch.
async fn analyze_batch(
    State(state): State<AppState>,
    Json(requests): Json<Vec<AnalysisRequest>>,
) -> Json<Vec<AnalysisResponse>> {
    info!(
        dataset_count = requests.len(),
        "Received batch analysis request"
    );
    Json(state.service.analyze_batch(&requests).await)
}

#[derive(Debug, Deserialize)]
struct GenerateDataParams {
    num_posts: Option<usize>,
    analysis_period_days: Option<i64>,
}

/// Generate synthetic sample records for testing.
async fn generate_data(
    State(state): State<AppState>,
    Query(params): Query<GenerateDataParams>,
) -> Json<serde_json::Value> {
    let num_posts = params.num_posts.unwrap_or(SAMPLE_POST_COUNT);
    let period_days = params.analysis_period_days.unwrap_or(ANALYSIS_PERIOD_DAYS);
    info!(num_posts, period_days, "Generating sample data");

    let data_points = state.service.generate_sample(num_posts, period_days).await;
    Json(serde_json::json!({
        "data_points": data_points,
        "total_points": data_points.len(),
        "generated_at": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Two example records in the expected input format.
async fn sample_data() -> Json<serde_json::Value> {
    let sample = serde_json::json!([
        {
            "post_id": "post_001",
            "user_id": "user_123",
            "timestamp": "2025-01-15T10:30:00Z",
            "day_of_week": "Monday",
            "time_of_day": "morning",
            "caption_text": "Feeling overwhelmed with work today, but trying to stay positive! #work #stress #motivation",
            "hashtags": "#work #stress #motivation",
            "image_context_label": "office_desk",
            "sentiment_score": 65.0,
            "emotion_primary": "mixed",
            "emotion_confidence": 0.8,
            "topic_cluster": "work_stress",
            "text_length": 85,
            "likes_count": 12,
            "comments_count": 3,
            "shares_count": 1,
            "saved_count": 2,
            "average_comment_sentiment": 70.0,
            "engagement_score": 75.0,
            "time_spent_on_post": 45,
            "comments_read_count": 3,
            "scrolled_back": false,
            "interaction_type": "post_creation",
            "num_sessions_per_day": 8,
            "avg_session_duration": 12.5,
            "night_usage_minutes": 30,
            "label_mental_state": "stressed",
            "label_confidence": 0.85,
            "wellbeing_index": 68.0,
            "recommendation_flag": true
        },
        {
            "post_id": "post_002",
            "user_id": "user_123",
            "timestamp": "2025-01-15T18:45:00Z",
            "day_of_week": "Monday",
            "time_of_day": "evening",
            "caption_text": "Great workout session! Feeling much better now. Exercise really helps with stress relief. #fitness #wellness #selfcare",
            "hashtags": "#fitness #wellness #selfcare",
            "image_context_label": "gym",
            "sentiment_score": 85.0,
            "emotion_primary": "positive",
            "emotion_confidence": 0.9,
            "topic_cluster": "fitness_wellness",
            "text_length": 95,
            "likes_count": 25,
            "comments_count": 7,
            "shares_count": 3,
            "saved_count": 5,
            "average_comment_sentiment": 88.0,
            "engagement_score": 92.0,
            "time_spent_on_post": 120,
            "comments_read_count": 7,
            "scrolled_back": true,
            "interaction_type": "post_creation",
            "num_sessions_per_day": 8,
            "avg_session_duration": 12.5,
            "night_usage_minutes": 15,
            "label_mental_state": "positive",
            "label_confidence": 0.9,
            "wellbeing_index": 82.0,
            "recommendation_flag": false
        }
    ]);

    Json(serde_json::json!({
        "sample_data": sample,
        "description": "Sample data points in the expected input format",
        "total_points": 2,
    }))
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[derive(Debug)]
enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            Error::Validation(msg) | Error::InvalidInput(msg) => {
                ApiError::BadRequest(msg.clone())
            }
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
