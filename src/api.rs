//! HTTP handlers for the comparison API.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::lexicon;
use crate::ml::MlBackend;
use crate::model::{AnalysisResult, SampleReview};
use crate::samples::SAMPLE_REVIEWS;

/// Shared application state.
pub struct AppState {
    pub ml: Arc<dyn MlBackend>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Review text to classify.
    pub text: String,
}

/// Both verdicts for one input text.
///
/// `lexicon` is always present. `ml` is null with `mlError` set when the
/// inference call fails; the deterministic result is never affected.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub id: Uuid,
    pub raw_text: String,
    pub analyzed_at: DateTime<Utc>,
    pub lexicon: AnalysisResult,
    pub ml: Option<AnalysisResult>,
    pub ml_error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    /// Whether a Gemini API key is configured for the ML pipeline.
    pub ml_configured: bool,
}

/// Run both pipelines on one text.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Comparison of both pipelines", body = ComparisonResponse),
        (status = 400, description = "Empty input text", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ComparisonResponse>, (StatusCode, Json<ErrorResponse>)> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Text must not be empty".to_string(),
            }),
        ));
    }

    let lexicon_result = lexicon::analyze(text);

    // ML failures are reported alongside the lexicon verdict, never instead of it.
    let (ml, ml_error) = match state.ml.classify(text).await {
        Ok(result) => (Some(result), None),
        Err(e) => {
            eprintln!("⚠️ [ML] Classification failed: {e:#}");
            (None, Some(format!("ML analysis failed: {e}")))
        }
    };

    Ok(Json(ComparisonResponse {
        id: Uuid::new_v4(),
        raw_text: text.to_string(),
        analyzed_at: Utc::now(),
        lexicon: lexicon_result,
        ml,
        ml_error,
    }))
}

/// Run only the deterministic lexicon scorer.
#[utoipa::path(
    post,
    path = "/analyze/lexicon",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Lexicon verdict", body = AnalysisResult)
    ),
    tag = "analysis"
)]
pub async fn analyze_lexicon(Json(req): Json<AnalyzeRequest>) -> Json<AnalysisResult> {
    Json(lexicon::analyze(&req.text))
}

/// List the bundled sample reviews.
#[utoipa::path(
    get,
    path = "/samples",
    responses(
        (status = 200, description = "Bundled sample reviews", body = [SampleReview])
    ),
    tag = "samples"
)]
pub async fn list_samples() -> Json<Vec<SampleReview>> {
    Json(SAMPLE_REVIEWS.clone())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    let ml_configured = std::env::var("GEMINI_API_KEY")
        .map(|k| !k.is_empty())
        .unwrap_or(false);
    Json(HealthResponse {
        status: "ok".to_string(),
        ml_configured,
    })
}
