mod api;
mod lexicon;
mod ml;
mod model;
mod samples;

use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::analyze,
        api::analyze_lexicon,
        api::list_samples,
        api::health
    ),
    components(
        schemas(
            api::AnalyzeRequest,
            api::ComparisonResponse,
            api::ErrorResponse,
            api::HealthResponse,
            crate::model::AnalysisResult,
            crate::model::Feature,
            crate::model::Sentiment,
            crate::model::SampleReview,
            crate::model::ReviewSource
        )
    ),
    tags(
        (name = "analysis", description = "Sentiment analysis endpoints"),
        (name = "samples", description = "Bundled sample reviews"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let ml = ml::GeminiBackend::from_env()?;
    if ml.is_configured() {
        println!("🧠 Gemini backend configured. ML analysis enabled.");
    }

    let state = Arc::new(api::AppState { ml: Arc::new(ml) });

    let app = Router::new()
        .merge(SwaggerUi::new("/sentix-swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/analyze", post(api::analyze))
        .route("/analyze/lexicon", post(api::analyze_lexicon))
        .route("/samples", get(api::list_samples))
        .route("/health", get(api::health))
        .layer(CorsLayer::permissive())
        .nest_service("/", ServeDir::new("static")) // Serve Dashboard
        .with_state(state);

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
