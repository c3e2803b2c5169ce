//! Simulated-ML sentiment pipeline backed by the Gemini API.
//!
//! The model is prompted to role-play a TF-IDF + Logistic Regression
//! classifier and return a structured JSON verdict. This path is inherently
//! non-deterministic; callers must treat every failure here (network, auth,
//! malformed payload) as an isolated condition that never touches the
//! lexicon result.

use axum::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::model::{AnalysisResult, Feature, Sentiment};

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// How many tokens of the input to echo back on the ML result.
/// The model is not asked for tokens; we derive them from the input.
const TOKEN_PREVIEW_LIMIT: usize = 15;

/// Abstract ML classification capability.
///
/// The HTTP layer depends on this trait so tests can swap in a stub and the
/// deterministic scorer stays fully decoupled from inference concerns.
#[async_trait]
pub trait MlBackend: Send + Sync {
    async fn classify(&self, text: &str) -> anyhow::Result<AnalysisResult>;
}

/// Gemini `generateContent` client.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiBackend {
    /// Build from environment: `GEMINI_API_KEY`, `GEMINI_MODEL`,
    /// `GEMINI_TIMEOUT_SECS`. A missing key is not fatal at startup;
    /// classification calls will fail with an explicit error instead.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout: u64 = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        if api_key.is_none() {
            println!("⚠️ GEMINI_API_KEY not set. ML analysis will be unavailable.");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl MlBackend for GeminiBackend {
    async fn classify(&self, text: &str) -> anyhow::Result<AnalysisResult> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is not configured"))?;

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, api_key
        );

        let started = Instant::now();
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "contents": [{ "parts": [{ "text": build_prompt(text) }] }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {
                        "type": "OBJECT",
                        "properties": {
                            "sentiment": {
                                "type": "STRING",
                                "enum": ["POSITIVE", "NEGATIVE", "NEUTRAL"]
                            },
                            "score": { "type": "NUMBER" },
                            "importantFeatures": {
                                "type": "ARRAY",
                                "items": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "word": { "type": "STRING" },
                                        "weight": { "type": "NUMBER" }
                                    },
                                    "required": ["word", "weight"]
                                }
                            },
                            "explanation": { "type": "STRING" }
                        },
                        "required": ["sentiment", "score", "importantFeatures", "explanation"]
                    }
                }
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini request failed with {}: {}", status, body);
        }

        let body = response.text().await?;
        tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "gemini call finished");
        parse_response(&body, text)
    }
}

/// The role-play prompt sent to the model.
fn build_prompt(text: &str) -> String {
    format!(
        "Analyze the sentiment of the following review as if you were a Machine \
         Learning model (specifically Logistic Regression with TF-IDF vectorization) \
         trained on millions of IMDb and Amazon reviews.\n\n\
         Review Text: \"{text}\"\n\n\
         Rules:\n\
         1. Identify the most important \"features\" (words/tokens) that influenced \
         the classification, providing a \"weight\" for each (positive for positive \
         influence, negative for negative).\n\
         2. Determine a final sentiment (POSITIVE or NEGATIVE).\n\
         3. Provide a score between -1.0 and 1.0.\n\
         4. Explain how a machine learning model would approach this differently \
         than a simple dictionary-based lookup (mentioning context, word \
         combinations, or specific weights)."
    )
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

/// Structured verdict the model is asked to emit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MlVerdict {
    sentiment: Sentiment,
    score: f64,
    important_features: Vec<Feature>,
    explanation: String,
}

/// Parse a raw `generateContent` response body into an analysis result.
///
/// Pure function so the wire format can be tested without network access.
fn parse_response(body: &str, original_text: &str) -> anyhow::Result<AnalysisResult> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let payload = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or_else(|| anyhow::anyhow!("Gemini response contained no candidates"))?;

    let verdict: MlVerdict = serde_json::from_str(payload)?;

    // The model is not trusted to tokenize; echo a preview of the input.
    let tokens: Vec<String> = original_text
        .to_lowercase()
        .split_whitespace()
        .take(TOKEN_PREVIEW_LIMIT)
        .map(|t| t.to_string())
        .collect();

    Ok(AnalysisResult {
        sentiment: verdict.sentiment,
        score: verdict.score,
        tokens,
        important_features: verdict.important_features,
        explanation: verdict.explanation,
    })
}
