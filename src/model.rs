//! Shared value types for both analysis pipelines.
//!
//! Field names serialize in camelCase so the dashboard and the Gemini
//! response schema share one wire shape with the lexicon path.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Final sentiment class for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// One word that contributed to the verdict, with its influence weight.
///
/// Lexicon weights are small integers; the ML path reports fractional
/// weights, so the shared type carries f64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Feature {
    pub word: String,
    pub weight: f64,
}

/// Verdict produced by either pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Normalized score in [-1.0, 1.0].
    pub score: f64,
    /// Input tokens with stop words removed, original order, duplicates kept.
    pub tokens: Vec<String>,
    /// Contributing features sorted by descending absolute weight.
    pub important_features: Vec<Feature>,
    /// Human-readable summary of how the verdict was reached.
    pub explanation: String,
}

/// Origin of a bundled sample review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReviewSource {
    Amazon,
    #[serde(rename = "IMDb")]
    Imdb,
}

/// A canned review with a hand-labeled expected sentiment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SampleReview {
    pub id: String,
    pub source: ReviewSource,
    pub text: String,
    pub ground_truth: Sentiment,
}
