//! Lexicon-based sentiment scorer.
//!
//! A single-pass dictionary scan: lowercase, strip punctuation, tokenize,
//! sum per-word weights from a fixed AFINN-style table, clamp to [-1, 1].
//! Deterministic and total over any string input — no I/O, no failure modes.
//! The counterpart ML pipeline lives in `ml.rs`; this module never touches it.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::model::{AnalysisResult, Feature, Sentiment};

/// Raw weight sums are divided by this before clamping.
const SCORE_DIVISOR: f64 = 10.0;

/// Classification band: scores in [-0.1, 0.1] are NEUTRAL.
/// Comparisons are strict, so exactly ±0.1 stays NEUTRAL.
const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;

// Simplified AFINN-165 style lexicon. Keys are lowercase, weights -5..=5.
// Matching is exact per token, so "sluggish" does not hit "slug".
static LEXICON: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    vec![
        ("amazing", 4),
        ("awesome", 4),
        ("excellent", 3),
        ("good", 2),
        ("great", 3),
        ("love", 3),
        ("best", 3),
        ("superb", 4),
        ("wonderful", 4),
        ("fantastic", 4),
        ("masterpiece", 5),
        ("recommended", 2),
        ("reliable", 2),
        ("positive", 2),
        ("nice", 2),
        ("happy", 3),
        ("brilliant", 4),
        ("quality", 1),
        ("bad", -3),
        ("terrible", -4),
        ("awful", -4),
        ("worst", -5),
        ("horrible", -4),
        ("hate", -3),
        ("waste", -3),
        ("broken", -3),
        ("poor", -2),
        ("disappointing", -2),
        ("avoid", -3),
        ("useless", -3),
        ("boring", -2),
        ("slow", -1),
        ("slug", -1),
        ("hole", -1),
        ("failure", -3),
        ("brokenly", -4),
        ("unresponsive", -2),
        ("expensive", -1),
        ("cheap", -1),
        ("flaw", -2),
    ]
    .into_iter()
    .collect()
});

// Stop words are removed from the *reported* token list only. They never
// participate in scoring (and are never lexicon keys), so filtering cannot
// change the verdict.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "should", "now",
    ]
    .into_iter()
    .collect()
});

// Strips everything outside word characters and whitespace. Naive about
// non-Latin scripts; kept as-is for parity with the original normalization.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Score a piece of text against the bundled lexicon.
///
/// Total over any input: empty, punctuation-only, and unicode strings all
/// produce a well-formed NEUTRAL-leaning result rather than an error.
pub fn analyze(text: &str) -> AnalysisResult {
    let lower = text.to_lowercase();
    let clean = NON_WORD.replace_all(&lower, "");
    let tokens: Vec<&str> = clean.split_whitespace().collect();

    // Reported tokens exclude stop words; scoring below uses the full stream.
    let reported: Vec<String> = tokens
        .iter()
        .filter(|t| !STOP_WORDS.contains(**t))
        .map(|t| t.to_string())
        .collect();

    let mut sum: i32 = 0;
    let mut features: Vec<Feature> = Vec::new();
    for token in &tokens {
        if let Some(&weight) = LEXICON.get(*token) {
            sum += weight;
            // One entry per occurrence; repeated words are counted repeatedly.
            features.push(Feature {
                word: token.to_string(),
                weight: weight as f64,
            });
        }
    }

    let score = (sum as f64 / SCORE_DIVISOR).clamp(-1.0, 1.0);

    let sentiment = if score > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    // Stable sort: equal magnitudes keep their scan order.
    features.sort_by(|a, b| b.weight.abs().total_cmp(&a.weight.abs()));

    let explanation = format!(
        "Lexicon analysis identified {} emotive keywords. Total sentiment sum: {}. \
         This approach relies purely on a pre-defined dictionary and doesn't \
         understand context or word order.",
        features.len(),
        sum
    );

    AnalysisResult {
        sentiment,
        score,
        tokens: reported,
        important_features: features,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_review() {
        let result = analyze("This product is great and I love it");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!((result.score - 0.6).abs() < 1e-9);
        let words: Vec<&str> = result
            .important_features
            .iter()
            .map(|f| f.word.as_str())
            .collect();
        assert_eq!(words, vec!["great", "love"]);
        assert!(result.tokens.contains(&"great".to_string()));
        assert!(result.tokens.contains(&"love".to_string()));
    }

    #[test]
    fn negative_review() {
        let result = analyze("It arrived broken and the service was terrible");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!((result.score - (-0.7)).abs() < 1e-9);
        // Ranked by magnitude: terrible (-4) before broken (-3).
        assert_eq!(result.important_features[0].word, "terrible");
        assert_eq!(result.important_features[1].word, "broken");
    }

    #[test]
    fn no_lexicon_matches() {
        let result = analyze("The box was brown");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.score, 0.0);
        assert!(result.important_features.is_empty());
        assert_eq!(result.tokens, vec!["box", "brown"]);
    }

    #[test]
    fn empty_input() {
        let result = analyze("");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.score, 0.0);
        assert!(result.tokens.is_empty());
        assert!(result.important_features.is_empty());
    }

    #[test]
    fn punctuation_only_input() {
        let result = analyze("?!... --- !!!");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.score, 0.0);
        assert!(result.tokens.is_empty());
    }

    #[test]
    fn score_clamps_to_one() {
        let text = "amazing ".repeat(10);
        let result = analyze(&text);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.important_features.len(), 10);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let text = "worst ".repeat(10);
        let result = analyze(&text);
        assert_eq!(result.score, -1.0);
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn threshold_boundaries_stay_neutral() {
        // "quality" weighs +1 -> score exactly 0.1; strict > keeps NEUTRAL.
        let result = analyze("quality");
        assert_eq!(result.score, 0.1);
        assert_eq!(result.sentiment, Sentiment::Neutral);

        // "slow" weighs -1 -> score exactly -0.1; strict < keeps NEUTRAL.
        let result = analyze("slow");
        assert_eq!(result.score, -0.1);
        assert_eq!(result.sentiment, Sentiment::Neutral);

        // One step past the band flips the class.
        assert_eq!(analyze("good").sentiment, Sentiment::Positive);
        assert_eq!(analyze("poor").sentiment, Sentiment::Negative);
    }

    #[test]
    fn repeated_words_are_not_deduplicated() {
        let result = analyze("amazing amazing");
        assert_eq!(result.important_features.len(), 2);
        assert!((result.score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn punctuation_does_not_block_matches() {
        let result = analyze("Great!!! Simply great.");
        assert!((result.score - 0.6).abs() < 1e-9);
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn stop_words_removed_from_tokens_but_not_from_scoring() {
        let with_stops = analyze("it was a great movie and i loved the plot");
        assert!(!with_stops.tokens.contains(&"the".to_string()));
        assert!(!with_stops.tokens.contains(&"and".to_string()));

        // Dropping stop words from the input leaves score and features alone.
        let without_stops = analyze("great movie loved plot");
        assert_eq!(with_stops.score, without_stops.score);
        assert_eq!(with_stops.important_features, without_stops.important_features);
    }

    #[test]
    fn ranking_is_monotonic_by_magnitude() {
        let result = analyze("quality was good but the plot hole was terrible and boring");
        for pair in result.important_features.windows(2) {
            assert!(pair[0].weight.abs() >= pair[1].weight.abs());
        }
    }

    #[test]
    fn equal_magnitudes_keep_scan_order() {
        // "love" and "best" both weigh 3; the sort must not swap them.
        let result = analyze("love is best");
        let words: Vec<&str> = result
            .important_features
            .iter()
            .map(|f| f.word.as_str())
            .collect();
        assert_eq!(words, vec!["love", "best"]);
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "An excellent product with one terrible flaw";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn score_always_in_range() {
        for text in [
            "",
            "amazing ",
            &"worst horrible awful ".repeat(50),
            "日本語のテキスト",
            "mixed 好き amazing テスト",
        ] {
            let score = analyze(text).score;
            assert!((-1.0..=1.0).contains(&score), "score {score} out of range");
        }
    }
}
