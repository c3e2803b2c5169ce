//! Bundled sample reviews for the dashboard's quick-sample buttons.

use once_cell::sync::Lazy;

use crate::model::{ReviewSource, SampleReview, Sentiment};

pub static SAMPLE_REVIEWS: Lazy<Vec<SampleReview>> = Lazy::new(|| {
    vec![
        SampleReview {
            id: "1".to_string(),
            source: ReviewSource::Amazon,
            text: "This product changed my life. The packaging was eco-friendly and the \
                   build quality is superb. Highly recommended for anyone looking for \
                   reliability."
                .to_string(),
            ground_truth: Sentiment::Positive,
        },
        SampleReview {
            id: "2".to_string(),
            source: ReviewSource::Imdb,
            text: "The pacing was sluggish and the plot holes were big enough to drive a \
                   truck through. I expected more from this director. A total waste of time."
                .to_string(),
            ground_truth: Sentiment::Negative,
        },
        SampleReview {
            id: "3".to_string(),
            source: ReviewSource::Amazon,
            text: "It arrived broken. The customer service was unresponsive for weeks. \
                   Avoid this seller at all costs!"
                .to_string(),
            ground_truth: Sentiment::Negative,
        },
        SampleReview {
            id: "4".to_string(),
            source: ReviewSource::Imdb,
            text: "An absolute masterpiece. The cinematography was breathtaking and the \
                   lead actor deserves an Oscar for this performance."
                .to_string(),
            ground_truth: Sentiment::Positive,
        },
    ]
});
