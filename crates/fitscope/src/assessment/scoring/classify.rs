use serde::{Deserialize, Serialize};

use super::super::domain::Recommendation;

/// Lowest overall score that earns a "yes".
const YES_THRESHOLD: u8 = 75;
/// Lowest overall score that earns a "maybe"; everything below is a "no".
const MAYBE_THRESHOLD: u8 = 55;

const YES_CONFIDENCE_CAP: u8 = 95;
const MAYBE_CONFIDENCE_FLOOR: u8 = 60;
const NO_CONFIDENCE_FLOOR: u8 = 70;

/// Recommendation plus how firmly the thresholds support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub recommendation: Recommendation,
    pub confidence: u8,
}

/// Map an overall score onto the three-way recommendation.
///
/// Confidence grows with distance from the decision boundary: a high score
/// backs "yes" strongly, a low score backs "no" strongly, and the middle band
/// bottoms out at 60.
pub fn classify(overall_score: u8) -> Classification {
    if overall_score >= YES_THRESHOLD {
        Classification {
            recommendation: Recommendation::Yes,
            confidence: YES_CONFIDENCE_CAP.min(overall_score.saturating_add(10)),
        }
    } else if overall_score >= MAYBE_THRESHOLD {
        Classification {
            recommendation: Recommendation::Maybe,
            confidence: MAYBE_CONFIDENCE_FLOOR.max(overall_score),
        }
    } else {
        Classification {
            recommendation: Recommendation::No,
            confidence: NO_CONFIDENCE_FLOOR.max(100 - overall_score.min(100)),
        }
    }
}
