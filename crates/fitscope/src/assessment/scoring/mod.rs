mod classify;
mod narrative;
mod sections;

pub use classify::{classify, Classification};
pub use narrative::{narrative, Narrative};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::{AssessmentReport, ResponseSet, SectionScore, WiscarScores};

const PSYCHOMETRIC_WEIGHT: f64 = 0.3;
const TECHNICAL_WEIGHT: f64 = 0.3;
const WISCAR_WEIGHT: f64 = 0.4;

/// Per-section results before classification and narrative lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBreakdown {
    pub psychometric: SectionScore,
    pub technical: SectionScore,
    pub wiscar: WiscarScores,
}

impl SectionBreakdown {
    /// Weighted overall score. The WISCAR dimension mean enters the weighting
    /// unrounded; only the final combination is rounded.
    pub fn overall_score(&self) -> u8 {
        let weighted = self.psychometric.score as f64 * PSYCHOMETRIC_WEIGHT
            + self.technical.score as f64 * TECHNICAL_WEIGHT
            + self.wiscar.mean() * WISCAR_WEIGHT;
        weighted.round() as u8
    }
}

/// Stateless scorer that applies the catalog to a response snapshot.
///
/// Pure over its inputs: the same snapshot always yields the same report, and
/// no well-formed input can make it fail. Answers referencing unknown
/// question ids are ignored; value-shape mismatches earn zero credit.
pub struct ScoringEngine {
    catalog: Arc<QuestionCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Compute the three section results for a response snapshot.
    pub fn score(&self, responses: &ResponseSet) -> SectionBreakdown {
        SectionBreakdown {
            psychometric: sections::psychometric_score(&self.catalog, responses),
            technical: sections::technical_score(&self.catalog, responses),
            wiscar: sections::wiscar_scores(&self.catalog, responses),
        }
    }

    /// Full report: sections, overall score, recommendation, and narrative.
    pub fn report(&self, responses: &ResponseSet) -> AssessmentReport {
        let breakdown = self.score(responses);
        let overall_score = breakdown.overall_score();
        let classification = classify(overall_score);
        let narrative = narrative(classification.recommendation, overall_score);

        let wiscar_mean = breakdown.wiscar.mean();
        let composite = SectionScore::new(
            "WISCAR Analysis",
            breakdown.wiscar.composite(),
            sections::wiscar_interpretation(wiscar_mean),
        );

        AssessmentReport {
            overall_score,
            recommendation: classification.recommendation,
            confidence: classification.confidence,
            sections: vec![breakdown.psychometric, breakdown.technical, composite],
            wiscar: breakdown.wiscar,
            next_steps: narrative.next_steps,
            career_paths: narrative.career_paths,
        }
    }
}
