use super::super::catalog::{Question, QuestionCatalog, SectionCategory};
use super::super::domain::{ResponseSet, SectionScore, WiscarDimension, WiscarScores};

const LIKERT_MAX: u32 = 5;

/// Summed-likert percentage: sum of answered values over (question count x 5).
///
/// Unanswered questions stay in the denominator, so abandoning a section
/// depresses its score instead of shrinking the sample. An empty question set
/// scores 0 rather than dividing by zero.
fn likert_percentage<'a>(
    questions: impl Iterator<Item = &'a Question>,
    responses: &ResponseSet,
) -> u8 {
    let mut sum: u32 = 0;
    let mut count: u32 = 0;

    for question in questions {
        count += 1;
        if let Some(value) = responses.scale(&question.id) {
            sum += value as u32;
        }
    }

    if count == 0 {
        return 0;
    }

    (sum as f64 / (count * LIKERT_MAX) as f64 * 100.0).round() as u8
}

pub(crate) fn psychometric_score(catalog: &QuestionCatalog, responses: &ResponseSet) -> SectionScore {
    let score = likert_percentage(catalog.section(SectionCategory::Psychometric), responses);
    SectionScore::new("Psychological Fit", score, psychometric_interpretation(score))
}

pub(crate) fn technical_score(catalog: &QuestionCatalog, responses: &ResponseSet) -> SectionScore {
    let mut total: u32 = 0;
    let mut correct: u32 = 0;

    for question in catalog.section(SectionCategory::Technical) {
        total += 1;
        let matches_key = match (responses.choice(&question.id), catalog.correct_answer(&question.id)) {
            (Some(answer), Some(expected)) => answer == expected,
            _ => false,
        };
        if matches_key {
            correct += 1;
        }
    }

    let score = if total == 0 {
        0
    } else {
        (correct as f64 / total as f64 * 100.0).round() as u8
    };

    SectionScore::new("Technical Readiness", score, technical_interpretation(score))
}

pub(crate) fn wiscar_scores(catalog: &QuestionCatalog, responses: &ResponseSet) -> WiscarScores {
    let mut scores = WiscarScores::default();
    for dimension in WiscarDimension::ALL {
        let score = likert_percentage(catalog.dimension(dimension), responses);
        scores.set(dimension, score);
    }
    scores
}

fn psychometric_interpretation(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent natural fit for the role"
    } else if score >= 60 {
        "Good alignment with role requirements"
    } else if score >= 40 {
        "Some compatibility, needs development"
    } else {
        "Limited natural fit, consider alternatives"
    }
}

fn technical_interpretation(score: u8) -> &'static str {
    if score >= 80 {
        "Ready to start advanced training"
    } else if score >= 60 {
        "Good foundation, some gaps to fill"
    } else if score >= 40 {
        "Beginner level, needs foundational work"
    } else {
        "Requires significant technical preparation"
    }
}

/// Interpretation ladder for the composite dimension average. Evaluated on
/// the unrounded mean, so 79.5 reads as strong even though it reports as 80.
pub(crate) fn wiscar_interpretation(mean: f64) -> &'static str {
    if mean >= 80.0 {
        "Exceptional fit across all dimensions"
    } else if mean >= 60.0 {
        "Strong overall fit with some areas for growth"
    } else if mean >= 40.0 {
        "Mixed results, focus on developing weaker areas"
    } else {
        "Significant development needed across multiple dimensions"
    }
}
