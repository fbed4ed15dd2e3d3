//! Bound and determinism checks swept across systematically varied response
//! sets, including malformed ones the engine must absorb without failing.

use std::collections::BTreeMap;
use std::sync::Arc;

use fitscope::assessment::{
    QuestionCatalog, QuestionId, ResponseSet, ResponseValue, ScoringEngine, SectionCategory,
};

fn engine() -> ScoringEngine {
    ScoringEngine::new(Arc::new(QuestionCatalog::standard()))
}

fn uniform_responses(catalog: &QuestionCatalog, likert_value: u8, correct_count: usize) -> ResponseSet {
    let mut responses = ResponseSet::new();
    for question in catalog.section(SectionCategory::Psychometric) {
        responses.record(question.id.clone(), ResponseValue::Scale(likert_value));
    }
    for question in catalog.section(SectionCategory::Wiscar) {
        responses.record(question.id.clone(), ResponseValue::Scale(likert_value));
    }
    for (index, question) in catalog.section(SectionCategory::Technical).enumerate() {
        let correct = catalog
            .correct_answer(&question.id)
            .expect("technical key entry");
        let answer = if index < correct_count {
            correct.to_string()
        } else {
            // Deliberately off-catalog text, which must simply score as wrong.
            format!("not {correct}")
        };
        responses.record(question.id.clone(), ResponseValue::Choice(answer));
    }
    responses
}

#[test]
fn scores_stay_in_bounds_for_valid_and_invalid_inputs() {
    let engine = engine();
    let catalog = engine.catalog();

    // 0, 6, and 7 sit outside the likert scale and must not push any score
    // past its bounds.
    for likert_value in 0..=7u8 {
        for correct_count in 0..=5usize {
            let responses = uniform_responses(catalog, likert_value, correct_count);
            let report = engine.report(&responses);

            assert!(report.overall_score <= 100);
            assert!((60..=100).contains(&report.confidence));
            for section in &report.sections {
                assert!(section.score <= 100, "section {} out of bounds", section.name);
                assert_eq!(section.max_score, 100);
            }
            for (dimension, score) in report.wiscar.iter() {
                assert!(score <= 100, "{dimension:?} out of bounds");
            }
        }
    }
}

#[test]
fn junk_entries_never_shift_a_report() {
    let engine = engine();
    let catalog = engine.catalog();

    for likert_value in 1..=5u8 {
        let baseline = uniform_responses(catalog, likert_value, 3);
        let mut noisy = baseline.clone();
        noisy.record(QuestionId::new("ghost-1"), ResponseValue::Scale(5));
        noisy.record(
            QuestionId::new("ghost-2"),
            ResponseValue::Choice("40 days".to_string()),
        );

        assert_eq!(engine.report(&baseline), engine.report(&noisy));
    }
}

#[test]
fn independent_engines_agree_on_every_snapshot() {
    let first = engine();
    let second = engine();
    let catalog = first.catalog();

    for likert_value in 1..=5u8 {
        for correct_count in 0..=5usize {
            let responses = uniform_responses(catalog, likert_value, correct_count);
            assert_eq!(first.report(&responses), second.report(&responses));
        }
    }
}

#[test]
fn question_order_does_not_affect_scores() {
    let standard = QuestionCatalog::standard();
    let mut reversed_questions: Vec<_> = standard.questions().to_vec();
    reversed_questions.reverse();

    let answer_key: BTreeMap<QuestionId, String> = standard
        .section(SectionCategory::Technical)
        .map(|question| {
            let answer = standard
                .correct_answer(&question.id)
                .expect("technical key entry");
            (question.id.clone(), answer.to_string())
        })
        .collect();

    let reversed = QuestionCatalog::new(reversed_questions, answer_key)
        .expect("reordered catalog stays consistent");

    let by_standard = ScoringEngine::new(Arc::new(standard));
    let by_reversed = ScoringEngine::new(Arc::new(reversed));

    for likert_value in 1..=5u8 {
        let responses = uniform_responses(by_standard.catalog(), likert_value, 2);
        assert_eq!(by_standard.report(&responses), by_reversed.report(&responses));
    }
}
