use std::collections::BTreeMap;

use super::common::catalog;
use crate::assessment::catalog::{
    CatalogError, Question, QuestionCatalog, SectionCategory, LIKERT_OPTIONS,
};
use crate::assessment::domain::{QuestionId, WiscarDimension};

fn key(entries: &[(&str, &str)]) -> BTreeMap<QuestionId, String> {
    entries
        .iter()
        .map(|(id, answer)| (QuestionId::new(*id), answer.to_string()))
        .collect()
}

#[test]
fn standard_catalog_has_the_expected_shape() {
    let catalog = catalog();

    assert_eq!(catalog.len(), 27);
    assert_eq!(catalog.section(SectionCategory::Psychometric).count(), 10);
    assert_eq!(catalog.section(SectionCategory::Technical).count(), 5);
    assert_eq!(catalog.section(SectionCategory::Wiscar).count(), 12);
    for dimension in WiscarDimension::ALL {
        assert_eq!(catalog.dimension(dimension).count(), 2, "{dimension:?}");
    }
    assert_eq!(LIKERT_OPTIONS.len(), 5);
}

#[test]
fn standard_catalog_keys_every_technical_question() {
    let catalog = catalog();

    for question in catalog.section(SectionCategory::Technical) {
        let answer = catalog
            .correct_answer(&question.id)
            .expect("every technical question has a key entry");
        assert!(question.options.iter().any(|option| option == answer));
    }
    assert_eq!(catalog.correct_answer(&QuestionId::new("t5")), Some("40 days"));
    assert_eq!(catalog.correct_answer(&QuestionId::new("p1")), None);
}

#[test]
fn duplicate_ids_are_rejected() {
    let questions = vec![
        Question::likert("q1", "First statement.", SectionCategory::Psychometric),
        Question::likert("q1", "Second statement.", SectionCategory::Psychometric),
    ];

    match QuestionCatalog::new(questions, BTreeMap::new()) {
        Err(CatalogError::DuplicateId(id)) => assert_eq!(id, QuestionId::new("q1")),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn likert_questions_must_not_carry_options() {
    let mut question = Question::likert("q1", "A statement.", SectionCategory::Psychometric);
    question.options = vec!["Yes".to_string(), "No".to_string()];

    match QuestionCatalog::new(vec![question], BTreeMap::new()) {
        Err(CatalogError::LikertWithOptions(id)) => assert_eq!(id, QuestionId::new("q1")),
        other => panic!("expected likert option error, got {other:?}"),
    }
}

#[test]
fn choice_questions_need_at_least_two_options() {
    let question = Question::multiple_choice(
        "q1",
        "Pick one.",
        SectionCategory::Technical,
        &["Only option"],
    );

    match QuestionCatalog::new(vec![question], key(&[("q1", "Only option")])) {
        Err(CatalogError::TooFewOptions(id)) => assert_eq!(id, QuestionId::new("q1")),
        other => panic!("expected option count error, got {other:?}"),
    }
}

#[test]
fn wiscar_questions_need_a_dimension() {
    let mut question = Question::wiscar("q1", "A statement.", WiscarDimension::Will);
    question.subcategory = None;

    match QuestionCatalog::new(vec![question], BTreeMap::new()) {
        Err(CatalogError::MissingDimension(id)) => assert_eq!(id, QuestionId::new("q1")),
        other => panic!("expected missing dimension error, got {other:?}"),
    }
}

#[test]
fn technical_questions_without_key_entries_fail_at_construction() {
    let question = Question::multiple_choice(
        "q1",
        "Pick one.",
        SectionCategory::Technical,
        &["A", "B"],
    );

    match QuestionCatalog::new(vec![question], BTreeMap::new()) {
        Err(CatalogError::MissingAnswerKey(id)) => assert_eq!(id, QuestionId::new("q1")),
        other => panic!("expected missing key error, got {other:?}"),
    }
}

#[test]
fn key_answers_must_be_listed_options() {
    let question = Question::multiple_choice(
        "q1",
        "Pick one.",
        SectionCategory::Technical,
        &["A", "B"],
    );

    match QuestionCatalog::new(vec![question], key(&[("q1", "C")])) {
        Err(CatalogError::AnswerNotAnOption { id, answer }) => {
            assert_eq!(id, QuestionId::new("q1"));
            assert_eq!(answer, "C");
        }
        other => panic!("expected answer mismatch error, got {other:?}"),
    }
}

#[test]
fn orphan_key_entries_are_rejected() {
    let question = Question::likert("q1", "A statement.", SectionCategory::Psychometric);

    match QuestionCatalog::new(vec![question], key(&[("ghost", "A")])) {
        Err(CatalogError::OrphanAnswerKey(id)) => assert_eq!(id, QuestionId::new("ghost")),
        other => panic!("expected orphan key error, got {other:?}"),
    }
}

#[test]
fn empty_catalog_is_valid() {
    let catalog = QuestionCatalog::new(Vec::new(), BTreeMap::new()).expect("empty catalog");
    assert!(catalog.is_empty());
    assert!(!catalog.contains(&QuestionId::new("p1")));
}
