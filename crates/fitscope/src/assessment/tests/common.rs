use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::{QuestionCatalog, QuestionKind, SectionCategory};
use crate::assessment::domain::{ResponseSet, ResponseValue, SessionId};
use crate::assessment::repository::{RepositoryError, SessionRecord, SessionRepository};
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::service::AssessmentService;

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog::standard()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(Arc::new(catalog()))
}

/// Answer every likert question in the given category with the same value.
pub(super) fn answer_likert_section(
    catalog: &QuestionCatalog,
    responses: &mut ResponseSet,
    category: SectionCategory,
    value: u8,
) {
    for question in catalog.section(category) {
        if question.kind == QuestionKind::Likert {
            responses.record(question.id.clone(), ResponseValue::Scale(value));
        }
    }
}

/// Answer the first `correct_count` technical questions with the designated
/// option and the rest with a deliberately wrong one.
pub(super) fn answer_technical(
    catalog: &QuestionCatalog,
    responses: &mut ResponseSet,
    correct_count: usize,
) {
    for (index, question) in catalog.section(SectionCategory::Technical).enumerate() {
        let correct = catalog
            .correct_answer(&question.id)
            .expect("technical question has a key entry");
        let answer = if index < correct_count {
            correct.to_string()
        } else {
            question
                .options
                .iter()
                .find(|option| option.as_str() != correct)
                .expect("question offers a wrong option")
                .clone()
        };
        responses.record(question.id.clone(), ResponseValue::Choice(answer));
    }
}

/// A snapshot that maxes out every section.
pub(super) fn perfect_responses(catalog: &QuestionCatalog) -> ResponseSet {
    let mut responses = ResponseSet::new();
    answer_likert_section(catalog, &mut responses, SectionCategory::Psychometric, 5);
    answer_likert_section(catalog, &mut responses, SectionCategory::Wiscar, 5);
    answer_technical(catalog, &mut responses, 5);
    responses
}

/// All psychometric and wiscar answers at 3, two technical answers correct:
/// psychometric 60, technical 40, every dimension 60, overall 54.
pub(super) fn middling_responses(catalog: &QuestionCatalog) -> ResponseSet {
    let mut responses = ResponseSet::new();
    answer_likert_section(catalog, &mut responses, SectionCategory::Psychometric, 3);
    answer_likert_section(catalog, &mut responses, SectionCategory::Wiscar, 3);
    answer_technical(catalog, &mut responses, 2);
    responses
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), catalog());
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
