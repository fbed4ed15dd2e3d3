use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::catalog::QuestionCatalog;
use super::domain::{AssessmentReport, QuestionId, ResponseSet, ResponseValue, SessionId, SessionStatus};
use super::repository::{RepositoryError, SessionRecord, SessionRepository};
use super::scoring::ScoringEngine;

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

/// Service composing the question catalog, session repository, and scoring
/// engine.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

impl<R> AssessmentService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalog: QuestionCatalog) -> Self {
        let engine = Arc::new(ScoringEngine::new(Arc::new(catalog)));
        Self { repository, engine }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        self.engine.catalog()
    }

    /// Open a new session with an empty response set.
    pub fn start(&self) -> Result<SessionRecord, AssessmentServiceError> {
        let record = SessionRecord {
            session_id: next_session_id(),
            responses: ResponseSet::new(),
            status: SessionStatus::InProgress,
            started_at: Utc::now(),
            completed_at: None,
            report: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Record one answer, replacing any earlier answer to the same question.
    ///
    /// The scoring engine itself tolerates unknown ids, but at the intake
    /// boundary they are rejected so a typo surfaces while the respondent is
    /// still present.
    pub fn record_response(
        &self,
        session_id: &SessionId,
        question_id: QuestionId,
        value: ResponseValue,
    ) -> Result<SessionRecord, AssessmentServiceError> {
        let mut record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;

        if record.status == SessionStatus::Completed {
            return Err(AssessmentServiceError::SessionCompleted(session_id.clone()));
        }

        if !self.engine.catalog().contains(&question_id) {
            return Err(AssessmentServiceError::UnknownQuestion(question_id));
        }

        record.responses.record(question_id, value);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Score the session's snapshot, persist the report, and mark the session
    /// completed. Partial snapshots are allowed; unanswered questions depress
    /// the affected sections per the scoring formulas.
    pub fn finalize(
        &self,
        session_id: &SessionId,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let mut record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;

        let report = self.engine.report(&record.responses);

        record.status = SessionStatus::Completed;
        record.completed_at = Some(Utc::now());
        record.report = Some(report.clone());
        self.repository.update(record)?;

        info!(
            session = %session_id,
            overall = report.overall_score,
            recommendation = report.recommendation.label(),
            "assessment finalized"
        );

        Ok(report)
    }

    /// Fetch a session and current status for API responses.
    pub fn get(&self, session_id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// One-shot scoring of an external response snapshot, bypassing session
    /// state entirely.
    pub fn score_snapshot(&self, responses: &ResponseSet) -> AssessmentReport {
        self.engine.report(responses)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("question '{0}' is not part of the catalog")]
    UnknownQuestion(QuestionId),
    #[error("session '{0}' is already completed")]
    SessionCompleted(SessionId),
}
