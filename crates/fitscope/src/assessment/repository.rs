use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::{AssessmentReport, ResponseSet, SessionId, SessionStatus};

/// Repository record for one interactive assessment session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub responses: ResponseSet,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub report: Option<AssessmentReport>,
}

impl SessionRecord {
    /// Completion progress against the catalog, mirroring the questionnaire
    /// progress bar: answered over total, as a whole percentage.
    pub fn progress(&self, catalog: &QuestionCatalog) -> SessionProgress {
        let total = catalog.len();
        let answered = self
            .responses
            .iter()
            .filter(|(id, _)| catalog.contains(id))
            .count();
        let percent = if total == 0 {
            0
        } else {
            (answered as f64 / total as f64 * 100.0).round() as u8
        };

        SessionProgress {
            answered,
            total,
            percent,
        }
    }

    pub fn status_view(&self, catalog: &QuestionCatalog) -> SessionView {
        let progress = self.progress(catalog);
        SessionView {
            session_id: self.session_id.clone(),
            status: self.status.label(),
            answered: progress.answered,
            total_questions: progress.total,
            percent_complete: progress.percent,
            overall_score: self.report.as_ref().map(|report| report.overall_score),
        }
    }
}

/// Answered-question tally for an in-progress session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
}

/// Sanitized representation of a session's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub status: &'static str,
    pub answered: usize,
    pub total_questions: usize,
    pub percent_complete: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<u8>,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
