//! Questionnaire catalog, scoring engine, and assessment session
//! orchestration.
//!
//! The scoring engine is deliberately pure: it takes an immutable catalog and
//! a snapshot of responses and produces a report, with no I/O and no shared
//! state. Sessions, storage, and HTTP delivery wrap around it without leaking
//! into it.

pub mod catalog;
pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogError, Question, QuestionCatalog, QuestionKind, SectionCategory, LIKERT_OPTIONS,
};
pub use domain::{
    AssessmentReport, QuestionId, Recommendation, ResponseSet, ResponseValue, SectionScore,
    SessionId, SessionStatus, WiscarDimension, WiscarScores,
};
pub use import::{CsvResponseImporter, ResponseImportError};
pub use repository::{
    RepositoryError, SessionProgress, SessionRecord, SessionRepository, SessionView,
};
pub use router::assessment_router;
pub use scoring::{classify, narrative, Classification, Narrative, ScoringEngine, SectionBreakdown};
pub use service::{AssessmentService, AssessmentServiceError};
