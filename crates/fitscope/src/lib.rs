//! Career-fit assessment engine.
//!
//! Converts a questionnaire response snapshot into a structured report: an
//! overall score, a yes/maybe/no recommendation with confidence, per-section
//! sub-scores, and the six-dimension WISCAR aptitude breakdown.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
