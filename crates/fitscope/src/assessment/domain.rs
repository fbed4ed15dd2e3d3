use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for interactive assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The answer a respondent gave to a single question.
///
/// Likert statements carry the 1..=5 agreement scale; choice questions carry
/// the selected option verbatim. Untagged so JSON numbers and strings map
/// without an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Scale(u8),
    Choice(String),
}

/// Snapshot of answers keyed by question id with replace-by-key semantics.
///
/// Modeled as an explicit map rather than an append-only log so a re-answered
/// question can never earn duplicate credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    entries: BTreeMap<QuestionId, ResponseValue>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous answer to the same question.
    pub fn record(&mut self, id: QuestionId, value: ResponseValue) -> Option<ResponseValue> {
        self.entries.insert(id, value)
    }

    pub fn get(&self, id: &QuestionId) -> Option<&ResponseValue> {
        self.entries.get(id)
    }

    /// Numeric likert answer, if one was given and it sits on the 1..=5 scale.
    ///
    /// Choice answers and out-of-range values degrade to `None` so malformed
    /// input earns zero credit instead of distorting a section score.
    pub fn scale(&self, id: &QuestionId) -> Option<u8> {
        match self.entries.get(id) {
            Some(ResponseValue::Scale(value)) if (1..=5).contains(value) => Some(*value),
            _ => None,
        }
    }

    /// Selected option text, if the answer was a choice.
    pub fn choice(&self, id: &QuestionId) -> Option<&str> {
        match self.entries.get(id) {
            Some(ResponseValue::Choice(option)) => Some(option.as_str()),
            _ => None,
        }
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &ResponseValue)> {
        self.entries.iter()
    }
}

impl FromIterator<(QuestionId, ResponseValue)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, ResponseValue)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (id, value) in iter {
            set.record(id, value);
        }
        set
    }
}

/// The six aptitude dimensions scored independently and averaged for the
/// composite section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::Ability => "ability",
            WiscarDimension::RealWorld => "real_world",
        }
    }
}

/// Per-dimension aptitude scores, each on the 0..=100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub fn set(&mut self, dimension: WiscarDimension, score: u8) {
        match dimension {
            WiscarDimension::Will => self.will = score,
            WiscarDimension::Interest => self.interest = score,
            WiscarDimension::Skill => self.skill = score,
            WiscarDimension::Cognitive => self.cognitive = score,
            WiscarDimension::Ability => self.ability = score,
            WiscarDimension::RealWorld => self.real_world = score,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (WiscarDimension, u8)> + '_ {
        WiscarDimension::ALL
            .into_iter()
            .map(|dimension| (dimension, self.get(dimension)))
    }

    /// Arithmetic mean of the six dimensions, kept unrounded so the overall
    /// weighting never compounds rounding error.
    pub fn mean(&self) -> f64 {
        let total: u32 = WiscarDimension::ALL
            .into_iter()
            .map(|dimension| self.get(dimension) as u32)
            .sum();
        total as f64 / WiscarDimension::ALL.len() as f64
    }

    /// Composite dimension average rounded to the reported integer scale.
    pub fn composite(&self) -> u8 {
        self.mean().round() as u8
    }
}

/// One reported section: name, 0..=100 score, and the interpretation picked
/// from that section's ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub name: String,
    pub score: u8,
    pub max_score: u8,
    pub interpretation: String,
}

impl SectionScore {
    pub(crate) fn new(name: &str, score: u8, interpretation: &str) -> Self {
        Self {
            name: name.to_string(),
            score,
            max_score: 100,
            interpretation: interpretation.to_string(),
        }
    }
}

/// Terminal three-way classification of overall fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Yes => "yes",
            Recommendation::Maybe => "maybe",
            Recommendation::No => "no",
        }
    }
}

/// Complete career-fit report derived from one response snapshot.
///
/// A pure value: derived fresh on every scoring call, never stored with an
/// identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub confidence: u8,
    pub sections: Vec<SectionScore>,
    pub wiscar: WiscarScores,
    pub next_steps: Vec<String>,
    pub career_paths: Vec<String>,
}

/// Lifecycle of an interactive assessment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    Completed,
}

impl SessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
        }
    }
}
