use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{QuestionId, WiscarDimension};

/// Presentation style of a catalog question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Likert,
    MultipleChoice,
    Boolean,
}

/// Top-level grouping a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionCategory {
    Psychometric,
    Technical,
    Wiscar,
}

impl SectionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SectionCategory::Psychometric => "psychometric",
            SectionCategory::Technical => "technical",
            SectionCategory::Wiscar => "wiscar",
        }
    }

    /// Heading shown above the section in the questionnaire flow.
    pub const fn title(self) -> &'static str {
        match self {
            SectionCategory::Psychometric => "Psychological Fit Assessment",
            SectionCategory::Technical => "Technical & Aptitude Assessment",
            SectionCategory::Wiscar => "WISCAR Framework Analysis",
        }
    }
}

/// Immutable catalog question record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub category: SectionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<WiscarDimension>,
}

impl Question {
    pub fn likert(id: &str, text: &str, category: SectionCategory) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.to_string(),
            kind: QuestionKind::Likert,
            options: Vec::new(),
            category,
            subcategory: None,
        }
    }

    pub fn wiscar(id: &str, text: &str, dimension: WiscarDimension) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.to_string(),
            kind: QuestionKind::Likert,
            options: Vec::new(),
            category: SectionCategory::Wiscar,
            subcategory: Some(dimension),
        }
    }

    pub fn multiple_choice(
        id: &str,
        text: &str,
        category: SectionCategory,
        options: &[&str],
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.to_string(),
            kind: QuestionKind::MultipleChoice,
            options: options.iter().map(|option| option.to_string()).collect(),
            category,
            subcategory: None,
        }
    }
}

/// Consistency errors surfaced when a catalog is assembled.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate question id '{0}'")]
    DuplicateId(QuestionId),
    #[error("likert question '{0}' must not declare options")]
    LikertWithOptions(QuestionId),
    #[error("choice question '{0}' needs at least two options")]
    TooFewOptions(QuestionId),
    #[error("wiscar question '{0}' is missing its dimension")]
    MissingDimension(QuestionId),
    #[error("technical question '{0}' has no answer key entry")]
    MissingAnswerKey(QuestionId),
    #[error("answer key for '{id}' names '{answer}', which is not one of its options")]
    AnswerNotAnOption { id: QuestionId, answer: String },
    #[error("answer key entry '{0}' does not match any technical question")]
    OrphanAnswerKey(QuestionId),
}

/// Agreement labels for the 1..=5 likert scale, weakest first.
pub const LIKERT_OPTIONS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Ordered, read-only question set plus the answer key for its technical
/// questions.
///
/// The key lives next to the catalog and is cross-checked at construction so
/// a question/key mismatch fails loudly at startup instead of silently
/// scoring every answer as wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    answer_key: BTreeMap<QuestionId, String>,
}

impl QuestionCatalog {
    pub fn new(
        questions: Vec<Question>,
        answer_key: BTreeMap<QuestionId, String>,
    ) -> Result<Self, CatalogError> {
        let mut seen = std::collections::BTreeSet::new();
        for question in &questions {
            if !seen.insert(question.id.clone()) {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }

            match question.kind {
                QuestionKind::Likert => {
                    if !question.options.is_empty() {
                        return Err(CatalogError::LikertWithOptions(question.id.clone()));
                    }
                }
                QuestionKind::MultipleChoice | QuestionKind::Boolean => {
                    if question.options.len() < 2 {
                        return Err(CatalogError::TooFewOptions(question.id.clone()));
                    }
                }
            }

            if question.category == SectionCategory::Wiscar && question.subcategory.is_none() {
                return Err(CatalogError::MissingDimension(question.id.clone()));
            }

            if question.category == SectionCategory::Technical {
                let answer = answer_key
                    .get(&question.id)
                    .ok_or_else(|| CatalogError::MissingAnswerKey(question.id.clone()))?;
                if !question.options.iter().any(|option| option == answer) {
                    return Err(CatalogError::AnswerNotAnOption {
                        id: question.id.clone(),
                        answer: answer.clone(),
                    });
                }
            }
        }

        for id in answer_key.keys() {
            let matches_technical = questions
                .iter()
                .any(|question| question.category == SectionCategory::Technical && &question.id == id);
            if !matches_technical {
                return Err(CatalogError::OrphanAnswerKey(id.clone()));
            }
        }

        Ok(Self {
            questions,
            answer_key,
        })
    }

    /// The built-in monitoring-analyst instrument.
    pub fn standard() -> Self {
        Self::new(standard_questions(), standard_answer_key())
            .expect("standard catalog is internally consistent")
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|question| &question.id == id)
    }

    pub fn section(&self, category: SectionCategory) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.category == category)
    }

    pub fn dimension(&self, dimension: WiscarDimension) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |question| {
            question.category == SectionCategory::Wiscar
                && question.subcategory == Some(dimension)
        })
    }

    /// Designated correct option for a technical question.
    pub fn correct_answer(&self, id: &QuestionId) -> Option<&str> {
        self.answer_key.get(id).map(String::as_str)
    }
}

fn standard_questions() -> Vec<Question> {
    use SectionCategory::{Psychometric, Technical};
    use WiscarDimension as Dim;

    vec![
        Question::likert(
            "p1",
            "I am interested in understanding how computer systems work under the hood.",
            Psychometric,
        ),
        Question::likert(
            "p2",
            "I enjoy reading technical documentation and troubleshooting guides.",
            Psychometric,
        ),
        Question::likert(
            "p3",
            "I find satisfaction in monitoring dashboards and analyzing system metrics.",
            Psychometric,
        ),
        Question::likert(
            "p4",
            "I enjoy solving technical puzzles and identifying patterns.",
            Psychometric,
        ),
        Question::likert(
            "p5",
            "I remain calm and focused when systems are failing and alerts are firing.",
            Psychometric,
        ),
        Question::likert(
            "p6",
            "I pay close attention to details and notice when things are slightly off.",
            Psychometric,
        ),
        Question::likert(
            "p7",
            "I prefer structured work with clear outcomes and measurable results.",
            Psychometric,
        ),
        Question::likert(
            "p8",
            "I can work effectively during on-call rotations and irregular hours.",
            Psychometric,
        ),
        Question::likert(
            "p9",
            "I would pursue this role even without external pressure or high salary.",
            Psychometric,
        ),
        Question::likert(
            "p10",
            "I am motivated by preventing problems before they impact users.",
            Psychometric,
        ),
        Question::multiple_choice(
            "t1",
            "What is the primary purpose of a monitoring system?",
            Technical,
            &[
                "To replace manual testing",
                "To track system performance and detect issues proactively",
                "To store application data",
                "To manage user authentication",
            ],
        ),
        Question::multiple_choice(
            "t2",
            "Which metric would be MOST important to monitor for a web application?",
            Technical,
            &[
                "Number of code commits per day",
                "Response time and error rate",
                "Number of features deployed",
                "Team meeting frequency",
            ],
        ),
        Question::multiple_choice(
            "t3",
            "In a monitoring alert, what does \"false positive\" mean?",
            Technical,
            &[
                "The alert triggered when there was no actual problem",
                "The alert failed to trigger when there was a problem",
                "The alert was sent to the wrong person",
                "The alert contained incorrect information",
            ],
        ),
        Question::multiple_choice(
            "t4",
            "If CPU usage spikes to 95% for 10 seconds then returns to 20%, what should you do?",
            Technical,
            &[
                "Immediately restart the server",
                "Investigate the cause and monitor for patterns",
                "Ignore it since it returned to normal",
                "Scale up the infrastructure immediately",
            ],
        ),
        Question::multiple_choice(
            "t5",
            "You notice disk usage growing by 2GB daily. At this rate, when will the 100GB disk be full?",
            Technical,
            &["25 days", "40 days", "50 days", "Need more information"],
        ),
        Question::wiscar(
            "w1",
            "I can consistently pursue technical learning over weeks and months.",
            Dim::Will,
        ),
        Question::wiscar(
            "w2",
            "I have strong willpower to debug complex issues that take hours to solve.",
            Dim::Will,
        ),
        Question::wiscar(
            "w3",
            "I am genuinely curious about system performance and optimization.",
            Dim::Interest,
        ),
        Question::wiscar(
            "w4",
            "I enjoy learning about new monitoring tools and technologies.",
            Dim::Interest,
        ),
        Question::wiscar(
            "w5",
            "I have experience with command line interfaces and basic scripting.",
            Dim::Skill,
        ),
        Question::wiscar(
            "w6",
            "I can read and understand system logs and error messages.",
            Dim::Skill,
        ),
        Question::wiscar(
            "w7",
            "I can identify patterns and correlations in large datasets.",
            Dim::Cognitive,
        ),
        Question::wiscar(
            "w8",
            "I think logically about cause-and-effect relationships in systems.",
            Dim::Cognitive,
        ),
        Question::wiscar(
            "w9",
            "I reflect on my mistakes and actively work to improve my skills.",
            Dim::Ability,
        ),
        Question::wiscar(
            "w10",
            "I seek feedback and adapt my approach based on new information.",
            Dim::Ability,
        ),
        Question::wiscar(
            "w11",
            "I want to solve real-time IT issues that impact business operations.",
            Dim::RealWorld,
        ),
        Question::wiscar(
            "w12",
            "I see value in proactive monitoring versus reactive troubleshooting.",
            Dim::RealWorld,
        ),
    ]
}

fn standard_answer_key() -> BTreeMap<QuestionId, String> {
    // t5: (100GB - 20GB already used) / 2GB per day = 40 days
    [
        (
            "t1",
            "To track system performance and detect issues proactively",
        ),
        ("t2", "Response time and error rate"),
        ("t3", "The alert triggered when there was no actual problem"),
        ("t4", "Investigate the cause and monitor for patterns"),
        ("t5", "40 days"),
    ]
    .into_iter()
    .map(|(id, answer)| (QuestionId::new(id), answer.to_string()))
    .collect()
}
