use serde::{Deserialize, Serialize};

use super::super::domain::Recommendation;

/// Overall scores above this floor still map to technical-adjacent paths on
/// the "no" branch; at or below it the suggestions widen further.
const ADJACENT_PATH_FLOOR: u8 = 30;

/// Ordered follow-up guidance attached to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub next_steps: Vec<String>,
    pub career_paths: Vec<String>,
}

/// Static lookup from recommendation (and, on the "no" branch, the overall
/// score) to the suggested next steps and candidate career paths.
pub fn narrative(recommendation: Recommendation, overall_score: u8) -> Narrative {
    Narrative {
        next_steps: to_strings(next_steps(recommendation)),
        career_paths: to_strings(career_paths(recommendation, overall_score)),
    }
}

fn next_steps(recommendation: Recommendation) -> &'static [&'static str] {
    match recommendation {
        Recommendation::Yes => &[
            "Start with OS basics and networking fundamentals",
            "Learn monitoring tools: Grafana, Prometheus, Zabbix",
            "Practice with real monitoring scenarios",
            "Build a home lab for hands-on experience",
        ],
        Recommendation::Maybe => &[
            "Complete foundational IT courses",
            "Try a beginner monitoring project",
            "Shadow a systems administrator",
            "Reassess after 3-6 months of preparation",
        ],
        Recommendation::No => &[
            "Consider alternative IT paths more aligned with your strengths",
            "If still interested, start with basic computer science concepts",
            "Explore related fields: Data Analysis, IT Support, QA",
            "Revisit the assessment after building foundational experience",
        ],
    }
}

fn career_paths(recommendation: Recommendation, overall_score: u8) -> &'static [&'static str] {
    match recommendation {
        Recommendation::Yes => &[
            "Monitoring System Analyst",
            "Site Reliability Engineer (Junior)",
            "DevOps Support Engineer",
            "NOC Engineer",
            "IT Infrastructure Analyst",
        ],
        Recommendation::Maybe => &[
            "IT Support Specialist",
            "Systems Administrator",
            "Junior DevOps Engineer",
            "Technical Support Analyst",
        ],
        Recommendation::No if overall_score > ADJACENT_PATH_FLOOR => &[
            "Data Analyst",
            "QA Engineer",
            "Technical Writer",
            "Product Support",
        ],
        Recommendation::No => &[
            "Explore non-technical roles",
            "Consider other IT fields",
            "Focus on skill development",
        ],
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
