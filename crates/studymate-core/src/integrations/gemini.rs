//! Mocked generative-AI text service.
//!
//! Stands in for a hosted model behind the [`TextService`] contract.
//! Without an API key the features report themselves disabled instead of
//! failing; with one, summaries and classifications are produced by a
//! deterministic heuristic so behavior is reproducible.

use super::traits::{QuestionClassification, TextService};

const SUMMARY_DISABLED: &str = "API Key not configured. Summary feature is disabled.";
const CHECKER_DISABLED: &str = "API Key not configured. Quick Checker feature is disabled.";

#[derive(Debug, Clone, Default)]
pub struct MockTextService {
    api_key: Option<String>,
}

impl MockTextService {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Read the credential from `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("GEMINI_API_KEY").ok())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    fn detect_subject(question: &str) -> (&'static str, &'static str) {
        let lower = question.to_ascii_lowercase();
        let physics = ["velocity", "force", "charge", "momentum", "projectile", "lens"];
        let chemistry = ["mole", "bond", "acid", "reaction", "electron", "equilibrium"];
        let maths = ["integral", "derivative", "matrix", "probability", "equation", "limit"];

        if physics.iter().any(|kw| lower.contains(kw)) {
            ("Physics", "Mechanics")
        } else if chemistry.iter().any(|kw| lower.contains(kw)) {
            ("Chemistry", "Physical Chemistry")
        } else if maths.iter().any(|kw| lower.contains(kw)) {
            ("Mathematics", "Calculus")
        } else {
            ("Mathematics", "General")
        }
    }
}

impl TextService for MockTextService {
    fn summarize(&self, text: &str) -> String {
        if !self.is_configured() {
            return SUMMARY_DISABLED.to_string();
        }
        // Two-line summary: first two sentences, clipped.
        let mut lines: Vec<&str> = text
            .split(['.', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(2)
            .collect();
        if lines.is_empty() {
            lines.push("No content to summarize");
        }
        lines.join(".\n") + "."
    }

    fn classify(&self, question: &str) -> Result<QuestionClassification, String> {
        if !self.is_configured() {
            return Err(CHECKER_DISABLED.to_string());
        }
        if question.trim().is_empty() {
            return Err("Could not classify an empty question.".to_string());
        }

        let (subject, topic) = Self::detect_subject(question);
        let difficulty = match question.len() {
            0..=80 => "Easy",
            81..=200 => "Medium",
            _ => "Hard",
        };
        Ok(QuestionClassification {
            subject: subject.to_string(),
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
            suggestions: vec![
                "Identify the governing concept before substituting values.".to_string(),
                "Check units and limiting cases of your answer.".to_string(),
            ],
        })
    }
}
