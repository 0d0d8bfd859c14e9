//! Answers and the persisted profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Prompt of the question that was answered
    pub question: String,
    /// Chosen option token
    pub answer: String,
}

impl Answer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Durable record of a quiz attempt
///
/// Only completed attempts are ever written, so `completed_at` is set exactly
/// when `answers` holds one entry per question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn completed(answers: Vec<Answer>, at: DateTime<Utc>) -> Self {
        Self {
            answers,
            completed_at: Some(at),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Answer tokens in question order
    pub fn tokens(&self) -> Vec<&str> {
        self.answers.iter().map(|a| a.answer.as_str()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
