//! Quiz state machine
//!
//! Two states: `Answering(i)` for the question at index `i`, and `Complete`.
//!
//! Valid transitions for a quiz of `N` questions:
//! 1. Answering(i)   → Answering(i+1)  (on: Answer, when i+1 < N)
//! 2. Answering(N-1) → Complete        (on: Answer)
//! 3. \*              → Answering(0)    (on: Reset)
//!
//! `QuizSession` carries the state together with the collected answers. Its
//! transitions take `&self` and return a new session, so the controller owns
//! the only mutable copy.

use crate::errors::{QuizError, Result};
use crate::quiz::catalog::Question;
use crate::quiz::profile::{Answer, Profile};
use chrono::{DateTime, Utc};

/// Quiz progression states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizState {
    /// Waiting for an answer to the question at this index
    Answering(usize),

    /// All questions answered (results view)
    Complete,
}

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Answer,
    Reset,
}

impl QuizState {
    pub fn initial() -> Self {
        QuizState::Answering(0)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, QuizState::Complete)
    }

    /// Index of the question awaiting an answer
    pub fn current_index(&self) -> Option<usize> {
        match self {
            QuizState::Answering(i) => Some(*i),
            QuizState::Complete => None,
        }
    }

    /// Attempt a transition for a quiz of `total` questions
    pub fn transition(&self, event: QuizEvent, total: usize) -> Result<QuizState> {
        use QuizEvent::*;
        use QuizState::*;

        let next = match (self, event) {
            (_, Reset) => Answering(0),
            (Answering(i), Answer) if i + 1 < total => Answering(i + 1),
            (Answering(i), Answer) if i + 1 == total => Complete,
            (from, event) => {
                return Err(QuizError::InvalidTransition {
                    from: format!("{:?}", from),
                    reason: format!("no transition on {:?} for a {}-question quiz", event, total),
                });
            }
        };

        Ok(next)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuizState::Answering(_) => "Answering",
            QuizState::Complete => "Complete",
        }
    }
}

/// Progress through the question list, as shown above each question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current question
    pub position: usize,
    pub total: usize,
    /// Rounded percentage including the current question
    pub percent: u8,
    /// Steps left, counting the current question
    pub remaining: usize,
}

/// What a successful answer did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the next question
    Advanced,
    /// Final answer recorded; this profile must be persisted
    Completed(Profile),
}

/// Explicit quiz state: position plus collected answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: &'static [Question],
    state: QuizState,
    answers: Vec<Answer>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            state: QuizState::initial(),
            answers: Vec::new(),
            completed_at: None,
        }
    }

    /// Rebuild a session from a stored profile
    ///
    /// Only completed profiles are restored; anything else yields a fresh
    /// session at the first question.
    pub fn restore(questions: &'static [Question], profile: &Profile) -> Self {
        match profile.completed_at {
            Some(at) => Self {
                questions,
                state: QuizState::Complete,
                answers: profile.answers.clone(),
                completed_at: Some(at),
            },
            None => Self::new(questions),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        let questions = self.questions;
        self.state.current_index().and_then(|i| questions.get(i))
    }

    /// Answer tokens in question order
    pub fn tokens(&self) -> Vec<&str> {
        self.answers.iter().map(|a| a.answer.as_str()).collect()
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let index = self.state.current_index().unwrap_or(total.saturating_sub(1));
        let position = index + 1;
        let percent = if total == 0 {
            100
        } else {
            ((position as f64 / total as f64) * 100.0).round() as u8
        };

        Progress {
            position,
            total,
            percent,
            remaining: total.saturating_sub(index),
        }
    }

    /// Record an answer for the current question
    pub fn answer(&self, token: &str, now: DateTime<Utc>) -> Result<(QuizSession, AnswerOutcome)> {
        let total = self.questions.len();
        let next_state = self.state.transition(QuizEvent::Answer, total)?;

        let question = self
            .current_question()
            .ok_or_else(|| QuizError::InvalidTransition {
                from: format!("{:?}", self.state),
                reason: "no question at current index".to_string(),
            })?;

        if !question.has_option(token) {
            return Err(QuizError::UnknownOption {
                token: token.to_string(),
                question: question.id,
            });
        }

        let mut answers = self.answers.clone();
        answers.push(Answer::new(question.prompt, token));

        if next_state.is_complete() {
            let profile = Profile::completed(answers.clone(), now);
            let next = QuizSession {
                questions: self.questions,
                state: next_state,
                answers,
                completed_at: Some(now),
            };
            Ok((next, AnswerOutcome::Completed(profile)))
        } else {
            let next = QuizSession {
                questions: self.questions,
                state: next_state,
                answers,
                completed_at: None,
            };
            Ok((next, AnswerOutcome::Advanced))
        }
    }

    pub fn reset(&self) -> QuizSession {
        QuizSession::new(self.questions)
    }

    /// Profile for the current session, if it is complete
    pub fn profile(&self) -> Option<Profile> {
        self.completed_at
            .map(|at| Profile::completed(self.answers.clone(), at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::questions;

    const PATH: [&str; 5] = ["perder_peso", "irregular", "raramente", "menos_15", "tempo"];

    #[test]
    fn test_valid_transitions() {
        assert_eq!(
            QuizState::Answering(0).transition(QuizEvent::Answer, 5).unwrap(),
            QuizState::Answering(1)
        );
        assert_eq!(
            QuizState::Answering(4).transition(QuizEvent::Answer, 5).unwrap(),
            QuizState::Complete
        );
        assert_eq!(
            QuizState::Complete.transition(QuizEvent::Reset, 5).unwrap(),
            QuizState::Answering(0)
        );
        assert_eq!(
            QuizState::Answering(3).transition(QuizEvent::Reset, 5).unwrap(),
            QuizState::Answering(0)
        );
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(QuizState::Complete.transition(QuizEvent::Answer, 5).is_err());
        assert!(QuizState::Answering(7).transition(QuizEvent::Answer, 5).is_err());
    }

    #[test]
    fn test_session_walks_to_completion() {
        let mut session = QuizSession::new(questions());
        let now = Utc::now();

        for (i, token) in PATH.iter().enumerate() {
            let (next, outcome) = session.answer(token, now).unwrap();
            if i + 1 < PATH.len() {
                assert_eq!(outcome, AnswerOutcome::Advanced);
                assert_eq!(next.state(), QuizState::Answering(i + 1));
            } else {
                match outcome {
                    AnswerOutcome::Completed(profile) => {
                        assert_eq!(profile.tokens(), PATH.to_vec());
                        assert_eq!(profile.completed_at, Some(now));
                    }
                    other => panic!("expected completion, got {:?}", other),
                }
            }
            session = next;
        }

        assert!(session.is_complete());
        assert_eq!(session.answers()[0].question, questions()[0].prompt);
    }

    #[test]
    fn test_answer_leaves_original_untouched() {
        let session = QuizSession::new(questions());
        let (next, _) = session.answer("ganhar_massa", Utc::now()).unwrap();

        assert!(session.answers().is_empty());
        assert_eq!(next.answers().len(), 1);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let session = QuizSession::new(questions());
        let err = session.answer("tempo", Utc::now()).unwrap_err();
        assert!(matches!(err, QuizError::UnknownOption { question: 1, .. }));
    }

    #[test]
    fn test_progress() {
        let session = QuizSession::new(questions());
        let p = session.progress();
        assert_eq!((p.position, p.total, p.percent, p.remaining), (1, 5, 20, 5));

        let (session, _) = session.answer("manter_forma", Utc::now()).unwrap();
        let (session, _) = session.answer("saudavel", Utc::now()).unwrap();
        let p = session.progress();
        assert_eq!((p.position, p.percent, p.remaining), (3, 60, 3));
    }

    #[test]
    fn test_restore_ignores_incomplete_profile() {
        let profile = Profile {
            answers: vec![Answer::new("Q", "perder_peso")],
            completed_at: None,
        };
        let session = QuizSession::restore(questions(), &profile);
        assert_eq!(session.state(), QuizState::Answering(0));
        assert!(session.answers().is_empty());
    }
}
