//! Quiz progression controller
//!
//! Owns the current `QuizSession` and the profile store. Transitions are
//! computed on the session; the controller only swaps in the new session and
//! forwards completed profiles to storage.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::errors::Result;
use crate::quiz::catalog::{questions, Question};
use crate::quiz::profile::Answer;
use crate::quiz::state::{AnswerOutcome, Progress, QuizSession, QuizState};
use crate::storage::{KeyValueStore, ProfileStore};
use crate::tips::{RuleSet, Tip};

pub struct QuizController<S: KeyValueStore> {
    session: QuizSession,
    store: ProfileStore<S>,
    rules: RuleSet,
}

impl<S: KeyValueStore> QuizController<S> {
    /// Controller over the standard catalog, starting at the first question
    pub fn new(store: ProfileStore<S>) -> Self {
        Self::with_questions(store, questions())
    }

    pub fn with_questions(store: ProfileStore<S>, questions: &'static [Question]) -> Self {
        Self {
            session: QuizSession::new(questions),
            store,
            rules: RuleSet::standard(),
        }
    }

    /// Controller restored from whatever the store holds
    pub fn open(store: ProfileStore<S>) -> Result<Self> {
        let mut controller = Self::new(store);
        controller.load_persisted()?;
        Ok(controller)
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Restore a completed profile from storage
    ///
    /// Missing, malformed and incomplete profiles all leave the controller at
    /// the first question. Returns the resulting state.
    pub fn load_persisted(&mut self) -> Result<QuizState> {
        let questions = self.session.questions();
        self.session = match self.store.load()? {
            Some(profile) if profile.is_complete() => {
                info!(answers = profile.answers.len(), "restored completed quiz");
                QuizSession::restore(questions, &profile)
            }
            Some(_) => {
                debug!("stored profile has no completion stamp, starting over");
                QuizSession::new(questions)
            }
            None => QuizSession::new(questions),
        };

        Ok(self.session.state())
    }

    /// Answer the current question with an option token
    pub fn submit_answer(&mut self, value: &str) -> Result<QuizState> {
        self.submit_answer_at(value, Utc::now())
    }

    /// Same as `submit_answer` with an explicit completion time
    pub fn submit_answer_at(&mut self, value: &str, now: DateTime<Utc>) -> Result<QuizState> {
        let from = self.session.state();
        let (next, outcome) = self.session.answer(value, now)?;

        if let AnswerOutcome::Completed(profile) = &outcome {
            self.store.save(profile)?;
            info!(answers = profile.answers.len(), "quiz completed");
        }

        self.session = next;
        debug!(?from, to = ?self.session.state(), token = value, "answer recorded");
        Ok(self.session.state())
    }

    /// Forget all answers and the stored profile
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.session = self.session.reset();
        info!("quiz reset");
        Ok(())
    }

    pub fn state(&self) -> QuizState {
        self.session.state()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.session.current_question()
    }

    pub fn answers(&self) -> &[Answer] {
        self.session.answers()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.session.completed_at()
    }

    pub fn progress(&self) -> Progress {
        self.session.progress()
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Tips for the answers collected so far
    pub fn tips(&self) -> Vec<Tip> {
        self.rules.recommend(&self.session.tokens())
    }

    pub fn store(&self) -> &ProfileStore<S> {
        &self.store
    }
}
