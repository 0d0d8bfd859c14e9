//! Quiz progression
//!
//! Static catalog, answer/profile types, the state machine and the
//! controller that ties them to storage.

pub mod catalog;
pub mod controller;
pub mod profile;
pub mod state;

pub use catalog::{question_count, questions, Icon, Question, QuizOption};
pub use controller::QuizController;
pub use profile::{Answer, Profile};
pub use state::{AnswerOutcome, Progress, QuizEvent, QuizSession, QuizState};
