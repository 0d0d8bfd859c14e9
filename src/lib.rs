//! healthquiz - Terminal Health Quiz
//!
//! Five fixed questions about health and fitness habits, a rule table that
//! turns the answers into personalized tips, and a subscription offer.
//!
//! # Architecture
//!
//! - **quiz**: catalog, state machine, and the progression controller
//! - **tips**: tabular recommender over answer tokens
//! - **storage**: key-value persistence of the completed profile
//! - **terminal**: interactive front-end (rendering only)

pub mod errors;
pub mod quiz;
pub mod tips;
pub mod storage;
pub mod offer;

// Re-export commonly used types
pub use errors::{QuizError, Result};
pub use quiz::{QuizController, QuizState};
pub use tips::{recommend, Tip};

// Interface layer
pub mod cli;
pub mod config;
pub mod terminal;
