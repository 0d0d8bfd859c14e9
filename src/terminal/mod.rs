//! Terminal front-end
//!
//! Drives a `QuizController` from keyboard input and renders its state. All
//! decisions stay in the controller; this layer only reads and prints.

pub mod display;
pub mod input;

use anyhow::Result;
use tracing::info;

pub use display::DisplayManager;
pub use input::InputHandler;

use crate::offer::SUBSCRIPTION_OFFER;
use crate::quiz::QuizController;
use crate::storage::KeyValueStore;

/// How an interactive run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Results were shown
    Completed,
    /// Input closed before the last answer; nothing was saved
    Abandoned,
}

pub struct QuizRunner<S: KeyValueStore> {
    controller: QuizController<S>,
    display: DisplayManager,
    input: InputHandler,
}

impl<S: KeyValueStore> QuizRunner<S> {
    pub fn new(controller: QuizController<S>, display: DisplayManager, input: InputHandler) -> Self {
        Self {
            controller,
            display,
            input,
        }
    }

    /// Ask every remaining question, then show the results
    pub fn run(&mut self) -> Result<RunOutcome> {
        if !self.controller.is_complete() {
            self.display.show_banner();
        }

        while let Some(question) = self.controller.current_question() {
            self.display
                .show_question(question, self.controller.progress())?;

            let display = &self.display;
            let choice = self.input.read_choice(question, |line| {
                display.show_invalid_choice(line, question.options.len())
            })?;

            match choice {
                Some(token) => {
                    self.controller.submit_answer(token)?;
                }
                None => {
                    info!(answered = self.controller.answers().len(), "quiz abandoned");
                    return Ok(RunOutcome::Abandoned);
                }
            }
        }

        self.show_results()?;
        Ok(RunOutcome::Completed)
    }

    /// Offer to retake the quiz after the results view
    pub fn offer_retake(&mut self) -> Result<bool> {
        if self.input.confirm("Refazer o quiz? [s/N] ")? {
            self.controller.reset()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn show_results(&self) -> Result<()> {
        self.display.show_results(
            &self.controller.tips(),
            &SUBSCRIPTION_OFFER,
            self.controller.completed_at(),
        )?;
        Ok(())
    }
}
