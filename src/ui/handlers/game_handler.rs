//! Game state transitions driven by the UI.

use std::time::Instant;

use crate::error::GameError;

use super::super::{app::App, types::Focus};

/// Helper struct applying session transitions to the app.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Guess the option at `index` in presentation order.
    pub fn guess_option(&mut self, index: usize) {
        let Some(&guess) = self.app.session.round().options().get(index) else {
            return;
        };

        match self.app.session.submit_guess(guess, &mut self.app.rng) {
            Ok((next, outcome)) => {
                self.app.session = next;
                self.app.selected_option = 0;
                self.app
                    .guess_flash
                    .trigger(outcome.is_correct, Instant::now());

                if outcome.is_correct {
                    self.app.log(format!(
                        "Correct: {} (points: {})",
                        outcome.answer.to_upper(),
                        self.app.session.points()
                    ));
                } else {
                    self.app.log(format!(
                        "Incorrect: guessed {}, answer was {} (health: {})",
                        outcome.guess.to_upper(),
                        outcome.answer.to_upper(),
                        self.app.session.health()
                    ));
                }

                if outcome.game_over {
                    self.app.log(format!(
                        "Game over with {} points",
                        self.app.session.points()
                    ));
                }
            }
            Err(GameError::GameOver) => {
                self.app.log("Guess rejected: game is over");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to submit guess");
                self.app.log(format!("Error: {e}"));
            }
        }
    }

    pub fn guess_selected(&mut self) {
        self.guess_option(self.app.selected_option);
    }

    /// Restart is only offered once the game is over.
    pub fn restart(&mut self) {
        if !self.app.session.is_game_over() {
            return;
        }

        match self.app.session.restart(&mut self.app.rng) {
            Ok(next) => {
                self.app.session = next;
                self.app.focus = Focus::Options;
                self.app.selected_option = 0;
                self.app.selected_history = 0;
                self.app.guess_flash.clear();
                self.app.log("Game restarted");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to restart");
                self.app.log(format!("Error: {e}"));
            }
        }
    }

    /// Queue the selected history color for the clipboard.
    pub fn copy_selected(&mut self) {
        let Some(entry) = self
            .app
            .session
            .history()
            .get_newest_first(self.app.selected_history)
        else {
            return;
        };

        let color = entry.color;
        self.app.pending_copy = Some(color);
        self.app.copy_flash.trigger(color, Instant::now());
    }
}
