//! Keyboard and mouse dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::help::Bounds;

use super::super::{app::App, rendering::help_area, types::Focus};
use super::GameHandler;

/// Helper struct for managing keyboard and pointer input.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
                self.app.log("Exit requested");
                return true;
            }
            (KeyCode::Char('?' | 'h'), _) => {
                self.app.help.toggle();
                return false;
            }
            (KeyCode::Esc, _) => {
                self.app.help.close();
                return false;
            }
            _ => {}
        }

        // The overlay swallows everything else while open.
        if self.app.help.is_open() {
            return false;
        }

        // Restart replaces the options, whichever panel has focus.
        if self.app.session.is_game_over()
            && matches!(key.code, KeyCode::Char('r' | 'R') | KeyCode::Enter)
        {
            GameHandler::new(self.app).restart();
            return false;
        }

        if key.code == KeyCode::Tab {
            self.toggle_focus();
            return false;
        }

        match self.app.focus {
            Focus::Options => self.handle_options_key(key.code),
            Focus::History => self.handle_history_key(key.code),
        }
        false
    }

    fn handle_options_key(&mut self, code: KeyCode) {
        if self.app.session.is_game_over() {
            return;
        }

        let option_count = self.app.session.round().options().len();

        match code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < option_count {
                    GameHandler::new(self.app).guess_option(index);
                }
            }
            KeyCode::Up | KeyCode::Left => {
                self.app.selected_option = self.app.selected_option.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Right => {
                if self.app.selected_option + 1 < option_count {
                    self.app.selected_option += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => GameHandler::new(self.app).guess_selected(),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let len = self.app.session.history().len();

        match code {
            KeyCode::Up => {
                self.app.selected_history = self.app.selected_history.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.app.selected_history + 1 < len {
                    self.app.selected_history += 1;
                }
            }
            KeyCode::Char('c' | 'C') | KeyCode::Enter => {
                GameHandler::new(self.app).copy_selected();
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.app.focus = match self.app.focus {
            Focus::Options if !self.app.session.history().is_empty() => {
                self.app.selected_history = 0;
                Focus::History
            }
            _ => Focus::Options,
        };
    }

    /// Any button going down outside the help overlay closes it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return;
        }

        let bounds = Bounds::from(help_area(self.app.viewport));
        if self.app.help.pointer_down(mouse.column, mouse.row, bounds) {
            tracing::debug!(
                column = mouse.column,
                row = mouse.row,
                "help closed by outside click"
            );
        }
    }
}
