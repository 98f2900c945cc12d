use std::{
    fmt::Display,
    io::Stdout,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;

use crate::{
    color::HexColor, config::GameConfig, error::GameError, flash::Flash, help::HelpOverlay,
    session::Session,
};

use super::{
    clipboard,
    handlers::InputHandler,
    types::{Focus, LogBuffer},
};

/// How long to wait for input when no flash is pending.
const IDLE_POLL: Duration = Duration::from_secs(1);

/// Main application state container. Owns the one mutable session slot.
pub struct App {
    pub(in crate::ui) config: GameConfig,
    pub(in crate::ui) session: Session,
    pub(in crate::ui) rng: StdRng,
    pub(in crate::ui) help: HelpOverlay,
    pub(in crate::ui) guess_flash: Flash<bool>,
    pub(in crate::ui) copy_flash: Flash<HexColor>,
    pub(in crate::ui) focus: Focus,
    pub(in crate::ui) selected_option: usize,
    pub(in crate::ui) selected_history: usize,
    pub(in crate::ui) pending_copy: Option<HexColor>,
    pub(in crate::ui) viewport: Rect,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(config: GameConfig, mut rng: StdRng, logs: LogBuffer) -> Result<Self, GameError> {
        let session = Session::new(config.rules(), &mut rng)?;

        Ok(Self {
            guess_flash: Flash::new(config.feedback_flash()),
            copy_flash: Flash::new(config.copy_notice()),
            config,
            session,
            rng,
            help: HelpOverlay::default(),
            focus: Focus::Options,
            selected_option: 0,
            selected_history: 0,
            pending_copy: None,
            viewport: Rect::default(),
            logs,
        })
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!(
            max_health = self.config.max_health,
            option_count = self.config.option_count,
            "UI started"
        );
        self.log("New game started");

        loop {
            let now = Instant::now();
            self.guess_flash.expire(now);
            self.copy_flash.expire(now);

            self.viewport = terminal.draw(|f| self.draw(f))?.area;

            if let Some(color) = self.pending_copy.take() {
                match clipboard::copy(&color.to_upper()) {
                    Ok(()) => self.log(format!("Copied {} to clipboard", color.to_upper())),
                    Err(e) => self.log(format!("Clipboard write failed: {e}")),
                }
            }

            if !event::poll(self.poll_timeout(Instant::now()))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if InputHandler::new(self).handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => InputHandler::new(self).handle_mouse(mouse),
                _ => {}
            }
        }
    }

    /// Wait no longer than the nearest flash deadline.
    pub(in crate::ui) fn poll_timeout(&self, now: Instant) -> Duration {
        [self.guess_flash.deadline(), self.copy_flash.deadline()]
            .into_iter()
            .flatten()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(IDLE_POLL)
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
