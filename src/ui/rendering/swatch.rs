//! The color swatch with correct/incorrect feedback.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

pub(super) const CORRECT: Color = Color::Rgb(0x7f, 0xae, 0x7d);
pub(super) const INCORRECT: Color = Color::Rgb(0xdb, 0x71, 0x71);

impl App {
    pub(in crate::ui) fn draw_swatch(&self, f: &mut Frame, area: Rect) {
        let (r, g, b) = self.session.answer().rgb();

        let mut block = Block::default().borders(Borders::ALL).title("Swatch");
        if let Some(&correct) = self.guess_flash.current(Instant::now()) {
            let (label, color) = if correct {
                (" Correct ", CORRECT)
            } else {
                (" Incorrect ", INCORRECT)
            };
            block = block
                .title_bottom(label)
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        }

        f.render_widget(
            Paragraph::new("")
                .style(Style::default().bg(Color::Rgb(r, g, b)))
                .block(block),
            area,
        );
    }
}
