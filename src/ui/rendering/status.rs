//! Health and points readout.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let points = Span::raw(format!("   Points: {}", self.session.points()));

        let line = if self.session.is_game_over() {
            Line::from(vec![
                Span::styled(
                    "Game Over",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                points,
            ])
        } else {
            let health = self.session.health() as usize;
            let missing = self.session.rules().max_health as usize - health;

            Line::from(vec![
                Span::raw("Health: "),
                Span::styled("♥".repeat(health), Style::default().fg(Color::Red)),
                Span::styled("♡".repeat(missing), Style::default().fg(Color::DarkGray)),
                points,
            ])
        };

        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}
