//! Option buttons, or the restart control once the game is over.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::Focus};

impl App {
    pub(in crate::ui) fn draw_options(&self, f: &mut Frame, area: Rect) {
        if self.session.is_game_over() {
            f.render_widget(
                Paragraph::new("⟲ Restart (r / Enter)")
                    .alignment(Alignment::Center)
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .block(Block::default().borders(Borders::ALL).title("Game Over")),
                area,
            );
            return;
        }

        let focused = self.focus == Focus::Options;
        let lines: Vec<Line> = self
            .session
            .round()
            .options()
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let style = if focused && i == self.selected_option {
                    Style::default().fg(Color::Black).bg(Color::White)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(
                    format!(" [{}] {} ", i + 1, color.to_upper()),
                    style,
                ))
            })
            .collect();

        let border = if focused { Color::White } else { Color::DarkGray };

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border))
                        .title("Options | 1-9 or ↑/↓ + Enter | Tab = history"),
                ),
            area,
        );
    }
}
