//! History list and the copy confirmation.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::swatch::{CORRECT, INCORRECT};
use crate::ui::{app::App, types::Focus};

impl App {
    pub(in crate::ui) fn draw_history(&self, f: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::History;

        let items: Vec<ListItem> = self
            .session
            .history()
            .newest_first()
            .map(|(number, entry)| {
                let (r, g, b) = entry.color.rgb();
                let (verdict, verdict_color) = if entry.is_correct {
                    ("Correct", CORRECT)
                } else {
                    ("Incorrect", INCORRECT)
                };

                ListItem::new(Line::from(vec![
                    Span::raw(format!("{number:>3}. ")),
                    Span::styled("    ", Style::default().bg(Color::Rgb(r, g, b))),
                    Span::raw(format!(" {}  ", entry.color.to_upper())),
                    Span::styled(
                        verdict,
                        Style::default()
                            .fg(verdict_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect();

        let title = if focused {
            "History | ↑/↓ select | c = copy | Tab = options"
        } else {
            "History"
        };
        let border = if focused { Color::White } else { Color::DarkGray };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(title),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = ListState::default();
        if focused {
            state.select(Some(self.selected_history));
        }

        f.render_stateful_widget(list, area, &mut state);
    }

    pub(in crate::ui) fn draw_copy_notice(&self, f: &mut Frame, area: Rect) {
        let Some(color) = self.copy_flash.current(Instant::now()) else {
            return;
        };

        f.render_widget(
            Paragraph::new(format!("Copied {} to clipboard", color.to_upper()))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}
