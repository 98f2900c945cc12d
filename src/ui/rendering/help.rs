//! Help overlay explaining hex notation.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    help::{DIGIT_ORDER, EXAMPLES, HIGHER_IS_MORE, WHAT_IS_HEX},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let heading = Style::default().add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::styled("What is hex?", heading),
            Line::from(WHAT_IS_HEX),
            Line::from(""),
            Line::from("The values in ascending order:"),
            Line::from(DIGIT_ORDER),
            Line::from(HIGHER_IS_MORE),
            Line::from(""),
            Line::styled("Examples", heading),
        ];

        for (color, name) in EXAMPLES {
            let (r, g, b) = color.rgb();
            lines.push(Line::from(vec![
                Span::styled("  ", Style::default().bg(Color::Rgb(r, g, b))),
                Span::raw(format!(" {} represents {}", color.to_upper(), name)),
            ]));
        }

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help | Esc or click outside to close"),
            ),
            area,
        );
    }
}
