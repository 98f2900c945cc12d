mod help;
mod history;
mod logs;
mod options;
mod status;
mod swatch;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{help::Bounds, ui::app::App};

const HELP_WIDTH: u16 = 64;
const HELP_HEIGHT: u16 = 16;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // title
                Constraint::Min(12),   // game + history
                Constraint::Length(6), // logs
            ])
            .split(f.area());

        self.draw_title(f, layout[0]);

        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[1]);

        // One line per option plus borders.
        let options_height = self.session.round().options().len() as u16 + 2;

        let game_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // swatch
                Constraint::Length(3), // health and points
                Constraint::Length(options_height), // options or restart
                Constraint::Length(3), // copy notice
            ])
            .split(main_layout[0]);

        self.draw_swatch(f, game_layout[0]);
        self.draw_status(f, game_layout[1]);
        self.draw_options(f, game_layout[2]);
        self.draw_copy_notice(f, game_layout[3]);
        self.draw_history(f, main_layout[1]);
        self.draw_logs(f, layout[2]);

        if self.help.is_open() {
            self.draw_help(f, help_area(f.area()));
        }
    }

    fn draw_title(&self, f: &mut Frame, area: Rect) {
        f.render_widget(
            Paragraph::new("Guess the hex")
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("? = help | q = quit"),
                ),
            area,
        );
    }
}

/// Where the help overlay sits inside `area`: centered, clipped to fit.
pub(in crate::ui) fn help_area(area: Rect) -> Rect {
    let width = HELP_WIDTH.min(area.width);
    let height = HELP_HEIGHT.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}
