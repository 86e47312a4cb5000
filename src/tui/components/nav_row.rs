//! # NavRow Component
//!
//! The bottom row: `<` button, artist and year, `>` button.
//!
//! ```text
//! ┌───┐       Vincent van Gogh        ┌───┐
//! │ < │            (1888)             │ > │
//! └───┘                               └───┘
//! ```
//!
//! The buttons are plain bordered blocks. Clicks are resolved against the
//! same layout through `hit_test`, so render and hit testing can't drift.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

const BUTTON_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Previous,
    Next,
}

pub struct NavRow {
    pub artist: String,
    pub year: i32,
    pub accent: Color,
}

impl NavRow {
    pub fn new(artist: impl Into<String>, year: i32, accent: Color) -> Self {
        Self {
            artist: artist.into(),
            year,
            accent,
        }
    }

    /// Splits the row into `[previous, details, next]`.
    pub fn areas(area: Rect) -> [Rect; 3] {
        Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .spacing(1)
        .areas(area)
    }

    /// Which button, if any, sits under the given screen cell.
    pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<NavButton> {
        let [previous, _, next] = Self::areas(area);
        let position = Position::new(column, row);
        if previous.contains(position) {
            Some(NavButton::Previous)
        } else if next.contains(position) {
            Some(NavButton::Next)
        } else {
            None
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, label: &str) {
        let style = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(Style::default().fg(self.accent)));
        frame.render_widget(button, area);
    }
}

impl Component for NavRow {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [previous, details, next] = Self::areas(area);

        self.render_button(frame, previous, "<");
        self.render_button(frame, next, ">");

        let text = vec![
            Line::from(self.artist.as_str()),
            Line::from(format!("({})", self.year)),
        ];
        let [_, details] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)])
            .areas(details);
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(self.accent))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, details);
    }
}
