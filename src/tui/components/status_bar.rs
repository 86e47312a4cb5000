//! # StatusBar Component
//!
//! Bottom line with the position in the catalog, a drag indicator while a
//! vertical drag is pending, and (optionally) key hints.
//!
//! ```text
//! Collection 1/2 · Artwork 3/5 · drag ↓2      ←/→ artwork  drag ↕ collection  q quit
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

const HINTS: &str = "←/→ artwork  drag ↕ or j/k+enter collection  q quit";

pub struct StatusBar {
    /// (index, total), zero-based index
    pub collection: (usize, usize),
    pub artwork: (usize, usize),
    pub drag_offset: f32,
    pub show_hints: bool,
}

impl StatusBar {
    pub fn position_text(&self) -> String {
        let mut text = format!(
            "Collection {}/{} · Artwork {}/{}",
            self.collection.0 + 1,
            self.collection.1,
            self.artwork.0 + 1,
            self.artwork.1
        );
        let rows = self.drag_offset.round() as i32;
        if rows > 0 {
            text.push_str(&format!(" · drag ↓{rows}"));
        } else if rows < 0 {
            text.push_str(&format!(" · drag ↑{}", rows.unsigned_abs()));
        }
        text
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::DarkGray);
        if !self.show_hints {
            frame.render_widget(Paragraph::new(self.position_text()).style(style), area);
            return;
        }

        let hints_width = HINTS.chars().count() as u16;
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);
        frame.render_widget(Paragraph::new(self.position_text()).style(style), left);
        frame.render_widget(
            Paragraph::new(HINTS).style(style).alignment(Alignment::Right),
            right,
        );
    }
}
