//! # TitleBar Component
//!
//! Single centered line with the current artwork's title in the accent colour.
//! Stateless: everything arrives as props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

pub struct TitleBar {
    pub title: String,
    pub accent: Color,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, accent: Color) -> Self {
        Self {
            title: title.into(),
            accent,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.title.as_str())
            .style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
