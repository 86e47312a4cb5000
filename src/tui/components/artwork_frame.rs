//! # ArtworkFrame Component
//!
//! The framed image panel. A terminal can't show the painting, so the frame
//! holds the image resource name and the title as its caption. While a
//! vertical drag is in progress the whole frame follows the drag offset,
//! clipped to its slot.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

pub struct ArtworkFrame {
    pub image: String,
    pub caption: String,
    /// Accumulated drag offset in rows.
    pub drag_offset: f32,
    pub accent: Color,
}

impl ArtworkFrame {
    pub fn new(
        image: impl Into<String>,
        caption: impl Into<String>,
        drag_offset: f32,
        accent: Color,
    ) -> Self {
        Self {
            image: image.into(),
            caption: caption.into(),
            drag_offset,
            accent,
        }
    }
}

/// Moves `area` down by `rows` (up when negative) and clips it to itself.
/// Returns `None` once the frame has been dragged completely out of its slot.
pub fn shifted(area: Rect, rows: i32) -> Option<Rect> {
    // Anything past one full height is already out of the slot
    let height = i32::from(area.height);
    let top = i32::from(area.y) + rows.clamp(-height, height);
    let bottom = top + height;
    let clipped_top = top.max(i32::from(area.y));
    let clipped_bottom = bottom.min(i32::from(area.bottom()));
    if clipped_bottom <= clipped_top {
        return None;
    }
    Some(Rect::new(
        area.x,
        clipped_top as u16,
        area.width,
        (clipped_bottom - clipped_top) as u16,
    ))
}

impl Component for ArtworkFrame {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(area) = shifted(area, self.drag_offset.round() as i32) else {
            return;
        };

        let border_style = Style::default().fg(self.accent);
        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(border_style)
            .title_bottom(Line::from(self.caption.as_str()).centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [center] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        let label = Paragraph::new(Line::from(vec![
            Span::styled("[ ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.image.as_str(), Style::default().add_modifier(Modifier::ITALIC)),
            Span::styled(" ]", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(label, center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(frame_widget: &mut ArtworkFrame, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                frame_widget.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_shifted_no_offset() {
        let area = Rect::new(0, 2, 10, 5);
        assert_eq!(shifted(area, 0), Some(area));
    }

    #[test]
    fn test_shifted_down_clips_bottom() {
        let area = Rect::new(0, 2, 10, 5);
        assert_eq!(shifted(area, 2), Some(Rect::new(0, 4, 10, 3)));
    }

    #[test]
    fn test_shifted_up_clips_top() {
        let area = Rect::new(0, 2, 10, 5);
        assert_eq!(shifted(area, -3), Some(Rect::new(0, 2, 10, 2)));
    }

    #[test]
    fn test_shifted_out_of_slot() {
        let area = Rect::new(0, 2, 10, 5);
        assert_eq!(shifted(area, 5), None);
        assert_eq!(shifted(area, -9), None);
    }

    #[test]
    fn test_shifted_extreme_offsets() {
        let area = Rect::new(0, 2, 10, 5);
        assert_eq!(shifted(area, i32::MAX), None);
        assert_eq!(shifted(area, i32::MIN), None);
        let bottom_edge = Rect::new(0, u16::MAX - 5, 10, 5);
        assert_eq!(shifted(bottom_edge, i32::MAX), None);
    }

    #[test]
    fn test_frame_shows_image_and_caption() {
        let mut widget = ArtworkFrame::new("the_old_mill", "The Old Mill", 0.0, Color::Cyan);
        let rows = render_text(&mut widget, 40, 7);
        assert!(rows[0].starts_with('┏'));
        assert!(rows[3].contains("[ the_old_mill ]"));
        assert!(rows[6].contains("The Old Mill"));
    }

    #[test]
    fn test_frame_follows_drag() {
        let mut widget = ArtworkFrame::new("the_old_mill", "The Old Mill", 2.0, Color::Cyan);
        let rows = render_text(&mut widget, 40, 7);
        assert!(rows[0].trim().is_empty());
        assert!(rows[2].starts_with('┏'));
    }
}
