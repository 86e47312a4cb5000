use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    TapLeft,
    TapRight,
    /// Keyboard stand-in for a vertical drag, in rows (positive = down).
    DragNudge(i16),
    /// Keyboard stand-in for lifting the finger.
    ReleaseDrag,
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a raw crossterm event onto a `TuiEvent`.
pub fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => {
            // Kitty-protocol terminals also report releases
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Left) | (_, KeyCode::Char('h')) => Some(TuiEvent::TapLeft),
                (_, KeyCode::Right) | (_, KeyCode::Char('l')) => Some(TuiEvent::TapRight),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::DragNudge(-1)),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::DragNudge(1)),
                (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::ReleaseDrag),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
                MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::MouseDrag(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_arrow_keys_map_to_taps() {
        assert_eq!(translate(key(KeyCode::Left, KeyModifiers::NONE)), Some(TuiEvent::TapLeft));
        assert_eq!(
            translate(key(KeyCode::Char('l'), KeyModifiers::NONE)),
            Some(TuiEvent::TapRight)
        );
    }

    #[test]
    fn test_vertical_keys_nudge_drag() {
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), Some(TuiEvent::DragNudge(-1)));
        assert_eq!(
            translate(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(TuiEvent::DragNudge(1))
        );
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)), Some(TuiEvent::ReleaseDrag));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_left_button_mouse_events() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(TuiEvent::MouseDown(3, 4))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(MouseButton::Left), 3, 6)),
            Some(TuiEvent::MouseDrag(3, 6))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left), 3, 6)),
            Some(TuiEvent::MouseUp(3, 6))
        );
        assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
