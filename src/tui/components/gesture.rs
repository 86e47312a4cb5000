//! # Gesture Tracker
//!
//! Turns raw pointer and key events into core `Action`s.
//!
//! - Click on `<` / `>` → `TapLeft` / `TapRight`
//! - Left-button drag elsewhere → one `Drag(delta)` per row moved
//! - Button release after movement → `DragReleased`
//! - `j`/`k` (or ↓/↑) nudge the drag offset, Enter releases it
//!
//! A press-and-release that never moved is not a drag and produces nothing.
//! The tracker only remembers the last pointer row; the accumulated offset
//! itself lives in the core `ViewState`.

use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::tui::component::EventHandler;
use crate::tui::components::nav_row::{NavButton, NavRow};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PointerDrag {
    last_row: u16,
    moved: bool,
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    /// Where the nav row was drawn on the last frame.
    pub nav_area: Rect,
    drag: Option<PointerDrag>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl EventHandler for GestureTracker {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match *event {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::TapLeft => Some(Action::TapLeft),
            TuiEvent::TapRight => Some(Action::TapRight),
            TuiEvent::DragNudge(rows) => Some(Action::Drag(f32::from(rows))),
            TuiEvent::ReleaseDrag => {
                self.drag = None;
                Some(Action::DragReleased)
            }
            TuiEvent::MouseDown(column, row) => match NavRow::hit_test(self.nav_area, column, row) {
                Some(NavButton::Previous) => Some(Action::TapLeft),
                Some(NavButton::Next) => Some(Action::TapRight),
                None => {
                    self.drag = Some(PointerDrag {
                        last_row: row,
                        moved: false,
                    });
                    None
                }
            },
            TuiEvent::MouseDrag(_, row) => {
                let drag = self.drag.as_mut()?;
                if row == drag.last_row {
                    return None;
                }
                let delta = f32::from(row) - f32::from(drag.last_row);
                drag.last_row = row;
                drag.moved = true;
                Some(Action::Drag(delta))
            }
            TuiEvent::MouseUp(..) => {
                let drag = self.drag.take()?;
                drag.moved.then_some(Action::DragReleased)
            }
            TuiEvent::Resize => None,
        }
    }
}
