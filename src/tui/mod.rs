//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! artwork, and translates keyboard and mouse events into core `Action`s.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! never calls back into it; the adapter reads `Store::current_state()` and
//! writes through `Store::dispatch()`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps on input for up to 500ms and only
//! redraws after the store reports a change or the terminal is resized.
//! A store subscriber raises the redraw flag, so any state change, whatever
//! path it took, ends up on screen.

mod component;
pub mod components;
mod event;
pub mod ui;

use log::{error, info};
use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::Effect;
use crate::core::config::{Accent, ResolvedConfig};
use crate::core::state::Store;
use crate::tui::component::EventHandler;
use crate::tui::components::GestureTracker;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub gestures: GestureTracker,
    pub accent: Accent,
    pub show_hints: bool,
}

impl TuiState {
    pub fn new(accent: Accent, show_hints: bool) -> Self {
        Self {
            gestures: GestureTracker::new(),
            accent,
            show_hints,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: &ResolvedConfig, mut store: Store) -> io::Result<()> {
    let mut tui = TuiState::new(config.accent, config.show_hints);

    let needs_redraw = Rc::new(Cell::new(true)); // Force first frame
    let flag = Rc::clone(&needs_redraw);
    store.subscribe(move |_| flag.set(true));

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        loop {
            if needs_redraw.replace(false) {
                terminal.draw(|f| ui::draw_ui(f, &store, &mut tui))?;
            }

            let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
                continue;
            };

            // Process first event + drain everything pending before the next draw
            let mut pending = vec![first_event];
            while let Some(event) = poll_event_immediate()? {
                pending.push(event);
            }

            for event in pending {
                if event == TuiEvent::Resize {
                    needs_redraw.set(true);
                    continue;
                }
                let Some(action) = tui.gestures.handle_event(&event) else {
                    continue;
                };
                match store.dispatch(action) {
                    Ok(Effect::Quit) => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!("Navigation failed: {}", e);
                        return Err(io::Error::other(e));
                    }
                }
            }
        }
    });

    ratatui::restore();
    result
}
