//! # Actions
//!
//! Every gesture the surface forwards becomes an `Action`.
//! Tap on `>`? That's `Action::TapRight`.
//! Finger lifted after a vertical drag? That's `Action::DragReleased`.
//!
//! `update()` takes the current state and an action and moves the state
//! forward. No I/O, no rendering, just index arithmetic via the navigator.
//!
//! ```text
//! ViewState + Action  →  update()  →  ViewState' + Effect
//! ```

use log::debug;

use super::catalog::{Catalog, CatalogError};
use super::navigator;
use super::state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Previous artwork in the current collection.
    TapLeft,
    /// Next artwork in the current collection.
    TapRight,
    /// Vertical drag moved by `delta` (positive = downwards).
    Drag(f32),
    /// Vertical drag ended; switch collection by the sign of the offset.
    DragReleased,
    Quit,
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// State changed; redraw.
    Changed,
    Quit,
}

pub fn update(
    state: &mut ViewState,
    catalog: &Catalog,
    action: Action,
) -> Result<Effect, CatalogError> {
    let before = *state;

    match action {
        Action::TapLeft => {
            state.artwork_index =
                navigator::previous_artwork(catalog, state.collection_index, state.artwork_index)?;
        }
        Action::TapRight => {
            state.artwork_index =
                navigator::next_artwork(catalog, state.collection_index, state.artwork_index)?;
        }
        Action::Drag(delta) => {
            state.drag_offset += delta;
        }
        Action::DragReleased => {
            // Positive offset goes to the *previous* collection.
            state.collection_index = if state.drag_offset > 0.0 {
                navigator::previous_collection(catalog, state.collection_index)?
            } else {
                navigator::next_collection(catalog, state.collection_index)?
            };
            state.artwork_index = 0;
            state.drag_offset = 0.0;
        }
        Action::Quit => return Ok(Effect::Quit),
    }

    if *state == before {
        return Ok(Effect::None);
    }
    debug!("{:?}: {:?} -> {:?}", action, before, state);
    Ok(Effect::Changed)
}
