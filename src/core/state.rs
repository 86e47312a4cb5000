//! # Application State
//!
//! Core viewing state for ArtSpace. Domain logic only, no TUI-specific types.
//! Presentation state (button hit areas, mouse drag anchor) lives in `tui`.
//!
//! ```text
//! Store
//! ├── catalog: Arc<Catalog>           // fixed dataset, shared read-only
//! ├── state: ViewState
//! │   ├── collection_index: usize     // < catalog.len()
//! │   ├── artwork_index: usize        // < catalog.collection_len(collection_index)
//! │   └── drag_offset: f32            // accumulated vertical drag
//! └── listeners: Vec<Listener>        // notified after every change
//! ```
//!
//! State changes only happen through `dispatch(action)`, which delegates to
//! `update()` in action.rs.

use std::fmt;
use std::sync::Arc;

use log::{info, warn};

use super::action::{Action, Effect, update};
use super::catalog::{Artwork, Catalog, CatalogError};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub collection_index: usize,
    pub artwork_index: usize,
    pub drag_offset: f32,
}

impl ViewState {
    /// First artwork of the given collection, no drag in progress.
    pub fn at_collection(collection_index: usize) -> Self {
        Self {
            collection_index,
            ..Self::default()
        }
    }
}

type Listener = Box<dyn FnMut(&ViewState)>;

pub struct Store {
    catalog: Arc<Catalog>,
    state: ViewState,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Creates a store, rejecting an initial state that points outside the catalog.
    pub fn new(catalog: Arc<Catalog>, initial: ViewState) -> Result<Self, CatalogError> {
        catalog.artwork(initial.collection_index, initial.artwork_index)?;
        info!(
            "Store ready: {} collections, starting at ({}, {})",
            catalog.len(),
            initial.collection_index,
            initial.artwork_index
        );
        Ok(Self {
            catalog,
            state: initial,
            listeners: Vec::new(),
        })
    }

    pub fn current_state(&self) -> ViewState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The artwork the current state points at.
    pub fn current_artwork(&self) -> &Artwork {
        // Every transition keeps the indices in range, see `dispatch`.
        &self.catalog.collections()[self.state.collection_index][self.state.artwork_index]
    }

    /// Number of artworks in the current collection.
    pub fn current_collection_len(&self) -> usize {
        self.catalog.collections()[self.state.collection_index].len()
    }

    /// Registers a listener called with the new state after every change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Applies an action. On error the state is left as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Effect, CatalogError> {
        let mut next = self.state;
        let effect = update(&mut next, &self.catalog, action).inspect_err(|e| {
            warn!("Rejected {:?} at {:?}: {}", action, self.state, e);
        })?;

        if effect == Effect::Changed {
            self.state = next;
            for listener in &mut self.listeners {
                listener(&self.state);
            }
        }
        Ok(effect)
    }

}
