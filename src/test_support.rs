//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::{Artwork, Catalog};
use crate::core::state::{Store, ViewState};
use crate::core::strings::{ImageId, TextId};

/// A placeholder artwork distinguished only by year.
pub fn artwork(year: i32) -> Artwork {
    Artwork::new(
        TextId::new("test_title"),
        TextId::new("test_artist"),
        year,
        ImageId::new("test_image"),
    )
}

/// Builds a catalog with one collection per entry in `sizes`.
/// Years encode position as `1000 * collection + artwork`.
pub fn small_catalog(sizes: &[usize]) -> Catalog {
    let collections = sizes
        .iter()
        .enumerate()
        .map(|(c, &n)| (0..n).map(|i| artwork((1000 * c + i) as i32)).collect())
        .collect();
    Catalog::new(collections).expect("test catalog sizes must be non-zero")
}

/// A store over the built-in catalog starting at (0, 0).
pub fn test_store() -> Store {
    Store::new(Arc::new(Catalog::builtin()), ViewState::default())
        .expect("origin is valid for the builtin catalog")
}
