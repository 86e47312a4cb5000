//! # Navigator
//!
//! Pure index arithmetic over the catalog's shape. Every function wraps around
//! at both ends and fails fast on an out-of-range input instead of clamping.
//!
//! ```text
//! next:      (i + 1) % size
//! previous:  (i + size - 1) % size
//! ```
//!
//! The `+ size` in `previous` keeps the intermediate value non-negative. With
//! `usize` a plain `i - 1` at `i == 0` would underflow.

use super::catalog::{Catalog, CatalogError, IndexKind};

fn check(kind: IndexKind, index: usize, len: usize) -> Result<(), CatalogError> {
    if index < len {
        Ok(())
    } else {
        Err(CatalogError::InvalidIndex { kind, index, len })
    }
}

pub fn next_artwork(
    catalog: &Catalog,
    collection_index: usize,
    artwork_index: usize,
) -> Result<usize, CatalogError> {
    let size = catalog.collection_len(collection_index)?;
    check(IndexKind::Artwork, artwork_index, size)?;
    Ok((artwork_index + 1) % size)
}

pub fn previous_artwork(
    catalog: &Catalog,
    collection_index: usize,
    artwork_index: usize,
) -> Result<usize, CatalogError> {
    let size = catalog.collection_len(collection_index)?;
    check(IndexKind::Artwork, artwork_index, size)?;
    Ok((artwork_index + size - 1) % size)
}

pub fn next_collection(catalog: &Catalog, collection_index: usize) -> Result<usize, CatalogError> {
    let count = catalog.len();
    check(IndexKind::Collection, collection_index, count)?;
    Ok((collection_index + 1) % count)
}

pub fn previous_collection(
    catalog: &Catalog,
    collection_index: usize,
) -> Result<usize, CatalogError> {
    let count = catalog.len();
    check(IndexKind::Collection, collection_index, count)?;
    Ok((collection_index + count - 1) % count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::small_catalog;

    #[test]
    fn test_round_trip_every_index() {
        let catalog = Catalog::builtin();
        for c in 0..catalog.len() {
            let size = catalog.collection_len(c).unwrap();
            for i in 0..size {
                let next = next_artwork(&catalog, c, i).unwrap();
                let prev = previous_artwork(&catalog, c, i).unwrap();
                assert!(next < size);
                assert!(prev < size);
                assert_eq!(previous_artwork(&catalog, c, next).unwrap(), i);
                assert_eq!(next_artwork(&catalog, c, prev).unwrap(), i);
            }
        }
    }

    #[test]
    fn test_artwork_wraparound() {
        let catalog = Catalog::builtin();
        assert_eq!(next_artwork(&catalog, 0, 4).unwrap(), 0);
        assert_eq!(previous_artwork(&catalog, 0, 0).unwrap(), 4);
        assert_eq!(next_artwork(&catalog, 1, 3).unwrap(), 0);
        assert_eq!(previous_artwork(&catalog, 1, 0).unwrap(), 3);
    }

    #[test]
    fn test_collection_wraparound() {
        let catalog = Catalog::builtin();
        assert_eq!(next_collection(&catalog, 1).unwrap(), 0);
        assert_eq!(previous_collection(&catalog, 0).unwrap(), 1);
        assert_eq!(next_collection(&catalog, 0).unwrap(), 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let catalog = small_catalog(&[7]);
        for start in 0..7 {
            let mut i = start;
            for _ in 0..7 {
                i = next_artwork(&catalog, 0, i).unwrap();
            }
            assert_eq!(i, start);
        }
    }

    #[test]
    fn test_single_artwork_collection_is_fixed_point() {
        let catalog = small_catalog(&[1]);
        assert_eq!(next_artwork(&catalog, 0, 0).unwrap(), 0);
        assert_eq!(previous_artwork(&catalog, 0, 0).unwrap(), 0);
        assert_eq!(next_collection(&catalog, 0).unwrap(), 0);
        assert_eq!(previous_collection(&catalog, 0).unwrap(), 0);
    }

    #[test]
    fn test_paging_scenario() {
        let catalog = Catalog::builtin();
        let mut i = 0;
        let mut seen = Vec::new();
        for _ in 0..5 {
            i = next_artwork(&catalog, 0, i).unwrap();
            seen.push(i);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_invalid_collection_index() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            next_artwork(&catalog, 2, 0),
            Err(CatalogError::InvalidIndex {
                kind: IndexKind::Collection,
                ..
            })
        ));
        assert!(previous_collection(&catalog, 5).is_err());
        assert!(next_collection(&catalog, 2).is_err());
    }

    #[test]
    fn test_invalid_artwork_index_is_not_clamped() {
        let catalog = Catalog::builtin();
        assert_eq!(
            previous_artwork(&catalog, 1, 4),
            Err(CatalogError::InvalidIndex {
                kind: IndexKind::Artwork,
                index: 4,
                len: 4,
            })
        );
    }
}
