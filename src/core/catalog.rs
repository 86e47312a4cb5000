//! # Catalog
//!
//! The fixed, read-only dataset: an ordered list of collections, each an
//! ordered, non-empty list of artworks.
//!
//! ```text
//! Catalog
//! ├── [0] Vincent van Gogh  (5 artworks)
//! └── [1] Marc Chagall      (4 artworks)
//! ```
//!
//! The catalog is built once at startup and shared as `Arc<Catalog>`. It has
//! no mutation API. Emptiness is rejected in `Catalog::new`, so every lookup
//! downstream can assume `len() > 0` for every collection.

use std::fmt;

use super::strings::{ImageId, TextId};

/// A single artwork. No identity beyond its position in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub title: TextId,
    pub artist: TextId,
    pub year: i32,
    pub image: ImageId,
}

impl Artwork {
    pub const fn new(title: TextId, artist: TextId, year: i32, image: ImageId) -> Self {
        Self {
            title,
            artist,
            year,
            image,
        }
    }
}

/// Which sequence an out-of-range index was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Collection,
    Artwork,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Collection => f.write_str("collection"),
            IndexKind::Artwork => f.write_str("artwork"),
        }
    }
}

/// Data errors in the catalog or in indices addressed against it.
///
/// None of these are recoverable at runtime: the dataset is compiled in, so
/// hitting one means a data-entry or caller bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Index outside `[0, len)` for its sequence.
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
    /// A collection with zero artworks.
    EmptyCollection { collection: usize },
    /// A catalog with zero collections.
    NoCollections,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidIndex { kind, index, len } => {
                write!(f, "invalid {kind} index {index} (len {len})")
            }
            CatalogError::EmptyCollection { collection } => {
                write!(f, "collection {collection} has no artworks")
            }
            CatalogError::NoCollections => write!(f, "catalog has no collections"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    collections: Vec<Vec<Artwork>>,
}

impl Catalog {
    /// Build a catalog, rejecting empty collections up front.
    pub fn new(collections: Vec<Vec<Artwork>>) -> Result<Self, CatalogError> {
        if collections.is_empty() {
            return Err(CatalogError::NoCollections);
        }
        if let Some(collection) = collections.iter().position(Vec::is_empty) {
            return Err(CatalogError::EmptyCollection { collection });
        }
        Ok(Self { collections })
    }

    /// The built-in dataset.
    pub fn builtin() -> Self {
        use super::strings::*;

        let van_gogh = vec![
            Artwork::new(
                CAFE_TERRACE,
                ARTIST_VAN_GOGH,
                1888,
                ImageId::new("cafe_terrace_at_night"),
            ),
            Artwork::new(BEDROOM_IN_ARLES, ARTIST_VAN_GOGH, 1888, ImageId::new("bedroom_in_arles")),
            Artwork::new(THE_OLD_MILL, ARTIST_VAN_GOGH, 1888, ImageId::new("the_old_mill")),
            Artwork::new(THE_YELLOW_HOUSE, ARTIST_VAN_GOGH, 1888, ImageId::new("the_yellow_house")),
            Artwork::new(THE_OLIVE_TREES, ARTIST_VAN_GOGH, 1889, ImageId::new("the_olive_trees")),
        ];
        let chagall = vec![
            Artwork::new(
                I_AND_THE_VILLAGE,
                ARTIST_CHAGALL,
                1911,
                ImageId::new("i_and_the_village"),
            ),
            Artwork::new(RECLINING_NUDE, ARTIST_CHAGALL, 1911, ImageId::new("reclining_nude")),
            Artwork::new(
                SELF_PORTRAIT_SEVEN_FINGERS,
                ARTIST_CHAGALL,
                1913,
                ImageId::new("self_portrait_with_seven_fingers"),
            ),
            Artwork::new(THE_MARKETPLACE, ARTIST_CHAGALL, 1917, ImageId::new("the_marketplace")),
        ];

        // Both collections are non-empty literals above.
        Self {
            collections: vec![van_gogh, chagall],
        }
    }

    pub fn collections(&self) -> &[Vec<Artwork>] {
        &self.collections
    }

    /// Number of collections. Always at least one.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn artworks_of(&self, collection_index: usize) -> Result<&[Artwork], CatalogError> {
        self.collections
            .get(collection_index)
            .map(Vec::as_slice)
            .ok_or(CatalogError::InvalidIndex {
                kind: IndexKind::Collection,
                index: collection_index,
                len: self.collections.len(),
            })
    }

    pub fn collection_len(&self, collection_index: usize) -> Result<usize, CatalogError> {
        self.artworks_of(collection_index).map(<[Artwork]>::len)
    }

    pub fn artwork(
        &self,
        collection_index: usize,
        artwork_index: usize,
    ) -> Result<&Artwork, CatalogError> {
        let artworks = self.artworks_of(collection_index)?;
        artworks.get(artwork_index).ok_or(CatalogError::InvalidIndex {
            kind: IndexKind::Artwork,
            index: artwork_index,
            len: artworks.len(),
        })
    }
}
