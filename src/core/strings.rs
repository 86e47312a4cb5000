//! # Display Strings
//!
//! Artworks never carry raw display text. They hold a `TextId`, an opaque key
//! into a string table, and the presentation layer resolves it at render time.
//! Only an English table exists today; a second locale is another `&[(key, text)]`
//! slice plus a match arm in `resolve_in`.

use std::fmt;

/// Opaque reference to a piece of localized display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextId(&'static str);

impl TextId {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &'static str {
        self.0
    }
}

/// Opaque reference to an image resource (the drawable name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(&'static str);

impl ImageId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
}

// ── Keys ────────────────────────────────────────────────────────────────────

pub const ARTIST_VAN_GOGH: TextId = TextId::new("artist_van_gogh");
pub const ARTIST_CHAGALL: TextId = TextId::new("artist_chagall");

pub const CAFE_TERRACE: TextId = TextId::new("cafe_terrace");
pub const BEDROOM_IN_ARLES: TextId = TextId::new("bedroom_in_arles");
pub const THE_OLD_MILL: TextId = TextId::new("the_old_mill");
pub const THE_YELLOW_HOUSE: TextId = TextId::new("the_yellow_house");
pub const THE_OLIVE_TREES: TextId = TextId::new("the_olive_trees");

pub const I_AND_THE_VILLAGE: TextId = TextId::new("i_and_the_village");
pub const RECLINING_NUDE: TextId = TextId::new("reclining_nude");
pub const SELF_PORTRAIT_SEVEN_FINGERS: TextId = TextId::new("self_portrait_seven_fingers");
pub const THE_MARKETPLACE: TextId = TextId::new("the_marketplace");

// ── Tables ──────────────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("artist_van_gogh", "Vincent van Gogh"),
    ("artist_chagall", "Marc Chagall"),
    ("cafe_terrace", "Café Terrace at Night"),
    ("bedroom_in_arles", "Bedroom in Arles"),
    ("the_old_mill", "The Old Mill"),
    ("the_yellow_house", "The Yellow House"),
    ("the_olive_trees", "The Olive Trees"),
    ("i_and_the_village", "I and the Village"),
    ("reclining_nude", "Reclining Nude"),
    ("self_portrait_seven_fingers", "Self-Portrait with Seven Fingers"),
    ("the_marketplace", "The Marketplace"),
];

/// Resolve a text reference in the default locale.
///
/// Unknown keys fall back to the key itself so a missing translation shows up
/// on screen instead of blanking the field.
pub fn resolve(id: TextId) -> &'static str {
    resolve_in(Locale::default(), id)
}

pub fn resolve_in(locale: Locale, id: TextId) -> &'static str {
    let table = match locale {
        Locale::English => EN,
    };
    table
        .iter()
        .find(|(key, _)| *key == id.key())
        .map(|(_, text)| *text)
        .unwrap_or(id.key())
}
