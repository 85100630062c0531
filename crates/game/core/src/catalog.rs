//! Static catalog entry types.
//!
//! The word and item catalogs are immutable data keyed by their id enums.
//! The content crate loads them from data files; the engine only reads them.

use std::collections::BTreeMap;

use crate::ids::{ItemId, WordId};

/// One vocabulary entry: a Sanskrit word and where it traveled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordEntry {
    pub id: WordId,
    /// Source-language spelling with diacritics.
    pub spelling: String,
    /// English gloss.
    pub gloss: String,
    /// Optional Chinese rendering.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chinese: Option<String>,
    /// Etymology note shown on discovery.
    pub note: String,
}

/// One item definition, including its presentation hints and the word it
/// teaches when picked up.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEntry {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub word: Option<WordId>,
}

/// Immutable id-keyed catalogs for one session.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalogs {
    pub words: BTreeMap<WordId, WordEntry>,
    pub items: BTreeMap<ItemId, ItemEntry>,
}

impl Catalogs {
    pub fn word(&self, id: WordId) -> Option<&WordEntry> {
        self.words.get(&id)
    }

    pub fn item(&self, id: ItemId) -> Option<&ItemEntry> {
        self.items.get(&id)
    }
}
