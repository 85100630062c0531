//! Item catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use mantra_core::{ItemEntry, ids::ItemId};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemEntry>,
}

/// Loader for the item catalog from RON.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<ItemId, ItemEntry>> {
        Self::parse(&read_file(path)?)
    }

    /// The catalog shipped with this crate.
    pub fn builtin() -> LoadResult<BTreeMap<ItemId, ItemEntry>> {
        Self::parse(include_str!("../../data/items.ron"))
    }

    fn parse(content: &str) -> LoadResult<BTreeMap<ItemId, ItemEntry>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut items = BTreeMap::new();
        for entry in catalog.items {
            anyhow::ensure!(
                items.insert(entry.id, entry.clone()).is_none(),
                "duplicate item entry: {}",
                entry.id
            );
        }
        for id in ItemId::iter() {
            anyhow::ensure!(items.contains_key(&id), "item catalog missing entry: {id}");
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mantra_core::ids::WordId;

    #[test]
    fn builtin_catalog_covers_every_item() {
        let items = ItemLoader::builtin().unwrap();
        assert_eq!(items.len(), ItemId::iter().count());
        assert_eq!(items[&ItemId::KrmijaDye].word, Some(WordId::Krmija));
        // The composed dish teaches no single word.
        assert_eq!(items[&ItemId::Offering].word, None);
    }
}
