//! Word catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use mantra_core::{WordEntry, ids::WordId};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file};

/// Word catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCatalog {
    pub words: Vec<WordEntry>,
}

/// Loader for the vocabulary catalog from RON.
pub struct WordLoader;

impl WordLoader {
    /// Load the word catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<WordId, WordEntry>> {
        Self::parse(&read_file(path)?)
    }

    /// The catalog shipped with this crate.
    pub fn builtin() -> LoadResult<BTreeMap<WordId, WordEntry>> {
        Self::parse(include_str!("../../data/words.ron"))
    }

    fn parse(content: &str) -> LoadResult<BTreeMap<WordId, WordEntry>> {
        let catalog: WordCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse word catalog RON: {}", e))?;

        let mut words = BTreeMap::new();
        for entry in catalog.words {
            anyhow::ensure!(
                words.insert(entry.id, entry.clone()).is_none(),
                "duplicate word entry: {}",
                entry.id
            );
        }
        for id in WordId::iter() {
            anyhow::ensure!(words.contains_key(&id), "word catalog missing entry: {id}");
        }
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_every_word() {
        let words = WordLoader::builtin().unwrap();
        assert_eq!(words.len(), WordId::iter().count());
        let vrihi = &words[&WordId::Vrihi];
        assert_eq!(vrihi.spelling, "vrīhi");
        assert_eq!(vrihi.gloss, "rice");
        assert!(words[&WordId::Buddha].chinese.is_some());
        assert!(words[&WordId::Karma].chinese.is_none());
    }
}
