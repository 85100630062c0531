//! Authored content and loaders for the tile-world dialogue engine.
//!
//! This crate houses the static game data and the scripted dialogue:
//! - Word and item catalogs (data-driven via RON)
//! - NPC, ground-item, and interaction-point registries (data-driven via RON)
//! - Crafting recipe table (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//! - The NPC/point conversation trees (code — they branch on quest state)
//!
//! Content is consumed by the runtime session and never appears in game
//! state. All loaders use mantra-core types directly with serde for RON/TOML
//! deserialization.

pub mod script;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use script::{Storybook, npc_dialogue, point_dialogue, quest_available};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ItemLoader, RegistryLoader, WordLoader};

use mantra_core::{Catalogs, EntityRegistry};

/// The full content bundle for one session: id-keyed catalogs plus the
/// placed-entity registry. Immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentSet {
    pub catalogs: Catalogs,
    pub registry: EntityRegistry,
}

#[cfg(feature = "loaders")]
impl ContentSet {
    /// Loads the content shipped with this crate. Any inconsistency in the
    /// built-in data is a startup-fatal bug, surfaced as an error.
    pub fn builtin() -> loaders::LoadResult<Self> {
        Ok(Self {
            catalogs: Catalogs {
                words: WordLoader::builtin()?,
                items: ItemLoader::builtin()?,
            },
            registry: RegistryLoader::builtin()?,
        })
    }
}

#[cfg(all(test, feature = "loaders"))]
mod tests {
    use super::*;
    use mantra_core::ids::{ItemId, WordId};

    #[test]
    fn builtin_content_loads_and_cross_references() {
        let content = ContentSet::builtin().unwrap();
        // Every placed ground item has a catalog entry, and its word (when
        // set) has one too.
        for ground in &content.registry.ground_items {
            let item = content.catalogs.item(ground.item).unwrap();
            if let Some(word) = item.word {
                assert!(content.catalogs.word(word).is_some());
            }
        }
        // Recipe outputs resolve as well.
        for recipe in &content.registry.recipes {
            assert!(content.catalogs.item(recipe.output).is_some());
        }
        assert!(content.catalogs.word(WordId::Sumeru).is_some());
        assert!(content.catalogs.item(ItemId::Offering).is_some());
    }
}
