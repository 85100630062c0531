//! Entity registry loader: NPCs, ground pickups, interaction points, and the
//! recipe table.

use std::path::Path;

use mantra_core::{
    EntityRegistry, GroundItemSpec, NpcSpec, PointKind, PointSpec, Recipe,
    ids::{NpcId, PointId},
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NpcCatalog {
    npcs: Vec<NpcSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroundItemCatalog {
    ground_items: Vec<GroundItemSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PointCatalog {
    points: Vec<PointSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

/// Loader assembling the full [`EntityRegistry`] from four RON catalogs.
pub struct RegistryLoader;

impl RegistryLoader {
    /// Load the registry from a directory holding the four catalog files.
    pub fn load(dir: &Path) -> LoadResult<EntityRegistry> {
        Self::parse(
            &read_file(&dir.join("npcs.ron"))?,
            &read_file(&dir.join("ground_items.ron"))?,
            &read_file(&dir.join("points.ron"))?,
            &read_file(&dir.join("recipes.ron"))?,
        )
    }

    /// The registry shipped with this crate.
    pub fn builtin() -> LoadResult<EntityRegistry> {
        Self::parse(
            include_str!("../../data/npcs.ron"),
            include_str!("../../data/ground_items.ron"),
            include_str!("../../data/points.ron"),
            include_str!("../../data/recipes.ron"),
        )
    }

    fn parse(npcs: &str, ground_items: &str, points: &str, recipes: &str) -> LoadResult<EntityRegistry> {
        let npcs: NpcCatalog = ron::from_str(npcs)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC catalog RON: {}", e))?;
        let ground: GroundItemCatalog = ron::from_str(ground_items)
            .map_err(|e| anyhow::anyhow!("Failed to parse ground-item catalog RON: {}", e))?;
        let points: PointCatalog = ron::from_str(points)
            .map_err(|e| anyhow::anyhow!("Failed to parse point catalog RON: {}", e))?;
        let recipes: RecipeCatalog = ron::from_str(recipes)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipe table RON: {}", e))?;

        let registry = EntityRegistry {
            npcs: npcs.npcs,
            ground_items: ground.ground_items,
            points: points.points,
            recipes: recipes.recipes,
        };
        Self::validate(&registry)?;
        Ok(registry)
    }

    /// Cross-reference checks that make a bad registry a startup error
    /// instead of silent filler dialogue.
    fn validate(registry: &EntityRegistry) -> LoadResult<()> {
        for id in NpcId::iter() {
            anyhow::ensure!(registry.npc(id).is_some(), "registry missing NPC: {id}");
        }
        for id in PointId::iter() {
            anyhow::ensure!(registry.point(id).is_some(), "registry missing point: {id}");
        }
        anyhow::ensure!(
            !registry.ground_items.is_empty(),
            "registry has no ground items"
        );
        for recipe in &registry.recipes {
            let station = registry
                .point(recipe.station)
                .ok_or_else(|| anyhow::anyhow!("recipe references unknown station"))?;
            anyhow::ensure!(
                station.kind == PointKind::Craft,
                "recipe station {} is not a craft point",
                recipe.station
            );
            anyhow::ensure!(
                !recipe.inputs.is_empty(),
                "recipe at {} has no inputs",
                recipe.station
            );
        }
        Ok(())
    }
}
