//! Entity registry and proximity-based interaction targeting.
//!
//! The registry holds the fixed entity lists loaded from the content tables:
//! NPCs, ground pickups, and interaction points. The proximity resolver picks
//! the single nearest interactable within range, scanning the categories in a
//! fixed priority order.

use crate::config::GameConfig;
use crate::ids::{ItemId, NpcId, PointId};
use crate::player::PlayerState;
use crate::state::GameState;

/// Discrete grid position for placed entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Center of the occupied cell in continuous coordinates.
    pub fn center(self) -> (f32, f32) {
        (self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

/// A scripted character standing at a fixed cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcSpec {
    pub id: NpcId,
    pub name: String,
    pub position: Position,
    /// Body/head colors for the sprite painter.
    pub body_color: String,
    pub head_color: String,
}

/// A collectible item lying in the world. The collected bit lives in
/// [`GameState`], indexed by this entry's position in the registry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItemSpec {
    pub item: ItemId,
    pub position: Position,
}

/// Behavior class of an interaction point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointKind {
    /// Crafting station backed by the recipe table.
    Craft,
    /// The story-terminal artifact.
    Artifact,
}

/// A fixed non-NPC interactable (craft station or story artifact).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSpec {
    pub id: PointId,
    pub name: String,
    pub icon: String,
    pub kind: PointKind,
    pub position: Position,
}

/// Input-items → output-item transformation available at one craft station.
/// Fires only when every input is simultaneously held.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub station: PointId,
    pub inputs: Vec<ItemId>,
    pub output: ItemId,
    pub message: String,
}

/// Fixed entity lists for one world. Immutable after load.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRegistry {
    pub npcs: Vec<NpcSpec>,
    pub ground_items: Vec<GroundItemSpec>,
    pub points: Vec<PointSpec>,
    pub recipes: Vec<Recipe>,
}

impl EntityRegistry {
    pub fn npc(&self, id: NpcId) -> Option<&NpcSpec> {
        self.npcs.iter().find(|npc| npc.id == id)
    }

    pub fn point(&self, id: PointId) -> Option<&PointSpec> {
        self.points.iter().find(|point| point.id == id)
    }
}

/// The nearest interactable found by the proximity scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractTarget {
    Npc(NpcId),
    /// Index into [`EntityRegistry::ground_items`].
    GroundItem(usize),
    Point(PointId),
}

fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

/// Finds the single closest interactable entity within `radius` of the
/// player, or `None`.
///
/// Categories are scanned NPCs → ground items → points, and only a strictly
/// smaller distance replaces the current best, so earlier categories win
/// exact ties. Collected ground items never appear.
pub fn nearest_interactable(
    player: &PlayerState,
    registry: &EntityRegistry,
    state: &GameState,
    radius: f32,
) -> Option<InteractTarget> {
    let (px, py) = player.position();
    let mut best = None;
    let mut best_dist = radius;

    for npc in &registry.npcs {
        let (cx, cy) = npc.position.center();
        let d = distance(px, py, cx, cy);
        if d < best_dist {
            best_dist = d;
            best = Some(InteractTarget::Npc(npc.id));
        }
    }
    for (index, ground) in registry.ground_items.iter().enumerate() {
        if state.is_collected(index) {
            continue;
        }
        let (cx, cy) = ground.position.center();
        let d = distance(px, py, cx, cy);
        if d < best_dist {
            best_dist = d;
            best = Some(InteractTarget::GroundItem(index));
        }
    }
    for point in &registry.points {
        let (cx, cy) = point.position.center();
        let d = distance(px, py, cx, cy);
        if d < best_dist {
            best_dist = d;
            best = Some(InteractTarget::Point(point.id));
        }
    }

    best
}

/// Convenience wrapper using the configured interaction radius.
pub fn nearest_with_config(
    player: &PlayerState,
    registry: &EntityRegistry,
    state: &GameState,
    config: &GameConfig,
) -> Option<InteractTarget> {
    nearest_interactable(player, registry, state, config.interact_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EntityRegistry {
        EntityRegistry {
            npcs: vec![NpcSpec {
                id: NpcId::Vrihi,
                name: "Farmer Vrīhi".into(),
                position: Position::new(10, 10),
                body_color: "#6B8E23".into(),
                head_color: "#deb887".into(),
            }],
            ground_items: vec![GroundItemSpec {
                item: ItemId::Bimba,
                position: Position::new(10, 10),
            }],
            points: vec![PointSpec {
                id: PointId::FarmKitchen,
                name: "Farm Kitchen".into(),
                icon: "🔥".into(),
                kind: PointKind::Craft,
                position: Position::new(12, 10),
            }],
            recipes: Vec::new(),
        }
    }

    #[test]
    fn nothing_in_range_returns_none() {
        let registry = registry();
        let state = GameState::new(registry.ground_items.len());
        let player = PlayerState::at(40.0, 40.0);
        assert_eq!(nearest_interactable(&player, &registry, &state, 2.0), None);
    }

    #[test]
    fn npc_wins_exact_tie_with_ground_item() {
        // NPC and item share a cell; the NPC is scanned first and only a
        // strictly smaller distance may replace it.
        let registry = registry();
        let state = GameState::new(registry.ground_items.len());
        let player = PlayerState::at(10.6, 10.5);
        assert_eq!(
            nearest_interactable(&player, &registry, &state, 2.0),
            Some(InteractTarget::Npc(NpcId::Vrihi))
        );
    }

    #[test]
    fn closest_across_categories_wins() {
        let registry = registry();
        let state = GameState::new(registry.ground_items.len());
        let player = PlayerState::at(12.4, 10.5);
        assert_eq!(
            nearest_interactable(&player, &registry, &state, 2.0),
            Some(InteractTarget::Point(PointId::FarmKitchen))
        );
    }

    #[test]
    fn collected_items_leave_proximity_results() {
        let mut registry = registry();
        registry.npcs.clear();
        registry.points.clear();
        let mut state = GameState::new(registry.ground_items.len());
        let player = PlayerState::at(10.5, 10.5);
        assert_eq!(
            nearest_interactable(&player, &registry, &state, 2.0),
            Some(InteractTarget::GroundItem(0))
        );
        state.mark_collected(0);
        assert_eq!(nearest_interactable(&player, &registry, &state, 2.0), None);
    }
}
