//! Deterministic simulation core for the tile-world dialogue engine.
//!
//! `mantra-core` owns the rules: world generation, movement and collision,
//! proximity targeting, quest/inventory state, and the dialogue state
//! machine. It performs no I/O and holds no clocks; the runtime crate drives
//! it from a frame loop and the content crate supplies catalogs and scripts
//! through the [`ScriptOracle`] seam.

pub mod catalog;
pub mod config;
pub mod dialogue;
pub mod ids;
pub mod interact;
pub mod map;
pub mod player;
pub mod script;
pub mod state;

pub use catalog::{Catalogs, ItemEntry, WordEntry};
pub use config::GameConfig;
pub use dialogue::{
    DialogueEffects, DialoguePayload, DialoguePhase, DialogueSignal, DialogueState, Speaker,
    apply_effects,
};
pub use ids::{ItemId, NpcId, PointId, QuestFlag, WordId};
pub use interact::{
    EntityRegistry, GroundItemSpec, InteractTarget, NpcSpec, PointKind, PointSpec, Position,
    Recipe, nearest_interactable, nearest_with_config,
};
pub use map::{Pcg32, Region, TileKind, WorldGrid, WorldSeed, generate_world};
pub use player::PlayerState;
pub use script::ScriptOracle;
pub use state::GameState;
