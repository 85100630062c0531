//! Seam between the engine and the authored content.
//!
//! The content crate implements [`ScriptOracle`] for its storybook; the
//! runtime calls through the trait so the engine never depends on the
//! scripts themselves. Implementations always answer — a target with nothing
//! meaningful to say returns a neutral filler payload rather than an error.

use crate::dialogue::DialoguePayload;
use crate::ids::{NpcId, PointId};
use crate::state::GameState;

/// Maps an interaction target and the current quest state to the dialogue to
/// play. Pure: same target and state always produce the same payload.
pub trait ScriptOracle {
    /// Conversation for talking to an NPC.
    fn npc_dialogue(&self, npc: NpcId, state: &GameState) -> DialoguePayload {
        let _ = (npc, state);
        DialoguePayload::filler()
    }

    /// Reaction for using an interaction point (craft station or artifact).
    fn point_dialogue(&self, point: PointId, state: &GameState) -> DialoguePayload {
        let _ = (point, state);
        DialoguePayload::nothing_happens()
    }
}
