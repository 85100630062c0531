//! The storybook: authored dialogue wired to the engine's script seam.

mod npcs;
mod points;

pub use npcs::npc_dialogue;
pub use points::point_dialogue;

use mantra_core::{
    DialoguePayload, GameState, ScriptOracle,
    ids::{ItemId, NpcId, PointId, QuestFlag},
};

use crate::ContentSet;

/// Owns the loaded content and answers script queries for it.
#[derive(Clone, Debug)]
pub struct Storybook {
    content: ContentSet,
}

impl Storybook {
    pub fn new(content: ContentSet) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &ContentSet {
        &self.content
    }
}

impl ScriptOracle for Storybook {
    fn npc_dialogue(&self, npc: NpcId, state: &GameState) -> DialoguePayload {
        npc_dialogue(npc, state)
    }

    fn point_dialogue(&self, point: PointId, state: &GameState) -> DialoguePayload {
        point_dialogue(point, state, &self.content.registry.recipes)
    }
}

/// Whether an NPC currently has something new for the player: a first
/// meeting, or a turn-in that is ready. Drives the quest marker over their
/// head.
pub fn quest_available(npc: NpcId, state: &GameState) -> bool {
    match npc {
        NpcId::Guru => !state.flag(QuestFlag::MetGuru),
        NpcId::Vrihi => {
            !state.flag(QuestFlag::MetVrihi)
                || (state.has(ItemId::Khandah) && !state.has(ItemId::KrmijaDye))
        }
        NpcId::Bodhi => {
            !state.flag(QuestFlag::MetBodhi)
                || (state.flag(QuestFlag::OfferingPlaced) && !state.has(ItemId::NilaDye))
        }
        NpcId::Chitra => !state.flag(QuestFlag::MetChitra),
        NpcId::Elder => !state.flag(QuestFlag::MetElder),
        NpcId::Pippali => !state.flag(QuestFlag::MetPippali),
        NpcId::Makara => !state.flag(QuestFlag::MetMakara),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_marker_tracks_turn_ins() {
        let mut state = GameState::new(0);
        assert!(quest_available(NpcId::Vrihi, &state));

        state.set_flag(QuestFlag::MetVrihi);
        assert!(!quest_available(NpcId::Vrihi, &state));

        state.acquire(ItemId::Khandah);
        assert!(quest_available(NpcId::Vrihi, &state));

        state.acquire(ItemId::KrmijaDye);
        assert!(!quest_available(NpcId::Vrihi, &state));
    }
}
