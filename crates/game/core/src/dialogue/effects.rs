//! Deferred dialogue effects.
//!
//! A payload accumulates its effects while the text plays; they are applied
//! in one atomic batch when the dialogue closes. Giving an already-held item
//! and taking a missing item are both no-ops.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::ids::{ItemId, QuestFlag, WordId};
use crate::state::GameState;

/// The give/take/word/flag effects pending behind an open dialogue.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueEffects {
    pub words: ArrayVec<WordId, { GameConfig::MAX_WORD_EFFECTS }>,
    pub give: ArrayVec<ItemId, { GameConfig::MAX_ITEM_EFFECTS }>,
    pub take: ArrayVec<ItemId, { GameConfig::MAX_ITEM_EFFECTS }>,
    pub set_flags: ArrayVec<QuestFlag, { GameConfig::MAX_FLAG_EFFECTS }>,
}

impl DialogueEffects {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
            && self.give.is_empty()
            && self.take.is_empty()
            && self.set_flags.is_empty()
    }
}

/// Applies a batch of effects to the quest state: discover every pending
/// word, grant each give (skipping held items), take one instance of each
/// take, set each flag. Order matters only in that grants precede takes, so
/// a recipe can consume inputs it just replaced.
pub fn apply_effects(state: &mut GameState, effects: &DialogueEffects) {
    for &word in &effects.words {
        state.discover(word);
    }
    for &item in &effects.give {
        state.grant_unique(item);
    }
    for &item in &effects.take {
        state.take(item);
    }
    for &flag in &effects.set_flags {
        state.set_flag(flag);
    }
}
