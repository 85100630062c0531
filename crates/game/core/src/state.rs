//! Mutable quest and inventory state.
//!
//! [`GameState`] is the one mutable aggregate in the engine. Everything in it
//! moves in a single direction: items are appended or removed one instance at
//! a time, words and flags are only ever added. The dialogue close step and
//! ground-item pickup are the only writers.

use std::collections::{BTreeSet, VecDeque};

use crate::ids::{ItemId, QuestFlag, WordId};

/// Session-wide quest/inventory state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Held items as a multiset; duplicates are allowed, there is no
    /// stacking.
    inventory: Vec<ItemId>,
    /// Discovered vocabulary. Insertion is idempotent and permanent.
    discovered: BTreeSet<WordId>,
    /// Quest flags. Set-true is idempotent; a set flag never reverts.
    flags: BTreeSet<QuestFlag>,
    /// Per-ground-item collected bits, indexed by registry position.
    collected: Vec<bool>,
    /// Discovery events not yet consumed by presentation, oldest first.
    word_events: VecDeque<WordId>,
}

impl GameState {
    /// Fresh state for a world with `ground_items` placed pickups.
    pub fn new(ground_items: usize) -> Self {
        Self {
            collected: vec![false; ground_items],
            ..Self::default()
        }
    }

    // ===== predicates exposed to content scripts =====

    /// Whether at least one instance of `item` is held.
    pub fn has(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    pub fn has_all(&self, items: &[ItemId]) -> bool {
        items.iter().all(|&item| self.has(item))
    }

    pub fn flag(&self, flag: QuestFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn knows(&self, word: WordId) -> bool {
        self.discovered.contains(&word)
    }

    // ===== queries =====

    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    pub fn discovered_words(&self) -> &BTreeSet<WordId> {
        &self.discovered
    }

    pub fn flags(&self) -> &BTreeSet<QuestFlag> {
        &self.flags
    }

    pub fn is_collected(&self, index: usize) -> bool {
        self.collected.get(index).copied().unwrap_or(false)
    }

    // ===== mutations =====

    /// Appends an item unconditionally. Ground pickups go through this, so a
    /// second instance of the same item id is possible.
    pub fn acquire(&mut self, item: ItemId) {
        self.inventory.push(item);
    }

    /// Appends an item unless one is already held. Dialogue grants use this
    /// so repeated branches cannot stack quest rewards.
    pub fn grant_unique(&mut self, item: ItemId) -> bool {
        if self.has(item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Removes one instance of `item` if present. Taking an item that is not
    /// held is a no-op, not an error.
    pub fn take(&mut self, item: ItemId) -> bool {
        if let Some(index) = self.inventory.iter().position(|&held| held == item) {
            self.inventory.remove(index);
            true
        } else {
            false
        }
    }

    /// Adds `word` to the lexicon. Returns false (and queues nothing) if the
    /// word was already known.
    pub fn discover(&mut self, word: WordId) -> bool {
        if !self.discovered.insert(word) {
            return false;
        }
        self.word_events.push_back(word);
        true
    }

    /// Sets a quest flag. Idempotent; flags never unset.
    pub fn set_flag(&mut self, flag: QuestFlag) -> bool {
        self.flags.insert(flag)
    }

    /// Marks a ground-item instance as collected. One-way.
    pub fn mark_collected(&mut self, index: usize) {
        if let Some(slot) = self.collected.get_mut(index) {
            *slot = true;
        }
    }

    /// Drains queued word-discovery events in discovery order. Presentation
    /// calls this once per frame to feed the popup queue.
    pub fn drain_word_events(&mut self) -> impl Iterator<Item = WordId> + '_ {
        self.word_events.drain(..)
    }
}
