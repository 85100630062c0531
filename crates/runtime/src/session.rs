//! The game session: one loop, one owner of all engine state.
//!
//! [`Session`] wires the generated world, the loaded content, and the engine
//! state together and advances them from a single-threaded frame loop.
//! Presentation feeds it an [`InputFrame`] plus elapsed time each frame and
//! reads everything it draws through `&self` queries between ticks.

use mantra_content::{ContentSet, Storybook, quest_available};
use mantra_core::{
    DialoguePayload, DialogueSignal, DialogueState, GameConfig, GameState, InteractTarget,
    PlayerState, Region, ScriptOracle, Speaker, WordId, WorldGrid, WorldSeed, generate_world,
    ids::{NpcId, QuestFlag},
    nearest_with_config,
};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::input::{Buttons, InputFrame};

/// Construction options for a session.
#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    pub config: GameConfig,
    /// World seed; `None` draws a fresh one so each session gets its own
    /// world variation.
    pub seed: Option<u64>,
}

impl SessionOptions {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GameConfig::default(),
            seed: Some(seed),
        }
    }
}

/// A running game: world, content, player, quest state, and the active
/// dialogue, all confined to the caller's thread.
pub struct Session {
    config: GameConfig,
    seed: WorldSeed,
    grid: WorldGrid,
    script: Storybook,
    player: PlayerState,
    state: GameState,
    dialogue: Option<DialogueState>,
    show_inventory: bool,
    show_lexicon: bool,
    clock: f32,
}

impl Session {
    /// Starts a session on the content shipped with the content crate.
    pub fn new(options: SessionOptions) -> Result<Self, SessionError> {
        let content = ContentSet::builtin()?;
        Ok(Self::with_content(content, options))
    }

    /// Starts a session on already-loaded content.
    pub fn with_content(content: ContentSet, options: SessionOptions) -> Self {
        let seed = WorldSeed(options.seed.unwrap_or_else(rand::random));
        let grid = generate_world(seed);
        let state = GameState::new(content.registry.ground_items.len());
        info!(
            seed = seed.0,
            npcs = content.registry.npcs.len(),
            ground_items = content.registry.ground_items.len(),
            words = content.catalogs.words.len(),
            "session started"
        );
        Self {
            config: options.config,
            seed,
            grid,
            script: Storybook::new(content),
            player: PlayerState::spawn(),
            state,
            dialogue: None,
            show_inventory: false,
            show_lexicon: false,
            clock: 0.0,
        }
    }

    /// Advances the simulation by one frame. `dt` is clamped so a stalled
    /// frame callback cannot teleport the player.
    pub fn tick(&mut self, dt: f32, input: &InputFrame) {
        let dt = dt.clamp(0.0, GameConfig::MAX_FRAME_DELTA);
        self.clock += dt;

        // An open dialogue captures all input until dismissed.
        if let Some(dialogue) = self.dialogue.as_mut() {
            dialogue.advance_reveal(dt);
            if input.pressed.contains(Buttons::INTERACT) {
                let was_complete = self.state.flag(QuestFlag::GameComplete);
                if dialogue.confirm(&mut self.state) == DialogueSignal::Closed {
                    debug!("dialogue closed, effects applied");
                    if !was_complete && self.state.flag(QuestFlag::GameComplete) {
                        info!("main quest complete");
                    }
                    self.dialogue = None;
                }
            }
            return;
        }

        // Panel toggles; open panels pause movement and interaction.
        if input.pressed.contains(Buttons::INVENTORY) {
            self.show_inventory = !self.show_inventory;
            self.show_lexicon = false;
        }
        if input.pressed.contains(Buttons::LEXICON) {
            self.show_lexicon = !self.show_lexicon;
            self.show_inventory = false;
        }
        if self.show_inventory || self.show_lexicon {
            if input.pressed.contains(Buttons::CANCEL) {
                self.show_inventory = false;
                self.show_lexicon = false;
            }
            return;
        }

        let (dx, dy) = input.direction();
        self.player
            .step(&self.grid, dx, dy, self.config.player_speed, dt);

        if input.pressed.contains(Buttons::INTERACT) {
            self.try_interact();
        }
    }

    /// Resolves and fires the interaction for the nearest target, if any.
    fn try_interact(&mut self) {
        let Some(target) = self.nearest_interactable() else {
            return;
        };
        match target {
            InteractTarget::Npc(id) => {
                let payload = self.script.npc_dialogue(id, &self.state);
                let speaker = self.script.content().registry.npc(id).map(|npc| Speaker {
                    name: npc.name.clone(),
                    color: npc.body_color.clone(),
                });
                debug!(npc = %id, lines = payload.lines.len(), "npc dialogue");
                self.dialogue = DialogueState::open(payload, speaker);
            }
            InteractTarget::GroundItem(index) => self.collect_ground_item(index),
            InteractTarget::Point(id) => {
                let payload = self.script.point_dialogue(id, &self.state);
                debug!(point = %id, lines = payload.lines.len(), "point dialogue");
                self.dialogue = DialogueState::open(payload, None);
            }
        }
    }

    /// Ground pickups mutate state immediately — inventory, collected bit,
    /// word discovery — and only then show a flavor line. The one
    /// interaction whose effects don't ride the dialogue close step.
    fn collect_ground_item(&mut self, index: usize) {
        let Some(spec) = self.script.content().registry.ground_items.get(index) else {
            return;
        };
        let item = spec.item;
        self.state.acquire(item);
        self.state.mark_collected(index);

        let entry = self.script.content().catalogs.item(item);
        if let Some(word) = entry.and_then(|entry| entry.word) {
            self.state.discover(word);
        }
        let line = match entry {
            Some(entry) => format!(
                "Picked up {{g}}{}{{/}}!\n{{d}}{}{{/}}",
                entry.name, entry.description
            ),
            None => "Picked up an item.".to_string(),
        };
        info!(item = %item, "ground item collected");
        self.dialogue = DialogueState::open(DialoguePayload::line(line), None);
    }

    // ===== queries for presentation =====

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn dialogue(&self) -> Option<&DialogueState> {
        self.dialogue.as_ref()
    }

    pub fn content(&self) -> &ContentSet {
        self.script.content()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> WorldSeed {
        self.seed
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn show_inventory(&self) -> bool {
        self.show_inventory
    }

    pub fn show_lexicon(&self) -> bool {
        self.show_lexicon
    }

    /// Region containing the player, for the HUD location line.
    pub fn region(&self) -> Region {
        Region::locate(self.player.x, self.player.y)
    }

    /// Nearest interactable entity within the configured radius.
    pub fn nearest_interactable(&self) -> Option<InteractTarget> {
        nearest_with_config(
            &self.player,
            &self.script.content().registry,
            &self.state,
            &self.config,
        )
    }

    /// Label for the interaction prompt, when a target is in range and no
    /// dialogue is open.
    pub fn interact_prompt(&self) -> Option<String> {
        if self.dialogue.is_some() {
            return None;
        }
        let content = self.script.content();
        match self.nearest_interactable()? {
            InteractTarget::Npc(id) => content.registry.npc(id).map(|npc| npc.name.clone()),
            InteractTarget::GroundItem(index) => content
                .registry
                .ground_items
                .get(index)
                .and_then(|spec| content.catalogs.item(spec.item))
                .map(|entry| entry.name.clone()),
            InteractTarget::Point(id) => content.registry.point(id).map(|point| point.name.clone()),
        }
    }

    /// Whether an NPC should show the quest marker.
    pub fn quest_available(&self, npc: NpcId) -> bool {
        quest_available(npc, &self.state)
    }

    /// Drains word-discovery events in order for the popup queue.
    pub fn drain_word_events(&mut self) -> Vec<WordId> {
        self.state.drain_word_events().collect()
    }

    /// Places the player directly. Scenario/test hook; gameplay movement
    /// goes through [`Session::tick`].
    pub fn warp(&mut self, x: f32, y: f32) {
        self.player.x = x;
        self.player.y = y;
    }
}
