/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Player movement speed in tile units per second.
    pub player_speed: f32,
    /// Radius around the player within which an entity can be interacted with.
    pub interact_radius: f32,
}

impl GameConfig {
    // ===== world geometry =====
    /// Grid width in tiles.
    pub const MAP_WIDTH: usize = 80;
    /// Grid height in tiles.
    pub const MAP_HEIGHT: usize = 60;
    /// Thickness of the solid enclosure ring around the world.
    pub const BORDER_THICKNESS: usize = 2;

    // ===== player =====
    /// Spawn point at the village crossroads.
    pub const PLAYER_SPAWN: (f32, f32) = (40.5, 32.5);
    /// Collision half-extent along x. Narrower than half a tile so the player
    /// can slip past tile corners.
    pub const PLAYER_HALF_WIDTH: f32 = 0.3;
    /// Collision half-extent along y.
    pub const PLAYER_HALF_HEIGHT: f32 = 0.35;

    // ===== simulation =====
    /// Upper bound on a single frame delta. Caps the jump after a long stall
    /// (e.g. a backgrounded tab) to one worst-case step.
    pub const MAX_FRAME_DELTA: f32 = 0.05;

    // ===== dialogue reveal rates, visible characters per second =====
    pub const REVEAL_BASE: f32 = 13.5;
    /// After sentence-ending punctuation.
    pub const REVEAL_SENTENCE: f32 = 6.75;
    /// After clause punctuation.
    pub const REVEAL_CLAUSE: f32 = 9.45;
    /// After an explicit line break.
    pub const REVEAL_NEWLINE: f32 = 8.1;
    /// Through plain spaces.
    pub const REVEAL_SPACE: f32 = 16.2;

    // ===== compile-time bounds used as type parameters =====
    /// The ending payload discovers the whole word catalog at once.
    pub const MAX_WORD_EFFECTS: usize = 32;
    pub const MAX_ITEM_EFFECTS: usize = 4;
    pub const MAX_FLAG_EFFECTS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_SPEED: f32 = 4.5;
    pub const DEFAULT_INTERACT_RADIUS: f32 = 2.0;

    pub fn new() -> Self {
        Self {
            player_speed: Self::DEFAULT_PLAYER_SPEED,
            interact_radius: Self::DEFAULT_INTERACT_RADIUS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
