//! Player movement against the static grid.
//!
//! Collision tests the two axes independently: if only one axis of a
//! diagonal step is blocked, the other still commits, which makes the player
//! slide along walls instead of stopping dead at the first contact.

use crate::config::GameConfig;
use crate::map::WorldGrid;

/// Continuous player pose in tile units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    /// Facing angle in radians, `atan2(dy, dx)` of the last nonzero input.
    pub facing: f32,
    pub moving: bool,
}

impl PlayerState {
    /// Spawns at the village crossroads.
    pub fn spawn() -> Self {
        let (x, y) = GameConfig::PLAYER_SPAWN;
        Self {
            x,
            y,
            facing: 0.0,
            moving: false,
        }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            facing: 0.0,
            moving: false,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Integrates one tick of movement. `(dx, dy)` is the raw directional
    /// input; it is normalized here so diagonals are not faster.
    ///
    /// Facing persists from the last direction moved while idle.
    pub fn step(&mut self, grid: &WorldGrid, dx: f32, dy: f32, speed: f32, dt: f32) {
        if dx == 0.0 && dy == 0.0 {
            self.moving = false;
            return;
        }
        let len = (dx * dx + dy * dy).sqrt();
        let (dx, dy) = (dx / len, dy / len);
        let stride = speed * dt;

        // Each axis commits on its own; blocking one leaves the other free.
        let nx = self.x + dx * stride;
        if fits(grid, nx, self.y) {
            self.x = nx;
        }
        let ny = self.y + dy * stride;
        if fits(grid, self.x, ny) {
            self.y = ny;
        }

        self.facing = dy.atan2(dx);
        self.moving = true;
    }
}

/// Whether the player's shrunk bounding box fits at `(x, y)` with all four
/// corners on passable tiles. Out-of-bounds counts as solid.
fn fits(grid: &WorldGrid, x: f32, y: f32) -> bool {
    let hw = GameConfig::PLAYER_HALF_WIDTH;
    let hh = GameConfig::PLAYER_HALF_HEIGHT;
    !grid.is_solid((x - hw).floor() as i32, (y - hh).floor() as i32)
        && !grid.is_solid((x + hw).floor() as i32, (y - hh).floor() as i32)
        && !grid.is_solid((x - hw).floor() as i32, (y + hh).floor() as i32)
        && !grid.is_solid((x + hw).floor() as i32, (y + hh).floor() as i32)
}
