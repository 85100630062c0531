//! Static world geometry.
//!
//! The [`WorldGrid`] is generated once at session start and never mutated
//! afterwards; everything else in the engine treats it as a read-only
//! solidity oracle.

mod generate;
mod region;
mod rng;

pub use generate::generate_world;
pub use region::Region;
pub use rng::{Pcg32, WorldSeed};

use crate::config::GameConfig;

/// Terrain classification for one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Void,
    Grass,
    Meadow,
    Path,
    Water,
    Tree,
    Wall,
    Floor,
    Sand,
    Mountain,
    Bridge,
    Flowers,
    TallGrass,
    Crops,
    Door,
    Fence,
    Bush,
}

impl TileKind {
    /// Whether this terrain blocks movement. A static classification of the
    /// kind, never a per-cell property.
    pub const fn is_solid(self) -> bool {
        matches!(
            self,
            TileKind::Void
                | TileKind::Tree
                | TileKind::Wall
                | TileKind::Mountain
                | TileKind::Fence
                | TileKind::Bush
                | TileKind::Water
        )
    }

    pub const fn is_passable(self) -> bool {
        !self.is_solid()
    }
}

/// Immutable tile map with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl WorldGrid {
    /// Creates a grid uniformly filled with one tile kind. Generation and
    /// tests build on top of this.
    pub fn filled(width: usize, height: usize, fill: TileKind) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Terrain at a cell, or `None` outside the grid.
    pub fn tile(&self, x: i32, y: i32) -> Option<TileKind> {
        if self.in_bounds(x, y) {
            Some(self.tiles[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Solidity query used by the player controller. Out-of-bounds cells are
    /// solid so the grid bounds double as collision geometry.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).map(TileKind::is_solid).unwrap_or(true)
    }

    /// Iterates all cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (i % self.width, i / self.width, t))
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, tile: TileKind) {
        if self.in_bounds(x, y) {
            self.tiles[y as usize * self.width + x as usize] = tile;
        }
    }
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::filled(GameConfig::MAP_WIDTH, GameConfig::MAP_HEIGHT, TileKind::Grass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_solid() {
        let grid = WorldGrid::filled(4, 4, TileKind::Grass);
        assert!(grid.is_solid(-1, 0));
        assert!(grid.is_solid(0, -1));
        assert!(grid.is_solid(4, 0));
        assert!(grid.is_solid(0, 4));
        assert!(!grid.is_solid(2, 2));
    }

    #[test]
    fn solid_set_matches_terrain_classes() {
        for kind in [
            TileKind::Void,
            TileKind::Tree,
            TileKind::Wall,
            TileKind::Mountain,
            TileKind::Fence,
            TileKind::Bush,
            TileKind::Water,
        ] {
            assert!(kind.is_solid());
        }
        for kind in [
            TileKind::Grass,
            TileKind::Meadow,
            TileKind::Path,
            TileKind::Floor,
            TileKind::Sand,
            TileKind::Bridge,
            TileKind::Flowers,
            TileKind::TallGrass,
            TileKind::Crops,
            TileKind::Door,
        ] {
            assert!(kind.is_passable());
        }
    }
}
