//! Procedural world generation.
//!
//! The overworld is stamped in a fixed order of passes; later passes
//! overwrite earlier ones, so the order here is load-bearing. All randomness
//! comes from a single seeded [`Pcg32`] stream, which makes the whole grid a
//! pure function of its [`WorldSeed`].

use super::rng::{Pcg32, WorldSeed};
use super::{TileKind, WorldGrid};
use crate::config::GameConfig;

/// Generates the 80x60 overworld for one session.
pub fn generate_world(seed: WorldSeed) -> WorldGrid {
    let mut builder = MapBuilder::new(seed);
    builder.base_terrain();
    builder.enclose_border();
    builder.scatter_trees();
    builder.carve_spines();
    builder.stamp_village();
    builder.stamp_farm();
    builder.stamp_monastery();
    builder.stamp_jungle();
    builder.stamp_lake();
    builder.stamp_mountain();
    builder.finish()
}

struct MapBuilder {
    grid: WorldGrid,
    rng: Pcg32,
}

impl MapBuilder {
    const W: i32 = GameConfig::MAP_WIDTH as i32;
    const H: i32 = GameConfig::MAP_HEIGHT as i32;

    fn new(seed: WorldSeed) -> Self {
        Self {
            grid: WorldGrid::filled(
                GameConfig::MAP_WIDTH,
                GameConfig::MAP_HEIGHT,
                TileKind::Void,
            ),
            rng: Pcg32::new(seed),
        }
    }

    fn finish(self) -> WorldGrid {
        self.grid
    }

    /// Weighted grass cover: 70% grass, 18% meadow, 12% tall grass.
    fn base_terrain(&mut self) {
        for y in 0..Self::H {
            for x in 0..Self::W {
                let r = self.rng.next_f32();
                let tile = if r < 0.70 {
                    TileKind::Grass
                } else if r < 0.88 {
                    TileKind::Meadow
                } else {
                    TileKind::TallGrass
                };
                self.grid.set(x, y, tile);
            }
        }
    }

    /// Two-cell tree ring; the world is enclosed on every side.
    fn enclose_border(&mut self) {
        let b = GameConfig::BORDER_THICKNESS as i32;
        for y in 0..Self::H {
            for x in 0..Self::W {
                if x < b || x >= Self::W - b || y < b || y >= Self::H - b {
                    self.grid.set(x, y, TileKind::Tree);
                }
            }
        }
    }

    /// Sparse tree cover over the interior.
    fn scatter_trees(&mut self) {
        for y in 3..Self::H - 3 {
            for x in 3..Self::W - 3 {
                if self.rng.chance(0.04) {
                    self.grid.set(x, y, TileKind::Tree);
                }
            }
        }
    }

    /// Main roads between the named regions.
    fn carve_spines(&mut self) {
        self.carve_road(40, 7, 40, 52, 3); // north-south spine
        self.carve_road(7, 30, 74, 30, 3); // east-west spine
        self.carve_road(40, 30, 40, 46, 2); // down to the lake
        self.carve_road(52, 30, 56, 30, 2); // to the jungle entrance
    }

    /// L-shaped corridor: a horizontal run at `y1`, then a vertical run at
    /// `x2`. Non-aligned endpoints produce an elbow, not a straight line.
    fn carve_road(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: i32) {
        let hw = width / 2;
        let (sx, ex) = (x1.min(x2), x1.max(x2));
        let (sy, ey) = (y1.min(y2), y1.max(y2));
        for x in sx..=ex {
            for d in -hw..=hw {
                self.grid.set(x, y1 + d, TileKind::Path);
            }
        }
        for y in sy..=ey {
            for d in -hw..=hw {
                self.grid.set(x2 + d, y, TileKind::Path);
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, tile: TileKind) {
        for dy in 0..h {
            for dx in 0..w {
                self.grid.set(x + dx, y + dy, tile);
            }
        }
    }

    fn clear_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.fill_rect(x, y, w, h, TileKind::Grass);
    }

    /// Hollow rectangular building: wall ring, floor interior, one door cell
    /// centered on the bottom edge.
    fn place_building(&mut self, x: i32, y: i32, w: i32, h: i32, floor: TileKind) {
        for dy in 0..h {
            for dx in 0..w {
                let tile = if dy == 0 || dy == h - 1 || dx == 0 || dx == w - 1 {
                    TileKind::Wall
                } else {
                    floor
                };
                self.grid.set(x + dx, y + dy, tile);
            }
        }
        self.grid.set(x + w / 2, y + h - 1, TileKind::Door);
    }

    /// Central village: three buildings, market stall, well.
    fn stamp_village(&mut self) {
        self.clear_rect(30, 24, 22, 14);
        self.carve_road(32, 30, 50, 30, 2);
        self.carve_road(40, 25, 40, 37, 2);
        self.place_building(32, 25, 6, 4, TileKind::Floor); // house NW
        self.place_building(44, 25, 6, 4, TileKind::Floor); // house NE
        self.place_building(44, 33, 6, 4, TileKind::Floor); // workshop
        // Market stall: fence front, floor behind
        for x in 35..=37 {
            self.grid.set(x, 27, TileKind::Fence);
            self.grid.set(x, 26, TileKind::Floor);
        }
        // Well
        self.grid.set(42, 32, TileKind::Wall);
    }

    /// Western farmland: crop fields, apple orchard, farmhouse, garden.
    fn stamp_farm(&mut self) {
        self.clear_rect(5, 22, 23, 20);
        self.fill_rect(7, 26, 5, 6, TileKind::Crops);
        self.fill_rect(7, 34, 5, 6, TileKind::Crops);
        // Orchard: trees in a loose grid
        for dy in (0..6).step_by(2) {
            for dx in (0..6).step_by(2) {
                self.grid.set(17 + dx, 23 + dy, TileKind::Tree);
            }
        }
        self.place_building(19, 29, 6, 5, TileKind::Floor); // farmhouse
        self.fill_rect(6, 38, 4, 3, TileKind::Flowers);
    }

    /// Northern monastery: temple hall, gardens, bodhi tree, stone path.
    fn stamp_monastery(&mut self) {
        self.clear_rect(30, 5, 24, 15);
        self.place_building(36, 7, 12, 6, TileKind::Floor); // temple hall
        self.fill_rect(32, 15, 6, 3, TileKind::Flowers);
        self.fill_rect(48, 15, 4, 3, TileKind::Flowers);
        self.grid.set(50, 12, TileKind::Tree); // bodhi tree
        self.carve_road(40, 13, 40, 20, 2);
    }

    /// Eastern jungle: dense semi-random growth, trails, the naranga grove,
    /// a sinusoidal river with two bridges, and a hidden chamber in the far
    /// southeast.
    fn stamp_jungle(&mut self) {
        for y in 20..50 {
            for x in 56..76 {
                let tile = if self.rng.chance(0.45) {
                    TileKind::Tree
                } else if self.rng.chance(0.3) {
                    TileKind::TallGrass
                } else {
                    TileKind::Meadow
                };
                self.grid.set(x, y, tile);
            }
        }
        // Trails and clearings
        self.carve_road(56, 30, 62, 30, 2);
        self.carve_road(62, 30, 62, 38, 2);
        self.carve_road(62, 38, 69, 38, 2);
        self.clear_rect(60, 28, 5, 5);
        self.clear_rect(68, 36, 5, 5); // naranga grove
        self.fill_rect(68, 36, 5, 5, TileKind::Flowers);
        // River: two water cells per row tracing a sine wave
        for y in 22..48 {
            let rx = 65 + ((y as f32 * 0.4).sin() * 2.0).round() as i32;
            self.grid.set(rx, y, TileKind::Water);
            self.grid.set(rx + 1, y, TileKind::Water);
        }
        // Bridges where the trails cross the river
        for &(x, y) in &[(65, 30), (66, 30), (65, 38), (66, 38)] {
            self.grid.set(x, y, TileKind::Bridge);
        }
        // Hidden chamber: a three-cell shrine with a door
        self.clear_rect(72, 43, 4, 3);
        for y in 43..=44 {
            self.grid.set(72, y, TileKind::Wall);
            self.grid.set(73, y, TileKind::Floor);
            self.grid.set(74, y, TileKind::Wall);
        }
        self.grid.set(72, 45, TileKind::Wall);
        self.grid.set(73, 45, TileKind::Door);
        self.grid.set(74, 45, TileKind::Wall);
    }

    /// Southern lake: elliptical water body, sand shoreline, a small dock.
    fn stamp_lake(&mut self) {
        const CX: f32 = 41.0;
        const CY: f32 = 50.0;
        for y in 44..56 {
            for x in 28..54 {
                let (dx, dy) = (x as f32 - CX, y as f32 - CY);
                if dx * dx / 140.0 + dy * dy / 25.0 < 1.0 {
                    self.grid.set(x, y, TileKind::Water);
                }
            }
        }
        for y in 43..57 {
            for x in 26..56 {
                let (dx, dy) = (x as f32 - CX, y as f32 - CY);
                if dx * dx / 190.0 + dy * dy / 36.0 < 1.0
                    && self.grid.tile(x, y) != Some(TileKind::Water)
                {
                    self.grid.set(x, y, TileKind::Sand);
                }
            }
        }
        self.grid.set(41, 45, TileKind::Bridge); // dock
        self.grid.set(41, 46, TileKind::Bridge);
    }

    /// Mount Sumeru: the impassable slab with a small summit platform.
    fn stamp_mountain(&mut self) {
        self.fill_rect(36, 2, 10, 4, TileKind::Mountain);
        for x in 40..=42 {
            self.grid.set(x, 3, TileKind::Floor); // summit platform
        }
        self.grid.set(41, 4, TileKind::Path);
        self.carve_road(41, 4, 41, 7, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(seed: u64) -> WorldGrid {
        generate_world(WorldSeed(seed))
    }

    #[test]
    fn border_ring_is_always_solid() {
        for seed in [0, 1, 42, 0xDEAD_BEEF] {
            let grid = grid(seed);
            let (w, h) = (grid.width() as i32, grid.height() as i32);
            for y in 0..h {
                for x in 0..w {
                    if x < 2 || x >= w - 2 || y < 2 || y >= h - 2 {
                        assert!(grid.is_solid(x, y), "seed {seed}: open border at ({x},{y})");
                    }
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        assert_eq!(grid(99), grid(99));
        assert_ne!(grid(99), grid(100));
    }

    #[test]
    fn building_doors_are_passable() {
        let grid = grid(7);
        // house NW, house NE, workshop, farmhouse, temple, hidden chamber
        for (x, y) in [(35, 28), (47, 28), (47, 36), (22, 33), (42, 12), (73, 45)] {
            assert_eq!(grid.tile(x, y), Some(TileKind::Door), "({x},{y})");
        }
    }

    #[test]
    fn spawn_and_landmarks_are_reachable_tiles() {
        let grid = grid(3);
        // village crossroads spawn tile
        assert!(!grid.is_solid(40, 32));
        // summit platform in front of the artifact
        assert!(!grid.is_solid(41, 3));
        // river bridges stay passable over the water
        assert_eq!(grid.tile(65, 30), Some(TileKind::Bridge));
        assert_eq!(grid.tile(66, 38), Some(TileKind::Bridge));
    }

    #[test]
    fn lake_has_water_inside_sand_ring() {
        let grid = grid(11);
        assert_eq!(grid.tile(41, 50), Some(TileKind::Water));
        assert_eq!(grid.tile(41, 55), Some(TileKind::Sand));
        // The lake plus the jungle river add up to a real body of water.
        let water = grid.cells().filter(|&(_, _, t)| t == TileKind::Water).count();
        assert!(water > 100, "only {water} water cells");
    }
}
