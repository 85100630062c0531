//! Named areas of the overworld.
//!
//! Region bounds are fixed geography, independent of the generated detail.
//! Presentation uses the region for the HUD location line and per-area
//! atmosphere; the engine itself only reads it back out of queries.

/// Named area of the map containing a continuous position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    Village,
    Farm,
    Monastery,
    Jungle,
    Lake,
    Summit,
    /// Anywhere not covered by a named region.
    Wilds,
}

impl Region {
    /// Classifies a continuous player position. Checks run in a fixed order;
    /// the first matching region wins where bounds overlap.
    pub fn locate(x: f32, y: f32) -> Self {
        if x > 30.0 && x < 52.0 && y > 24.0 && y < 38.0 {
            Region::Village
        } else if x > 4.0 && x < 28.0 && y > 22.0 && y < 42.0 {
            Region::Farm
        } else if x > 30.0 && x < 54.0 && y > 4.0 && y < 20.0 {
            Region::Monastery
        } else if x > 54.0 && x < 76.0 && y > 20.0 && y < 50.0 {
            Region::Jungle
        } else if y > 42.0 && x > 26.0 && x < 56.0 {
            Region::Lake
        } else if y < 7.0 && x > 34.0 && x < 48.0 {
            Region::Summit
        } else {
            Region::Wilds
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Region::Village => "Siṃhapura Village",
            Region::Farm => "Vrīhi's Farm",
            Region::Monastery => "Bodhi Monastery",
            Region::Jungle => "The Jaṅgala (Jungle)",
            Region::Lake => "Taḍāga Lake",
            Region::Summit => "Mount Sumeru",
            Region::Wilds => "Siṃhapura Rājya",
        }
    }
}
