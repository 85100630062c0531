//! Closed identifier sets for scripted content.
//!
//! Every piece of authored content (vocabulary, items, NPCs, interaction
//! points, quest flags) is addressed by one of these enums. Keeping the sets
//! closed lets the content resolver match exhaustively instead of dispatching
//! on strings, so an unknown id is a compile error rather than a silent
//! filler branch.

use strum::{Display, EnumIter, EnumString};

/// Vocabulary entry identifier. One variant per word in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WordId {
    // Food
    Vatigagama,
    Srngavera,
    Mudga,
    Naranga,
    Pippali,
    Vrihi,
    Sarkara,
    Khandah,
    Bimba,
    // Buddhism
    Avatara,
    Buddha,
    Svastika,
    Amitabha,
    Nirvana,
    Bodhi,
    // Nature
    Chitras,
    Krmija,
    Jangala,
    Nila,
    Makara,
    Mus,
    Tadaga,
    Udumbara,
    Sumeru,
    // Other
    Guru,
    Karma,
    Lut,
    Bhrata,
    Rajya,
    Capayati,
    Simhapura,
    Yogas,
}

/// Item identifier for both inventory entries and ground pickups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemId {
    Bimba,
    Sarkara,
    Vrihi,
    Srngavera,
    Pippali,
    Mudga,
    Naranga,
    Udumbara,
    KrmijaDye,
    NilaDye,
    NarangaDye,
    Khandah,
    Offering,
}

/// Scripted character identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NpcId {
    Guru,
    Vrihi,
    Pippali,
    Bodhi,
    Chitra,
    Makara,
    Elder,
}

/// Fixed interaction point identifier (craft stations and the story artifact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointId {
    FarmKitchen,
    CraftTable,
    MonasteryAltar,
    Artifact,
}

/// Permanent quest-progress flag. Flags are only ever set, never cleared.
///
/// Serialized in camelCase to match the flag names the dialogue scripts were
/// authored against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum QuestFlag {
    MetGuru,
    MetVrihi,
    MetPippali,
    MetBodhi,
    MetChitra,
    MetMakara,
    MetElder,
    GotCrimson,
    GotIndigo,
    OfferingPlaced,
    GameComplete,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn word_catalog_is_complete() {
        assert_eq!(WordId::iter().count(), 32);
    }

    #[test]
    fn ids_round_trip_through_display() {
        assert_eq!(ItemId::KrmijaDye.to_string(), "krmija_dye");
        assert_eq!(ItemId::from_str("krmija_dye").unwrap(), ItemId::KrmijaDye);
        assert_eq!(PointId::FarmKitchen.to_string(), "farm_kitchen");
        assert_eq!(QuestFlag::MetVrihi.to_string(), "metVrihi");
        assert_eq!(
            QuestFlag::from_str("offeringPlaced").unwrap(),
            QuestFlag::OfferingPlaced
        );
    }
}
