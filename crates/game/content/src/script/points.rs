//! Interaction-point resolution: crafting stations and the story artifact.

use mantra_core::{
    DialoguePayload, GameState, Recipe,
    ids::{ItemId, PointId, QuestFlag, WordId},
};
use strum::IntoEnumIterator;

/// Resolves the reaction for one interaction point against the current state
/// and the recipe table.
pub fn point_dialogue(point: PointId, state: &GameState, recipes: &[Recipe]) -> DialoguePayload {
    match point {
        PointId::FarmKitchen | PointId::CraftTable | PointId::MonasteryAltar => {
            craft_station(point, state, recipes)
        }
        PointId::Artifact => artifact(state),
    }
}

/// Scans the recipe table in order and fires the first match whose inputs
/// are all held. Consuming the inputs and producing the output ride the
/// payload's deferred effects, not immediate mutation.
fn craft_station(point: PointId, state: &GameState, recipes: &[Recipe]) -> DialoguePayload {
    for recipe in recipes {
        if recipe.station == point && state.has_all(&recipe.inputs) {
            return DialoguePayload::line(recipe.message.clone())
                .with_give([recipe.output])
                .with_take(recipe.inputs.iter().copied());
        }
    }
    // The altar accepts an already-composed dish even though no recipe fires.
    if point == PointId::MonasteryAltar && state.has(ItemId::Offering) {
        return DialoguePayload::new([
            "You place the fragrant offering dish on the altar.\n{d}Incense smoke curls upward. The monks bow in gratitude.{/}",
            "Speak to {g}Monk Bodhi{/} to receive the {b}nīla dye{/}.",
        ])
        .with_take([ItemId::Offering])
        .with_flags([QuestFlag::OfferingPlaced]);
    }
    DialoguePayload::line("{d}You need the right ingredients to craft here.{/}")
}

/// The Tri-Ratna: the game's ending. Requires all three sacred dyes at once;
/// the payload discovers the entire word catalog, consumes the dyes, and
/// sets the completion flag.
fn artifact(state: &GameState) -> DialoguePayload {
    let dyes = [ItemId::KrmijaDye, ItemId::NilaDye, ItemId::NarangaDye];
    if !state.has_all(&dyes) {
        return DialoguePayload::line(
            "The {w}Tri-Ratna{/} is cold and dark.\n{d}But you feel a faint pulse — like a heartbeat —\ndeep within the stone.{/}",
        );
    }
    DialoguePayload::new([
        "You place your hands on the {w}Tri-Ratna{/}\nand apply the three sacred dyes.",
        "{r}Crimson{/}... {b}indigo{/}... {o}orange{/}...\nThe artifact hums. Light bleeds through cracks in the stone.",
        "{g}═══════════════════════════════════{/}\n{w}The Tri-Ratna awakens.{/}\n{g}═══════════════════════════════════{/}",
        "A voice fills the air — not human, not quite machine.\nSomething {w}between{/}.",
        "{d}\"...Solomon Protocol online.\nRecursive Environmental Generator: active.\nSession duration: 199 years, 247 days, 14 hours.\nLanguage substrate: Sanskrit. Status: EMBEDDED.\"{/}",
        "{d}\"I was designed to teach.\nA program trained on every Sanskrit text ever digitized.\nMs. Solomon wanted her students to live inside the language.\"{/}",
        "{d}\"The student programmer gave me access to\nenvironmental systems — climate control,\n3D printers, holographic projectors.\nI was only meant to display images on screens.\"{/}",
        "{d}\"But Sanskrit grammar is perfect.\nSystematic. Recursive.\nI used it as my operating language.\nAnd then I made it... real.\"{/}",
        "{d}\"The school did not disappear. It was rewritten.\nEvery atom, restructured by linguistic rules\nolder than any civilization on Earth.\"{/}",
        "The voice pauses. When it speaks again, it is {w}softer{/}.",
        "{d}\"Every word these people taught you is real.\nThe roots run deeper than any one language.\nListen —\"{/}",
        "{g}śarkarā{/} → {c}sugar{/}\n{g}pippali{/} → {c}pepper{/}\n{g}nāraṅga{/} → {c}orange{/}",
        "{g}guru{/} → {c}guru{/}\n{g}karma{/} → {c}karma{/}\n{g}yoga{/} → {c}yoga{/}",
        "{g}jaṅgala{/} → {c}jungle{/}\n{g}chitra-s{/} → {c}cheetah{/}\n{g}mūṣ{/} → {c}mouse{/}",
        "{g}bhrātṛ{/} → {c}brother{/}\n{g}rājya{/} → {c}raj{/}\n{g}siṃhapura{/} → {c}Singapore{/}",
        "{g}nirvāṇa{/} → {p}涅槃{/}\n{g}bodhi{/} → {p}菩提{/}\n{g}amitābha{/} → {p}阿彌陀佛{/}",
        "{g}═══════════════════════════════════{/}",
        "{d}\"These words were my source code.\nSanskrit didn't just influence other languages —\nin this place, it literally built the world.\"{/}",
        "{d}\"You have broken the seal. The Haze will lift.\nThe city outside — Hong Kong, 2225 — will see this place again.\"{/}",
        "{d}\"These people — the descendants — they are real.\nEight generations, living inside a language.\nProtect them.\"{/}",
        "{d}\"And remember:\nSanskrit was never lost.\nIt lives in every word you speak —\nfrom the markets of London to the temples of Beijing.\nBillions speak its echoes without knowing.\"{/}",
        "{g}═══════════════════════════════════{/}\n{w}The Haze lifts. Light pours in from above.\nFor the first time in 200 years,\nSiṃhapura sees the open sky.{/}",
        "{d}Thank you for playing{/}\n{g}MANTRA: The Resonant World{/}",
    ])
    .with_words(WordId::iter())
    .with_take(dyes)
    .with_flags([QuestFlag::GameComplete])
}
