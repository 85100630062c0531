//! End-to-end gameplay scenario test.
//!
//! Plays the whole main quest against a fixed-seed world:
//! 1. Meet the guru and receive the quest
//! 2. Gather farm ingredients and craft khaṇḍa in the kitchen
//! 3. Trade the khaṇḍa to Farmer Vrīhi for the crimson dye
//! 4. Cook the offering, place it on the altar, receive the indigo dye
//! 5. Gather jungle ingredients and craft the orange dye
//! 6. Wake the Tri-Ratna and finish the game

use mantra_core::{
    DialoguePhase, Region,
    ids::{ItemId, NpcId, QuestFlag, WordId},
};
use mantra_runtime::{Buttons, InputFrame, Session, SessionOptions};
use strum::IntoEnumIterator;

const FRAME: f32 = 1.0 / 60.0;

fn session() -> Session {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
    Session::new(SessionOptions::with_seed(0x5EED)).expect("builtin content must load")
}

/// One frame with the interact button freshly pressed.
fn press_interact(session: &mut Session) {
    session.tick(FRAME, &InputFrame::press(Buttons::INTERACT));
}

/// Hammers the confirm input until the open dialogue closes.
fn finish_dialogue(session: &mut Session) {
    for _ in 0..200 {
        if session.dialogue().is_none() {
            return;
        }
        press_interact(session);
    }
    panic!("dialogue did not close within 200 confirms");
}

/// Warp next to a target cell and interact once.
fn interact_at(session: &mut Session, x: f32, y: f32) {
    session.warp(x, y);
    press_interact(session);
}

#[test]
fn full_quest_walkthrough() {
    let mut session = session();

    // ── spawn ───────────────────────────────────────────────────────────
    assert_eq!(session.seed().0, 0x5EED);
    assert_eq!(session.player().position(), (40.5, 32.5));
    assert_eq!(session.region(), Region::Village);
    assert!(session.state().inventory().is_empty());
    session.tick(FRAME, &InputFrame::IDLE);

    // ── phase 1: the guru's briefing ────────────────────────────────────
    session.warp(40.5, 31.3);
    assert_eq!(session.interact_prompt().as_deref(), Some("Guru Vidya"));
    press_interact(&mut session);
    let dialogue = session.dialogue().expect("guru should speak");
    assert_eq!(dialogue.speaker().unwrap().name, "Guru Vidya");
    assert_eq!(dialogue.phase(), DialoguePhase::Playing);
    finish_dialogue(&mut session);

    assert!(session.state().flag(QuestFlag::MetGuru));
    let taught = session.drain_word_events();
    assert!(taught.contains(&WordId::Guru));
    assert_eq!(taught.len(), 6);
    assert!(!session.quest_available(NpcId::Guru));

    // ── phase 2: kitchen ingredients ────────────────────────────────────
    interact_at(&mut session, 19.5, 24.5); // bimbā in the orchard
    finish_dialogue(&mut session);
    interact_at(&mut session, 10.5, 34.5); // śarkarā at the shed
    finish_dialogue(&mut session);
    assert_eq!(
        session.state().inventory(),
        &[ItemId::Bimba, ItemId::Sarkara]
    );
    assert!(session.state().knows(WordId::Bimba));

    // A collected instance is gone for good: nothing left to target here.
    session.warp(19.5, 24.5);
    assert_eq!(session.nearest_interactable(), None);

    // ── phase 3: craft khaṇḍa, trade for the crimson dye ────────────────
    interact_at(&mut session, 21.5, 32.2); // farmhouse kitchen
    finish_dialogue(&mut session);
    assert_eq!(session.state().inventory(), &[ItemId::Khandah]);

    interact_at(&mut session, 16.5, 31.3); // Farmer Vrīhi, first meeting
    finish_dialogue(&mut session);
    assert!(session.state().flag(QuestFlag::MetVrihi));
    assert!(session.state().has(ItemId::Khandah), "turn-in waits a talk");

    press_interact(&mut session); // now the trade fires
    finish_dialogue(&mut session);
    assert!(session.state().has(ItemId::KrmijaDye));
    assert!(!session.state().has(ItemId::Khandah));
    assert!(session.state().flag(QuestFlag::GotCrimson));

    // ── phase 4: the offering and the indigo dye ────────────────────────
    for (x, y) in [(14.5, 28.5), (8.5, 38.5), (36.5, 27.5)] {
        interact_at(&mut session, x, y); // vrīhi, śṛṅgavera, pippali
        finish_dialogue(&mut session);
    }
    interact_at(&mut session, 21.5, 32.2); // cook the offering
    finish_dialogue(&mut session);
    assert!(session.state().has(ItemId::Offering));

    interact_at(&mut session, 42.5, 11.2); // place it on the altar
    finish_dialogue(&mut session);
    assert!(session.state().flag(QuestFlag::OfferingPlaced));
    assert!(!session.state().has(ItemId::Offering));

    interact_at(&mut session, 42.5, 12.8); // Monk Bodhi, first meeting
    finish_dialogue(&mut session);
    press_interact(&mut session); // the indigo is granted
    finish_dialogue(&mut session);
    assert!(session.state().has(ItemId::NilaDye));
    assert!(session.state().flag(QuestFlag::GotIndigo));

    // ── phase 5: the orange dye ─────────────────────────────────────────
    interact_at(&mut session, 69.5, 38.5); // nāraṅga in the grove
    finish_dialogue(&mut session);
    interact_at(&mut session, 73.5, 44.5); // udumbara in the hidden chamber
    finish_dialogue(&mut session);
    interact_at(&mut session, 46.5, 36.2); // craft table
    finish_dialogue(&mut session);
    assert!(session.state().has(ItemId::NarangaDye));

    // ── phase 6: the ending ─────────────────────────────────────────────
    let words_before = session.state().discovered_words().len();
    assert!(words_before < WordId::iter().count());

    interact_at(&mut session, 41.5, 4.2); // the Tri-Ratna
    assert!(session.dialogue().is_some(), "the artifact should awaken");
    finish_dialogue(&mut session);

    assert!(session.state().flag(QuestFlag::GameComplete));
    assert_eq!(
        session.state().discovered_words().len(),
        WordId::iter().count(),
        "the ending reveals the whole lexicon"
    );
    for dye in [ItemId::KrmijaDye, ItemId::NilaDye, ItemId::NarangaDye] {
        assert!(!session.state().has(dye), "the dyes are consumed");
    }

    // Touching it again is a quiet epilogue with no further effects.
    press_interact(&mut session);
    finish_dialogue(&mut session);
    assert!(session.state().flag(QuestFlag::GameComplete));
}

#[test]
fn movement_is_blocked_by_the_enclosure() {
    let mut session = session();
    session.warp(40.5, 4.5); // on the summit approach
    for _ in 0..600 {
        session.tick(FRAME, &InputFrame::hold(Buttons::UP));
    }
    // Two-cell tree border plus the mountain slab: the player can never
    // leave the grid.
    assert!(session.player().y >= 0.0);
    assert!(session.player().x >= 0.0);
}

#[test]
fn panels_pause_the_world() {
    let mut session = session();
    let start = session.player().position();

    session.tick(FRAME, &InputFrame::press(Buttons::INVENTORY));
    assert!(session.show_inventory());

    session.tick(FRAME, &InputFrame::hold(Buttons::RIGHT));
    assert_eq!(session.player().position(), start, "panel blocks movement");

    session.tick(FRAME, &InputFrame::press(Buttons::CANCEL));
    assert!(!session.show_inventory());

    session.tick(FRAME, &InputFrame::hold(Buttons::RIGHT));
    assert!(session.player().x > start.0);
}

#[test]
fn frame_delta_is_clamped() {
    let mut session = session();
    let start_x = session.player().x;
    // A four-second stall must not teleport the player.
    session.tick(4.0, &InputFrame::hold(Buttons::RIGHT));
    let moved = session.player().x - start_x;
    assert!(moved <= session.config().player_speed * 0.05 + f32::EPSILON);
}
