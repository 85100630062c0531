//! Scripted dialogue playback.
//!
//! A [`DialoguePayload`] is the resolved content for one interaction: the
//! text lines plus the effects to apply when the conversation ends. The
//! [`DialogueState`] machine plays it back with a typed-reveal effect and
//! applies the accumulated effects exactly once on close.

pub mod markup;

mod effects;

pub use effects::{DialogueEffects, apply_effects};

use crate::config::GameConfig;
use crate::ids::{ItemId, QuestFlag, WordId};
use crate::state::GameState;

/// Resolved dialogue content: ordered lines plus deferred effects.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialoguePayload {
    pub lines: Vec<String>,
    pub effects: DialogueEffects,
}

impl DialoguePayload {
    pub fn new<L, S>(lines: L) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            effects: DialogueEffects::default(),
        }
    }

    /// Single-line payload with no effects.
    pub fn line(text: impl Into<String>) -> Self {
        Self::new([text.into()])
    }

    /// Neutral fallback for a script target with nothing to say.
    pub fn filler() -> Self {
        Self::line("...")
    }

    /// Neutral fallback for an interaction with no reaction.
    pub fn nothing_happens() -> Self {
        Self::line("{d}Nothing happens.{/}")
    }

    pub fn with_words(mut self, words: impl IntoIterator<Item = WordId>) -> Self {
        self.effects.words.extend(words);
        self
    }

    pub fn with_give(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.effects.give.extend(items);
        self
    }

    pub fn with_take(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.effects.take.extend(items);
        self
    }

    pub fn with_flags(mut self, flags: impl IntoIterator<Item = QuestFlag>) -> Self {
        self.effects.set_flags.extend(flags);
        self
    }
}

/// Who is speaking, for the dialogue box header.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speaker {
    pub name: String,
    pub color: String,
}

/// Observable phase of an open dialogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialoguePhase {
    /// Current line still revealing.
    Playing,
    /// Current line fully revealed, waiting for the advance input.
    LineComplete,
}

/// What a confirmation input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogueSignal {
    /// Reveal was skipped to the end of the current line.
    FastForwarded,
    /// Advanced to the next line.
    NextLine,
    /// Last line dismissed; effects applied, the dialogue is over.
    Closed,
}

/// Live playback state for one conversation.
///
/// Created when an interaction produces a non-empty line list, destroyed when
/// the last line is dismissed. The `applied` guard ensures the effect batch
/// runs exactly once no matter how the close transition is reached.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogueState {
    speaker: Option<Speaker>,
    lines: Vec<String>,
    index: usize,
    /// Visible characters revealed of the current line, fractional.
    revealed: f32,
    /// Cached markup-stripped current line.
    stripped: String,
    effects: DialogueEffects,
    applied: bool,
}

impl DialogueState {
    /// Opens playback for a payload. Returns `None` for an empty line list —
    /// an interaction with nothing to show never opens a box.
    pub fn open(payload: DialoguePayload, speaker: Option<Speaker>) -> Option<Self> {
        if payload.lines.is_empty() {
            return None;
        }
        let stripped = markup::strip_markup(&payload.lines[0]);
        Some(Self {
            speaker,
            lines: payload.lines,
            index: 0,
            revealed: 0.0,
            stripped,
            effects: payload.effects,
            applied: false,
        })
    }

    pub fn speaker(&self) -> Option<&Speaker> {
        self.speaker.as_ref()
    }

    pub fn line_index(&self) -> usize {
        self.index
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Raw current line, markup included.
    pub fn current_line(&self) -> &str {
        &self.lines[self.index]
    }

    fn visible_len(&self) -> usize {
        self.stripped.chars().count()
    }

    pub fn phase(&self) -> DialoguePhase {
        if (self.revealed as usize) >= self.visible_len() {
            DialoguePhase::LineComplete
        } else {
            DialoguePhase::Playing
        }
    }

    /// Markup-preserving slice of the current line up to the reveal point.
    /// This is what the dialogue box draws each frame.
    pub fn visible_text(&self) -> String {
        markup::visible_prefix(self.current_line(), self.revealed as usize)
    }

    /// Advances the typed reveal. The rate depends on the last character
    /// revealed so the text breathes at punctuation: slower after sentence
    /// ends, slightly slower after clauses and line breaks, faster through
    /// spaces.
    pub fn advance_reveal(&mut self, dt: f32) {
        let len = self.visible_len();
        if (self.revealed as usize) >= len {
            return;
        }
        let anchor = (self.revealed as usize).saturating_sub(1);
        let rate = match self.stripped.chars().nth(anchor) {
            Some('.') | Some('!') | Some('?') => GameConfig::REVEAL_SENTENCE,
            Some(',') | Some(';') | Some(':') | Some('—') | Some('–') | Some('…') => {
                GameConfig::REVEAL_CLAUSE
            }
            Some('\n') => GameConfig::REVEAL_NEWLINE,
            Some(' ') => GameConfig::REVEAL_SPACE,
            _ => GameConfig::REVEAL_BASE,
        };
        self.revealed = (self.revealed + rate * dt).min(len as f32);
    }

    /// Handles one confirmation input. During `Playing` this fast-forwards
    /// the reveal; from `LineComplete` it advances to the next line, or — on
    /// the last line — applies the pending effects (exactly once) and closes.
    pub fn confirm(&mut self, state: &mut GameState) -> DialogueSignal {
        if self.phase() == DialoguePhase::Playing {
            self.revealed = self.visible_len() as f32;
            return DialogueSignal::FastForwarded;
        }
        if self.index + 1 >= self.lines.len() {
            if !self.applied {
                self.applied = true;
                apply_effects(state, &self.effects);
            }
            return DialogueSignal::Closed;
        }
        self.index += 1;
        self.stripped = markup::strip_markup(&self.lines[self.index]);
        self.revealed = 0.0;
        DialogueSignal::NextLine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_liner() -> DialoguePayload {
        DialoguePayload::new(["First line.", "Second line."])
            .with_words([WordId::Guru])
            .with_flags([QuestFlag::MetGuru])
    }

    #[test]
    fn empty_payload_never_opens() {
        assert!(DialogueState::open(DialoguePayload::new(Vec::<String>::new()), None).is_none());
    }

    #[test]
    fn reveal_then_fast_forward_then_advance() {
        let mut state = GameState::new(0);
        let mut dialogue = DialogueState::open(two_liner(), None).unwrap();

        assert_eq!(dialogue.phase(), DialoguePhase::Playing);
        dialogue.advance_reveal(0.1);
        assert!(dialogue.visible_text().len() < dialogue.current_line().len());

        // Confirmation while playing completes the line, not the dialogue.
        assert_eq!(dialogue.confirm(&mut state), DialogueSignal::FastForwarded);
        assert_eq!(dialogue.phase(), DialoguePhase::LineComplete);
        assert_eq!(dialogue.visible_text(), "First line.");

        assert_eq!(dialogue.confirm(&mut state), DialogueSignal::NextLine);
        assert_eq!(dialogue.line_index(), 1);
        assert_eq!(dialogue.phase(), DialoguePhase::Playing);
    }

    #[test]
    fn effects_apply_exactly_once_on_close() {
        let mut state = GameState::new(0);
        let mut dialogue = DialogueState::open(two_liner(), None).unwrap();

        dialogue.confirm(&mut state); // fast-forward line 0
        dialogue.confirm(&mut state); // advance to line 1
        dialogue.confirm(&mut state); // fast-forward line 1
        assert!(!state.flag(QuestFlag::MetGuru), "effects must wait for close");

        assert_eq!(dialogue.confirm(&mut state), DialogueSignal::Closed);
        assert!(state.flag(QuestFlag::MetGuru));
        assert!(state.knows(WordId::Guru));

        // A second close path must not re-apply.
        let words_before = state.discovered_words().len();
        assert_eq!(dialogue.confirm(&mut state), DialogueSignal::Closed);
        assert_eq!(state.discovered_words().len(), words_before);
        assert_eq!(state.drain_word_events().count(), 1);
    }

    #[test]
    fn sentence_punctuation_slows_the_reveal() {
        let mut after_period = DialogueState::open(DialoguePayload::line("a. bcd"), None).unwrap();
        let mut plain = DialogueState::open(DialoguePayload::line("ab cde"), None).unwrap();

        // Step both to the same reveal position, just past the second char.
        after_period.revealed = 2.0;
        plain.revealed = 2.0;
        after_period.advance_reveal(0.1);
        plain.advance_reveal(0.1);
        assert!(after_period.revealed < plain.revealed);
    }

    #[test]
    fn markup_is_never_partially_revealed() {
        let mut dialogue =
            DialogueState::open(DialoguePayload::line("{g}word{/} tail"), None).unwrap();
        dialogue.advance_reveal(2.0 / GameConfig::REVEAL_BASE);
        let shown = dialogue.visible_text();
        assert!(shown.starts_with("{g}"), "tags must come through whole: {shown}");
    }
}
