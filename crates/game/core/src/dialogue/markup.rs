//! Inline color-markup helpers.
//!
//! Dialogue text carries `{g}...{/}`-style tags that the presentation layer
//! turns into colors. The reveal machine must ignore them: tags are never
//! typed out character by character, and reveal progress counts only visible
//! characters.

/// Returns the text with all `{...}` tags removed.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '{' {
            for t in chars.by_ref() {
                if t == '}' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Number of visible (non-markup) characters.
pub fn visible_len(text: &str) -> usize {
    strip_markup(text).chars().count()
}

/// Markup-preserving prefix containing at most `n` visible characters. Tags
/// encountered before the cutoff are kept so partially revealed text still
/// colors correctly.
pub fn visible_prefix(text: &str, n: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut shown = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '{' {
            out.push(c);
            for t in chars.by_ref() {
                out.push(t);
                if t == '}' {
                    break;
                }
            }
            continue;
        }
        if shown >= n {
            break;
        }
        out.push(c);
        shown += 1;
    }
    out
}
