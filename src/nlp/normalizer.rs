//! Text normalization and sentence splitting
//!
//! Pure functions that turn raw text into a clean lowercase form and into
//! indexed sentence spans. Both are deterministic over their input.

use crate::types::Sentence;

/// Normalize raw text into a clean, lowercase, single-spaced form.
///
/// Curly apostrophes (U+2018, U+2019) are removed outright so contractions
/// collapse into one token instead of splitting. Every other character that
/// is not a Unicode letter, digit, or whitespace becomes a single space, and
/// whitespace runs are collapsed.
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for c in lowered.chars() {
        match c {
            '\u{2018}' | '\u{2019}' => {}
            c if c.is_alphanumeric() || c.is_whitespace() => out.push(c),
            _ => out.push(' '),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split raw text into trimmed, indexed sentences.
///
/// Newlines are treated as spaces, so a sentence may span line breaks.
/// Splitting happens on runs of `.`, `!`, or `?`; empty pieces are dropped.
/// Each surviving sentence carries its input-order index, which is preserved
/// through deduplication and selection.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    text.replace(['\n', '\r'], " ")
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, piece)| Sentence::new(piece, index))
        .collect()
}
