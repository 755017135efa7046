//! Trailing newline bookkeeping between stored text and its display form.
//!
//! An editing widget shows at most one newline glyph per value, so the
//! conversions here touch only the first glyph of each kind.

use crate::tables::{
    CARRIAGE_RETURN_GLYPH, LINE_FEED_GLYPH, NEWLINE_CHARACTERS, NEWLINE_GLYPHS,
};

/// Returns `true` if `ch` is the line feed or carriage return glyph.
pub fn is_newline_glyph(ch: char) -> bool {
    NEWLINE_GLYPHS.contains(&ch)
}

/// Counts the line feeds and carriage returns in `text`.
pub fn count_newline_characters(text: &str) -> usize {
    text.chars()
        .filter(|ch| NEWLINE_CHARACTERS.contains(ch))
        .count()
}

/// Counts the newline glyphs in `text`.
pub fn count_newline_glyphs(text: &str) -> usize {
    text.chars().filter(|&ch| is_newline_glyph(ch)).count()
}

/// Removes every line feed and carriage return from `text`.
pub fn strip_newline_characters(text: &str) -> String {
    text.replace(&NEWLINE_CHARACTERS[..], "")
}

/// Turns the first line feed glyph into a line feed and the first carriage
/// return glyph into a carriage return.
pub fn convert_newline_glyphs_to_characters(text: &str) -> String {
    text.replacen(LINE_FEED_GLYPH, "\n", 1)
        .replacen(CARRIAGE_RETURN_GLYPH, "\r", 1)
}
