#![deny(warnings, missing_docs, missing_debug_implementations)]
//! Display transcoding for an editor font that makes invisible characters visible.
//!
//! Text edited in a translation editor may carry control characters, bidi
//! marks and stray spaces that a normal font renders as nothing. The editor
//! uses a custom font instead, and this crate converts text between its raw
//! form and the form shown in that font.
//!
//! # Modes
//!
//! * [`Mode::Regular`] replaces control characters (NUL, BEL, BS, TAB, VT,
//!   FF, ESC) and the no-break space with Unicode control pictures. Line
//!   feeds and carriage returns get a glyph in front and keep their real
//!   character, so lines stay lines. Spaces at the start or end of a line, and
//!   runs of two or more, are shown as U+2420.
//! * [`Mode::Raw`] maps everything `Regular` maps, every space, and the bidi
//!   and format controls (ALM, ZWS, ZWNJ, ZWJ, LRM, RLM, LRE, RLE, PDF, LRO,
//!   RLO, WJ, LRI, RLI, FSI, PDI), which the font draws from its private use
//!   area at U+F000..U+F00F.
//!
//! # Round trips
//!
//! [`unapply_filter`] undoes [`apply_filter`] for text that did not contain
//! any glyph to begin with. Glyphs present in the input are unmapped as
//! well, so the inverse is best-effort for arbitrary display text.
//!
//! All tables are built on first use and shared read-only between threads.

pub(crate) mod tables;

pub(crate) mod char_map;

pub(crate) mod mode;

pub(crate) mod filter;

pub(crate) mod newline;

pub use tables::{
    CARRIAGE_RETURN_GLYPH, LINE_FEED_GLYPH, NEWLINE_CHARACTERS, NEWLINE_GLYPHS, WHITESPACE_GLYPH,
};

pub use char_map::CharacterMap;

pub use mode::{Mode, ParseModeError};

pub use filter::{apply_filter, forward_map, reverse_map, unapply_filter, FontFilter};

pub use newline::{
    convert_newline_glyphs_to_characters, count_newline_characters, count_newline_glyphs,
    is_newline_glyph, strip_newline_characters,
};
