//! Character tables of the editor font.

/// Glyph shown in place of a highlighted space (SYMBOL FOR SPACE).
pub const WHITESPACE_GLYPH: char = '\u{2420}';

/// Glyph shown in front of a line feed (SYMBOL FOR LINE FEED).
pub const LINE_FEED_GLYPH: char = '\u{240A}';

/// Glyph shown in front of a carriage return (SYMBOL FOR CARRIAGE RETURN).
pub const CARRIAGE_RETURN_GLYPH: char = '\u{240D}';

/// Raw newline characters, line feed first.
pub const NEWLINE_CHARACTERS: [char; 2] = ['\n', '\r'];

/// Newline glyphs, in the same order as [`NEWLINE_CHARACTERS`].
pub const NEWLINE_GLYPHS: [char; 2] = [LINE_FEED_GLYPH, CARRIAGE_RETURN_GLYPH];

/// Entries shared by both modes; the glyph replaces the character.
pub(crate) const REGULAR_COMMON: &[(char, char)] = &[
    ('\u{0000}', '\u{2400}'), // NULL
    ('\u{0007}', '\u{2407}'), // BELL
    ('\u{0008}', '\u{2408}'), // BS
    ('\u{0009}', '\u{2409}'), // TAB
    ('\u{000B}', '\u{240B}'), // VT
    ('\u{000C}', '\u{240C}'), // FF
    ('\u{001B}', '\u{241B}'), // ESC
    ('\u{00A0}', '\u{2423}'), // NBSP
];

/// Newline entries; the glyph is emitted in front of the character, which is kept.
pub(crate) const REGULAR_NEWLINES: &[(char, char)] = &[
    ('\n', LINE_FEED_GLYPH),
    ('\r', CARRIAGE_RETURN_GLYPH),
];

/// Raw mode additions. Bidi and format controls have no standard picture,
/// so they land in the font's private use area.
pub(crate) const RAW_COMMON: &[(char, char)] = &[
    ('\u{0020}', WHITESPACE_GLYPH), // SPACE
    ('\u{061C}', '\u{F000}'),       // ALM
    ('\u{200B}', '\u{F001}'),       // ZWS
    ('\u{200C}', '\u{F002}'),       // ZWNJ
    ('\u{200D}', '\u{F003}'),       // ZWJ
    ('\u{200E}', '\u{F004}'),       // LRM
    ('\u{200F}', '\u{F005}'),       // RLM
    ('\u{202A}', '\u{F006}'),       // LRE
    ('\u{202B}', '\u{F007}'),       // RLE
    ('\u{202C}', '\u{F008}'),       // PDF
    ('\u{202D}', '\u{F009}'),       // LRO
    ('\u{202E}', '\u{F00A}'),       // RLO
    ('\u{2060}', '\u{F00B}'),       // WJ
    ('\u{2066}', '\u{F00C}'),       // LRI
    ('\u{2067}', '\u{F00D}'),       // RLI
    ('\u{2068}', '\u{F00E}'),       // FSI
    ('\u{2069}', '\u{F00F}'),       // PDI
];
