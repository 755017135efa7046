use crate::{
    char_map::{CharacterMap, Replacement},
    mode::Mode,
    tables::{RAW_COMMON, REGULAR_COMMON, REGULAR_NEWLINES, WHITESPACE_GLYPH},
};
use regex::{Captures, Regex, Replacer};
use smallvec::smallvec;
use std::{collections::BTreeMap, sync::LazyLock};

struct ModeTables {
    forward: CharacterMap,
    reverse: CharacterMap,
}

impl ModeTables {
    fn build(mode: Mode, entries: BTreeMap<char, Replacement>) -> Self {
        let forward = CharacterMap::new(entries);
        let reverse = forward.inverted();
        tracing::debug!(
            %mode,
            forward = forward.len(),
            reverse = reverse.len(),
            "built font filter tables"
        );
        ModeTables { forward, reverse }
    }
}

fn regular_entries() -> BTreeMap<char, Replacement> {
    let mut entries: BTreeMap<char, Replacement> = REGULAR_COMMON
        .iter()
        .map(|&(ch, glyph)| (ch, smallvec![glyph]))
        .collect();
    entries.extend(
        REGULAR_NEWLINES
            .iter()
            .map(|&(ch, glyph)| (ch, smallvec![glyph, ch])),
    );
    entries
}

fn raw_entries() -> BTreeMap<char, Replacement> {
    let mut entries = regular_entries();
    entries.extend(RAW_COMMON.iter().map(|&(ch, glyph)| (ch, smallvec![glyph])));
    entries
}

static REGULAR_TABLES: LazyLock<ModeTables> =
    LazyLock::new(|| ModeTables::build(Mode::Regular, regular_entries()));

static RAW_TABLES: LazyLock<ModeTables> =
    LazyLock::new(|| ModeTables::build(Mode::Raw, raw_entries()));

/// Space runs highlighted in regular mode: at the start or end of a line, in
/// front of a whitespace or line feed glyph ending the line, or two or more
/// anywhere. The trailing glyph is captured so it can be put back.
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^ +| +$| +([\x{2420}\x{240A}])$| {2,}")
        .expect("space run pattern is valid")
});

fn tables(mode: Mode) -> &'static ModeTables {
    match mode {
        Mode::Regular => &REGULAR_TABLES,
        Mode::Raw => &RAW_TABLES,
    }
}

/// The map [`apply_filter`] substitutes with in `mode`.
pub fn forward_map(mode: Mode) -> &'static CharacterMap {
    &tables(mode).forward
}

/// The map [`unapply_filter`] substitutes with in `mode`.
pub fn reverse_map(mode: Mode) -> &'static CharacterMap {
    &tables(mode).reverse
}

struct HighlightSpaces;

impl Replacer for HighlightSpaces {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        let run = &caps[0];
        let (spaces, glyph) = match caps.get(1) {
            Some(glyph) => (&run[..run.len() - glyph.as_str().len()], glyph.as_str()),
            None => (run, ""),
        };
        // Spaces are single bytes.
        dst.extend(std::iter::repeat(WHITESPACE_GLYPH).take(spaces.len()));
        dst.push_str(glyph);
    }
}

/// Converts `text` to its display form for `mode`.
///
/// Every mapped code point is replaced by its glyph. Line feeds and carriage
/// returns keep the real character after their glyph, so the display form
/// has the same lines as the input. In [`Mode::Regular`], spaces that would be
/// hard to spot (leading, trailing, or repeated) are then shown as
/// [`WHITESPACE_GLYPH`](crate::WHITESPACE_GLYPH), one glyph per space.
///
/// ```
/// use glyphfilter::{apply_filter, Mode};
///
/// assert_eq!(apply_filter("a  b\tc", Mode::Regular), "a\u{2420}\u{2420}b\u{2409}c");
/// assert_eq!(apply_filter("a b", Mode::Raw), "a\u{2420}b");
/// ```
pub fn apply_filter(text: &str, mode: Mode) -> String {
    let mapped = forward_map(mode).transcode(text);
    match mode {
        Mode::Raw => mapped.into_owned(),
        Mode::Regular => SPACE_RUNS.replace_all(&mapped, HighlightSpaces).into_owned(),
    }
}

/// Converts a display form produced by [`apply_filter`] back to raw text.
///
/// This is a best-effort inverse. Glyphs the user typed literally are not
/// told apart from the ones [`apply_filter`] inserted, and get unmapped too.
///
/// ```
/// use glyphfilter::{unapply_filter, Mode};
///
/// assert_eq!(unapply_filter("a\u{2420}\u{2420}b\u{240A}\n", Mode::Regular), "a  b\n");
/// ```
pub fn unapply_filter(text: &str, mode: Mode) -> String {
    let unmapped = reverse_map(mode).transcode(text);
    match mode {
        Mode::Raw => unmapped.into_owned(),
        Mode::Regular => unmapped.replace(WHITESPACE_GLYPH, " "),
    }
}

/// A font filter bound to one mode, for editing surfaces that keep the
/// active mode next to the value they edit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontFilter {
    mode: Mode,
}

impl FontFilter {
    /// Creates a filter for `mode`.
    pub fn new(mode: Mode) -> Self {
        FontFilter { mode }
    }

    /// The mode this filter applies.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// See [`apply_filter`].
    pub fn apply(&self, text: &str) -> String {
        apply_filter(text, self.mode)
    }

    /// See [`unapply_filter`].
    pub fn unapply(&self, text: &str) -> String {
        unapply_filter(text, self.mode)
    }
}

impl From<Mode> for FontFilter {
    fn from(mode: Mode) -> Self {
        FontFilter::new(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_filter, forward_map, reverse_map, unapply_filter, FontFilter};
    use crate::Mode;

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!("", apply_filter("", Mode::Regular));
        assert_eq!("", unapply_filter("", Mode::Regular));
        assert_eq!("hello world", apply_filter("hello world", Mode::Regular));
        assert_eq!("Grüße, 世界", apply_filter("Grüße, 世界", Mode::Regular));
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(
            "\u{2400}\u{2407}\u{2408}\u{2409}\u{240B}\u{240C}\u{241B}\u{2423}",
            apply_filter("\0\x07\x08\t\x0B\x0C\x1B\u{A0}", Mode::Regular)
        );
        assert_eq!(
            "\0\x07\x08\t\x0B\x0C\x1B\u{A0}",
            unapply_filter(
                "\u{2400}\u{2407}\u{2408}\u{2409}\u{240B}\u{240C}\u{241B}\u{2423}",
                Mode::Regular
            )
        );
    }

    #[test]
    fn test_newlines_keep_their_character() {
        assert_eq!("a\u{240A}\nb", apply_filter("a\nb", Mode::Regular));
        assert_eq!(
            "a\u{240D}\r\u{240A}\nb",
            apply_filter("a\r\nb", Mode::Regular)
        );
        assert_eq!("a\r\nb", unapply_filter("a\u{240D}\r\u{240A}\nb", Mode::Regular));
    }

    #[test]
    fn test_space_runs() {
        assert_eq!("a\u{2420}\u{2420}b", apply_filter("a  b", Mode::Regular));
        assert_eq!("\u{2420}lead", apply_filter(" lead", Mode::Regular));
        assert_eq!("trail\u{2420}", apply_filter("trail ", Mode::Regular));
        assert_eq!("a b", apply_filter("a b", Mode::Regular));
        assert_eq!("\u{2420}\u{2420}\u{2420}", apply_filter("   ", Mode::Regular));
    }

    #[test]
    fn test_space_runs_on_every_line() {
        assert_eq!(
            "a\u{2420}\u{240A}\n\u{2420}b",
            apply_filter("a \n b", Mode::Regular)
        );
        assert_eq!("a\u{240A}\n\u{2420}", apply_filter("a\n ", Mode::Regular));
        assert_eq!(
            "x y\u{240A}\nz\u{2420}\u{2420}",
            apply_filter("x y\nz  ", Mode::Regular)
        );
        assert_eq!("a \n b", unapply_filter("a\u{2420}\u{240A}\n\u{2420}b", Mode::Regular));
    }

    #[test]
    fn test_space_in_front_of_trailing_glyph() {
        assert_eq!("a\u{2420}\u{2420}", apply_filter("a \u{2420}", Mode::Regular));
    }

    #[test]
    fn test_raw_mode() {
        assert_eq!("\u{F001}", apply_filter("\u{200B}", Mode::Raw));
        assert_eq!("\u{200B}", apply_filter("\u{200B}", Mode::Regular));
        assert_eq!("a\u{2420}b", apply_filter("a b", Mode::Raw));
        assert_eq!(
            "\u{F000}\u{F003}\u{F00A}\u{F00F}\u{2409}\u{240A}\n",
            apply_filter("\u{061C}\u{200D}\u{202E}\u{2069}\t\n", Mode::Raw)
        );
        assert_eq!(
            "\u{061C}\u{200D}\u{202E}\u{2069} \t\n",
            unapply_filter("\u{F000}\u{F003}\u{F00A}\u{F00F}\u{2420}\u{2409}\u{240A}\n", Mode::Raw)
        );
    }

    #[test]
    fn test_unapply_is_best_effort() {
        assert_eq!(" ", unapply_filter("\u{2420}", Mode::Regular));
        assert_eq!("\u{200B}", unapply_filter("\u{F001}", Mode::Raw));
        assert_eq!("\u{F001}", unapply_filter("\u{F001}", Mode::Regular));
    }

    #[test]
    fn test_raw_map_extends_regular_map() {
        let regular = forward_map(Mode::Regular);
        let raw = forward_map(Mode::Raw);
        for (ch, replacement) in regular.iter() {
            assert_eq!(Some(replacement), raw.get(ch));
        }
        assert_eq!(10, regular.len());
        assert_eq!(27, raw.len());
        assert_eq!(Some(&[] as &[char]), reverse_map(Mode::Regular).get('\u{240D}'));
        assert_eq!(Some(&[' '][..]), reverse_map(Mode::Raw).get('\u{2420}'));
        assert!(!reverse_map(Mode::Regular).contains('\u{2420}'));
    }

    #[test]
    fn test_font_filter_handle() {
        let filter = FontFilter::from(Mode::Raw);
        assert_eq!(Mode::Raw, filter.mode());
        assert_eq!("\u{2420}x", filter.apply(" x"));
        assert_eq!(" x", filter.unapply("\u{2420}x"));
        assert_eq!(Mode::Regular, FontFilter::default().mode());
        assert_eq!("a\u{2420}\u{2420}b", FontFilter::default().apply("a  b"));
    }
}
