use regex::{Captures, Regex, Replacer};
use smallvec::{smallvec, SmallVec};
use std::{borrow::Cow, collections::BTreeMap};

/// What a mapped code point turns into: zero, one or two `char`s.
pub(crate) type Replacement = SmallVec<[char; 2]>;

/// An immutable table from single code points to their replacements.
///
/// Every map carries a compiled pattern matching exactly its keys, so a whole
/// string is rewritten in one leftmost-first pass. Replacements are never
/// rescanned.
#[derive(Debug, Clone)]
pub struct CharacterMap {
    entries: BTreeMap<char, Replacement>,
    pattern: Regex,
}

impl CharacterMap {
    pub(crate) fn new(entries: BTreeMap<char, Replacement>) -> Self {
        debug_assert!(!entries.is_empty());
        let pattern = code_point_class(entries.keys().copied());
        CharacterMap { entries, pattern }
    }

    /// Derives the map undoing this one.
    ///
    /// A replacement `glyph` inverts to `glyph -> key`. A replacement made of
    /// a glyph followed by the key itself inverts to `glyph -> ""`: the
    /// forward pass kept the original character, so only the glyph goes away.
    pub(crate) fn inverted(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|(&ch, replacement)| match replacement.as_slice() {
                [glyph] => Some((*glyph, smallvec![ch])),
                [glyph, kept] if *kept == ch => Some((*glyph, Replacement::new())),
                _ => None,
            })
            .collect();
        CharacterMap::new(entries)
    }

    /// Returns the replacement for `ch`, if it is mapped.
    pub fn get(&self, ch: char) -> Option<&[char]> {
        self.entries.get(&ch).map(|replacement| replacement.as_slice())
    }

    /// Returns `true` if `ch` is one of the mapped code points.
    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    /// Number of mapped code points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries, ordered by source code point.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[char])> + '_ {
        self.entries
            .iter()
            .map(|(&ch, replacement)| (ch, replacement.as_slice()))
    }

    /// Replaces every mapped code point of `text`, borrowing when nothing matches.
    pub fn transcode<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, Substitute(&self.entries))
    }
}

struct Substitute<'m>(&'m BTreeMap<char, Replacement>);

impl Replacer for Substitute<'_> {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        for ch in caps[0].chars() {
            match self.0.get(&ch) {
                Some(replacement) => dst.extend(replacement.iter()),
                None => dst.push(ch),
            }
        }
    }
}

fn code_point_class(chars: impl Iterator<Item = char>) -> Regex {
    let mut class = String::from("[");
    for ch in chars {
        class.push_str(&format!("\\x{{{:X}}}", u32::from(ch)));
    }
    class.push(']');
    Regex::new(&class).expect("escaped code points always form a valid class")
}
