//! Locale-aware length measurement for plain text
//!
//! Hangul text has no reliable word boundaries, so each syllable block counts
//! as one unit. Everything else is counted as whitespace-delimited tokens.
//! Both functions expect text that has already been stripped of markup
//! (see [`crate::markup::strip_markup`]).

/// First precomposed Hangul syllable (가)
const HANGUL_SYLLABLE_FIRST: char = '\u{AC00}';

/// Last precomposed Hangul syllable (힣)
const HANGUL_SYLLABLE_LAST: char = '\u{D7A3}';

/// Whether `ch` is a precomposed Hangul syllable block
#[inline]
pub fn is_hangul_syllable(ch: char) -> bool {
    (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&ch)
}

/// Count "words": one per Hangul syllable, plus one per whitespace-delimited
/// token left after the syllables are removed.
pub fn count_words(text: &str) -> usize {
    let syllables = text.chars().filter(|&c| is_hangul_syllable(c)).count();

    let remainder: String = text.chars().filter(|&c| !is_hangul_syllable(c)).collect();
    let tokens = remainder.split_whitespace().count();

    syllables + tokens
}

/// Count characters as Unicode scalar values
#[inline]
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}
