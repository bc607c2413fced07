//! Word Tokenizer Module
//!
//! Splits normalized corpus text into words. It's the second stage of the
//! profiling pipeline, taking lowercased text and handing each word to the
//! trigram extractor.
//!
//! ## What It Does
//!
//! A word is a maximal run of letters. Every other character
//! (digits, punctuation, whitespace, underscores, symbols) is a separator and
//! never appears inside a word. Given `"it's 42 o'clock_now"` it emits:
//!
//! ```ignore
//! ("it", 0)
//! ("s", 1)
//! ("o", 2)
//! ("clock", 3)
//! ("now", 4)
//! ```
//!
//! ## Script Coverage
//!
//! A letter is any character in Unicode General_Category `L` (`Lu`, `Ll`,
//! `Lt`, `Lm`, `Lo`), matched with the `\p{L}` class, not a fixed range.
//! Cyrillic, Greek, CJK and every other script produce words the same way
//! Latin text does. Combining marks (`Mn`, `Mc`) such as Devanagari vowel
//! signs or Arabic harakat are not letters and split words, as do
//! digit-like characters such as `²` (`No`).
//!
//! ## Zero Allocation
//!
//! Words are `&str` slices of the input. The tokenizer never copies text.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal run of Unicode letters.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("word pattern is a valid regex"));

/// Streaming tokenizer - emits maximal letter runs.
///
/// ## Example
///
/// ```
/// use trigram_core::analyzer::WordTokenizer;
///
/// let mut words = Vec::new();
/// WordTokenizer::new().tokenize("hello, wörld 42x", |word, _pos| words.push(word));
///
/// assert_eq!(words, ["hello", "wörld", "x"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(word, position)`.
    ///
    /// Position is the zero-based index of the word in the input.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, usize),
    {
        for (pos, word) in WORD.find_iter(normalized).enumerate() {
            emit(word.as_str(), pos);
        }
    }

    /// Counts words without emitting them.
    pub fn count_words(&self, normalized: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(normalized, |_, _| n += 1);
        n
    }
}
