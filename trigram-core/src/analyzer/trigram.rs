//! Trigram extraction module.
//!
//! Provides extraction of boundary-aware 3-character sequences from words.
//! Every word is padded with one placeholder on each side before the
//! window slides over it, so trigrams also capture how words start and end.

use smallvec::SmallVec;
use trigram_types::{ExtractionConfig, Trigram};

/// Inline capacity of the padded character buffer. Longer words spill to the heap.
const PADDED_INLINE: usize = 32;

/// Pads `word` with `pad` on both ends and emits every width-3 window.
///
/// A word of N characters becomes N+2 characters after padding and yields
/// exactly N trigrams. No length filtering happens here.
///
/// # Example
///
/// ```
/// use trigram_core::analyzer::trigram::extract_padded_trigrams;
///
/// let mut trigrams = Vec::new();
/// extract_padded_trigrams("cat", '_', |t| trigrams.push(t.to_string()));
///
/// assert_eq!(trigrams, ["_ca", "cat", "at_"]);
/// ```
#[inline]
pub fn extract_padded_trigrams<F>(word: &str, pad: char, mut callback: F) -> usize
where
    F: FnMut(Trigram),
{
    let mut padded: SmallVec<[char; PADDED_INLINE]> = SmallVec::with_capacity(word.len() + 2);
    padded.push(pad);
    padded.extend(word.chars());
    padded.push(pad);

    let mut emitted = 0usize;
    for window in padded.windows(3) {
        callback(Trigram::from_chars(window[0], window[1], window[2]));
        emitted += 1;
    }
    emitted
}

/// Trait for types that turn a normalized word into trigrams.
///
/// This allows alternative padding or filtering strategies while reusing
/// the same counting and ranking code.
pub trait TrigramExtractor {
    /// Extracts the trigrams of one word.
    ///
    /// Returns the number of trigrams emitted. Zero means the word was
    /// rejected and contributed nothing.
    fn extract<F>(&self, word: &str, callback: F) -> usize
    where
        F: FnMut(Trigram);
}

/// Standard extractor: skips short words, pads the rest and slides a window.
#[derive(Debug, Clone, Copy)]
pub struct PaddedWindowExtractor {
    pad: char,
    min_word_chars: usize,
}

impl Default for PaddedWindowExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl PaddedWindowExtractor {
    /// Creates an extractor with an explicit placeholder and minimum word length.
    pub const fn new(pad: char, min_word_chars: usize) -> Self {
        Self {
            pad,
            min_word_chars,
        }
    }

    /// Creates an extractor from extraction options.
    pub const fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.pad, config.min_word_chars)
    }

    /// Returns `true` if `word` is long enough to contribute trigrams.
    #[inline]
    pub fn accepts(&self, word: &str) -> bool {
        word.chars().take(self.min_word_chars).count() >= self.min_word_chars
    }
}

impl TrigramExtractor for PaddedWindowExtractor {
    #[inline]
    fn extract<F>(&self, word: &str, callback: F) -> usize
    where
        F: FnMut(Trigram),
    {
        if word.is_empty() || !self.accepts(word) {
            return 0;
        }
        extract_padded_trigrams(word, self.pad, callback)
    }
}
