//! Profile types.

use crate::analyzer::{PaddedWindowExtractor, TextNormalizer, WordTokenizer};
use rustc_hash::FxHashMap;
use trigram_types::{ExtractionConfig, Trigram};

/// Count slot for one distinct trigram. Slots are stored in first-seen order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CountSlot {
    pub trigram: Trigram,
    pub count: u64,
}

/// Trigram frequency table for one corpus.
///
/// Counts live in `slots`, which only ever grows by appending, so a slot's
/// index is the trigram's first-seen rank. `index` maps a trigram to its slot.
pub struct TrigramProfile<E = PaddedWindowExtractor> {
    pub(crate) index: FxHashMap<Trigram, usize>,
    pub(crate) slots: Vec<CountSlot>,
    pub(crate) config: ExtractionConfig,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) tokenizer: WordTokenizer,
    pub(crate) extractor: E,
    /// Reusable buffer for normalized text
    pub(crate) norm_buf: String,
    /// Words handed to the extractor
    pub(crate) words_seen: u64,
    /// Words rejected as too short
    pub(crate) words_skipped: u64,
    /// Total trigram occurrences counted
    pub(crate) trigrams_counted: u64,
}

impl Default for TrigramProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl TrigramProfile {
    /// Creates a new, empty profile with default options.
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    /// Creates a new profile with custom options.
    ///
    /// Options are not validated here; see [`ExtractionConfig::validate`].
    pub fn with_config(config: ExtractionConfig) -> Self {
        let extractor = PaddedWindowExtractor::from_config(&config);
        Self::with_extractor(config, extractor)
    }
}

impl<E> TrigramProfile<E> {
    /// Creates a new profile that uses a custom extractor.
    ///
    /// `config.pad` and `config.min_word_chars` are the extractor's business;
    /// only `config.limit` is read by the profile itself.
    pub fn with_extractor(config: ExtractionConfig, extractor: E) -> Self {
        Self {
            index: FxHashMap::default(),
            slots: Vec::new(),
            config,
            normalizer: TextNormalizer::new(),
            tokenizer: WordTokenizer::new(),
            extractor,
            norm_buf: String::new(),
            words_seen: 0,
            words_skipped: 0,
            trigrams_counted: 0,
        }
    }

    /// Returns the options this profile was built with.
    #[inline(always)]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Returns the number of distinct trigrams counted.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no trigram has been counted.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns how many times `trigram` has been counted.
    #[inline]
    pub fn count(&self, trigram: &Trigram) -> u64 {
        self.index
            .get(trigram)
            .map_or(0, |&slot| self.slots[slot].count)
    }

    /// Removes all counts and resets statistics, keeping options.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.norm_buf.clear();
        self.words_seen = 0;
        self.words_skipped = 0;
        self.trigrams_counted = 0;
    }
}
