//! Statistics and ProfileStats.

use crate::profile::types::TrigramProfile;

/// A snapshot of profile statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    /// Number of words handed to the extractor.
    pub words_seen: u64,
    /// Number of words too short to contribute trigrams.
    pub words_skipped: u64,
    /// Total trigram occurrences counted.
    pub trigrams_counted: u64,
    /// Number of distinct trigrams.
    pub distinct_trigrams: usize,
}

impl<E> TrigramProfile<E> {
    /// Returns profile statistics.
    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            words_seen: self.words_seen,
            words_skipped: self.words_skipped,
            trigrams_counted: self.trigrams_counted,
            distinct_trigrams: self.slots.len(),
        }
    }
}

impl ProfileStats {
    /// Number of words that contributed at least one trigram.
    pub fn words_counted(&self) -> u64 {
        self.words_seen - self.words_skipped
    }
}

impl core::fmt::Display for ProfileStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} words ({} skipped), {} trigrams, {} distinct",
            self.words_seen, self.words_skipped, self.trigrams_counted, self.distinct_trigrams
        )
    }
}
