//! Public API for counting trigrams.

use crate::analyzer::TrigramExtractor;
use crate::profile::types::{CountSlot, TrigramProfile};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use tracing::debug;
use trigram_types::Trigram;

/// Increments the count for `trigram`, appending a new slot on first sight.
#[inline(always)]
fn bump(index: &mut FxHashMap<Trigram, usize>, slots: &mut Vec<CountSlot>, trigram: Trigram) {
    match index.entry(trigram) {
        Entry::Occupied(slot) => slots[*slot.get()].count += 1,
        Entry::Vacant(slot) => {
            slot.insert(slots.len());
            slots.push(CountSlot { trigram, count: 1 });
        }
    }
}

impl<E: TrigramExtractor> TrigramProfile<E> {
    /// Adds raw text to the profile.
    ///
    /// The text is lowercased, split into letter runs, and every word
    /// long enough is padded and counted. Calling this repeatedly accumulates
    /// counts as if the texts had been concatenated with a separator between.
    pub fn add_text(&mut self, text: &str) {
        let mut norm = std::mem::take(&mut self.norm_buf);
        self.normalizer.normalize_into(text, &mut norm);

        let words_before = self.words_seen;
        let tokenizer = self.tokenizer;
        tokenizer.tokenize(&norm, |word, _| {
            self.add_word(word);
        });

        debug!(
            bytes = text.len(),
            words = self.words_seen - words_before,
            distinct = self.slots.len(),
            "Counted text"
        );

        self.norm_buf = norm;
    }

    /// Counts the trigrams of one word.
    ///
    /// The word is taken as-is: callers are expected to pass lowercased,
    /// letters-only text. Returns the number of trigrams counted, zero if the
    /// extractor rejected the word.
    pub fn add_word(&mut self, word: &str) -> usize {
        let Self {
            index,
            slots,
            extractor,
            ..
        } = self;
        let emitted = extractor.extract(word, |trigram| bump(index, slots, trigram));

        self.words_seen += 1;
        if emitted == 0 {
            self.words_skipped += 1;
        } else {
            self.trigrams_counted += emitted as u64;
        }
        emitted
    }
}
