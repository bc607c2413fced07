//! Top-N selection over the frequency table.

use crate::profile::types::TrigramProfile;
use tracing::debug;
use trigram_types::{Trigram, TrigramCount};

impl<E> TrigramProfile<E> {
    /// Returns the ranked profile, truncated to the configured limit.
    ///
    /// Ordered by count descending; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<TrigramCount> {
        self.ranked_top(self.config.limit)
    }

    /// Returns at most `limit` trigrams in ranked order.
    pub fn ranked_top(&self, limit: usize) -> Vec<TrigramCount> {
        let limit = limit.min(self.slots.len());
        if limit == 0 {
            return Vec::new();
        }

        let mut entries: Vec<TrigramCount> = self
            .slots
            .iter()
            .enumerate()
            .map(|(rank, slot)| TrigramCount::new(slot.trigram, slot.count, rank))
            .collect();

        // first_seen is unique per entry, so the order is total and an
        // unstable partition followed by an unstable sort is deterministic.
        if limit < entries.len() {
            entries.select_nth_unstable_by(limit - 1, |a, b| b.cmp(a));
            entries.truncate(limit);
        }
        entries.sort_unstable_by(|a, b| b.cmp(a));

        debug!(
            distinct = self.slots.len(),
            kept = entries.len(),
            "Ranked trigrams"
        );

        entries
    }

    /// Returns the ranked trigram list without counts.
    pub fn top_trigrams(&self) -> Vec<Trigram> {
        self.ranked().into_iter().map(|entry| entry.trigram).collect()
    }
}
