//! Trigram frequency profiling for one corpus.
//!
//! A [`TrigramProfile`] accumulates boundary-aware trigram counts across any
//! amount of text and ranks them by frequency.
//!
//! Memory Layout:
//! - Counts are stored in one append-only vector, in first-seen order
//! - An `FxHashMap` maps each trigram to its slot in that vector
//! - A slot's index doubles as the tie-break key during ranking
//!
//! Threading:
//! - [`TrigramProfile`] is single-threaded. It owns a reusable normalization
//!   buffer and is meant to be driven by one batch job.

mod api;
mod ranking;
mod stats;
mod types;

pub use stats::ProfileStats;
pub use types::TrigramProfile;

use trigram_types::Trigram;

/// Ranks the trigrams of `text` with default options.
///
/// # Example
///
/// ```
/// use trigram_core::rank_trigrams;
///
/// let top: Vec<String> = rank_trigrams("the the the")
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(top, ["_th", "the", "he_"]);
/// ```
pub fn rank_trigrams(text: &str) -> Vec<Trigram> {
    let mut profile = TrigramProfile::new();
    profile.add_text(text);
    profile.top_trigrams()
}
