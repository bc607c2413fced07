//! Core types for the trigram profile generator.
//!
//! This crate provides the value types that are shared between the
//! profiling library and the command-line front end. Keeping them separate
//! ensures:
//!
//! - **No dependencies**: Types compile with nothing but `core` and `std`
//! - **Cross-crate compatibility**: Core and CLI agree on one `Trigram`
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

/// Default number of trigrams kept in a ranked profile.
pub const DEFAULT_LIMIT: usize = 300;

/// Default boundary placeholder added around every word.
pub const DEFAULT_PAD: char = '_';

/// Default minimum word length (in characters) that contributes trigrams.
pub const DEFAULT_MIN_WORD_CHARS: usize = 2;

/// A trigram: exactly three Unicode scalar values.
///
/// Stored inline as `[char; 3]` so it is `Copy` and works as a hash map key
/// without allocation. Identity is the exact character sequence; no case
/// folding happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Trigram(pub [char; 3]);

impl Trigram {
    /// Creates a trigram from three characters.
    #[inline(always)]
    pub const fn from_chars(c0: char, c1: char, c2: char) -> Self {
        Self([c0, c1, c2])
    }

    /// Number of bytes this trigram occupies when encoded as UTF-8.
    #[inline]
    pub fn len_utf8(self) -> usize {
        self.0.iter().map(|c| c.len_utf8()).sum()
    }

    /// Appends the UTF-8 encoding of this trigram to `out`.
    #[inline]
    pub fn push_to(self, out: &mut String) {
        out.reserve(self.len_utf8());
        for c in self.0 {
            out.push(c);
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for c in self.0 {
            f.write_char(c)?;
        }
        Ok(())
    }
}

/// Error returned when parsing a string that is not exactly three characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrigramLengthError {
    /// Number of characters actually found.
    pub chars: usize,
}

impl fmt::Display for TrigramLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trigram must be exactly 3 characters, got {}", self.chars)
    }
}

impl core::error::Error for TrigramLengthError {}

impl FromStr for Trigram {
    type Err = TrigramLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.chars();
        match (it.next(), it.next(), it.next(), it.next()) {
            (Some(c0), Some(c1), Some(c2), None) => Ok(Self([c0, c1, c2])),
            _ => Err(TrigramLengthError {
                chars: s.chars().count(),
            }),
        }
    }
}

/// A trigram together with its occurrence count and first-seen rank.
///
/// Ordered by count (higher = greater), then by first-seen rank (earlier =
/// greater), so sorting in descending order yields the ranked profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrigramCount {
    /// The trigram
    pub trigram: Trigram,
    /// Number of occurrences across the corpus
    pub count: u64,
    /// Zero-based index of the first time this trigram was counted
    pub first_seen: usize,
}

impl TrigramCount {
    /// Creates a new counted trigram.
    #[inline(always)]
    pub const fn new(trigram: Trigram, count: u64, first_seen: usize) -> Self {
        Self {
            trigram,
            count,
            first_seen,
        }
    }
}

impl PartialOrd for TrigramCount {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TrigramCount {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: count (higher = greater)
        // Secondary: first_seen reversed, so the earlier trigram wins ties
        match self.count.cmp(&other.count) {
            core::cmp::Ordering::Equal => other.first_seen.cmp(&self.first_seen),
            ord => ord,
        }
    }
}

impl fmt::Display for TrigramCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} x{}", self.trigram.to_string(), self.count)
    }
}

/// Errors from an invalid [`ExtractionConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The ranked list limit was zero.
    ZeroLimit,
    /// The boundary placeholder is a letter and could collide with word text.
    AlphabeticPad {
        /// The rejected placeholder.
        pad: char,
    },
    /// The minimum word length was zero.
    ZeroMinWordChars,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroLimit => write!(f, "trigram limit must be at least 1"),
            ConfigError::AlphabeticPad { pad } => {
                write!(f, "padding character {:?} must not be alphabetic", pad)
            }
            ConfigError::ZeroMinWordChars => {
                write!(f, "minimum word length must be at least 1 character")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Trigram extraction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Maximum number of trigrams in the ranked list.
    /// Default: 300
    pub limit: usize,
    /// Boundary placeholder prepended and appended to every word.
    /// Default: `'_'`
    pub pad: char,
    /// Words shorter than this many characters contribute nothing.
    /// Default: 2
    pub min_word_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            pad: DEFAULT_PAD,
            min_word_chars: DEFAULT_MIN_WORD_CHARS,
        }
    }
}

impl ExtractionConfig {
    /// Returns a copy with a different ranked list limit.
    pub const fn with_limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }

    /// Checks that the options can produce a well-formed profile.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if self.pad.is_alphabetic() {
            return Err(ConfigError::AlphabeticPad { pad: self.pad });
        }
        if self.min_word_chars == 0 {
            return Err(ConfigError::ZeroMinWordChars);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigram_from_chars() {
        let t = Trigram::from_chars('a', 'b', 'c');
        assert_eq!(t.0, ['a', 'b', 'c']);
        assert_eq!(t.to_string(), "abc");
    }

    #[test]
    fn trigram_parse() {
        let t: Trigram = "_th".parse().unwrap();
        assert_eq!(t, Trigram::from_chars('_', 't', 'h'));

        // Multi-byte characters count as one position each
        let t: Trigram = "жир".parse().unwrap();
        assert_eq!(t.len_utf8(), 6);
        assert_eq!(t.to_string(), "жир");
    }

    #[test]
    fn trigram_parse_wrong_length() {
        assert_eq!(
            "ab".parse::<Trigram>(),
            Err(TrigramLengthError { chars: 2 })
        );
        assert_eq!(
            "abcd".parse::<Trigram>(),
            Err(TrigramLengthError { chars: 4 })
        );
        assert_eq!("".parse::<Trigram>(), Err(TrigramLengthError { chars: 0 }));
    }

    #[test]
    fn trigram_push_to() {
        let mut out = String::from("x");
        Trigram::from_chars('é', 't', '_').push_to(&mut out);
        assert_eq!(out, "xét_");
    }

    #[test]
    fn count_ordering() {
        let t = Trigram::from_chars('a', 'b', 'c');
        let high = TrigramCount::new(t, 9, 4);
        let low = TrigramCount::new(t, 2, 0);
        let tie_early = TrigramCount::new(t, 9, 1);

        assert!(high > low); // Higher count is "greater"

        // When counts are equal, the earlier first_seen wins
        assert!(tie_early > high);
        assert_eq!(high.cmp(&tie_early), core::cmp::Ordering::Less);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn first_seen_past_u32_range() {
        let t = Trigram::from_chars('a', 'b', 'c');
        let wide = u32::MAX as usize + 1;
        let early = TrigramCount::new(t, 5, 1);
        let late = TrigramCount::new(t, 5, wide);

        // A rank above u32::MAX must not wrap around to an early rank
        assert_eq!(late.first_seen, wide);
        assert!(early > late);
    }

    #[test]
    fn count_descending_sort() {
        let t = |s: &str| s.parse::<Trigram>().unwrap();
        let mut entries = vec![
            TrigramCount::new(t("aaa"), 1, 0),
            TrigramCount::new(t("bbb"), 3, 1),
            TrigramCount::new(t("ccc"), 3, 2),
            TrigramCount::new(t("ddd"), 2, 3),
        ];
        entries.sort_unstable_by(|a, b| b.cmp(a));

        let order: Vec<String> = entries.iter().map(|e| e.trigram.to_string()).collect();
        assert_eq!(order, ["bbb", "ccc", "ddd", "aaa"]);
    }

    #[test]
    fn config_default() {
        let config = ExtractionConfig::default();
        assert_eq!(config.limit, 300);
        assert_eq!(config.pad, '_');
        assert_eq!(config.min_word_chars, 2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_rejects_invalid() {
        let base = ExtractionConfig::default();

        assert_eq!(
            base.with_limit(0).validate(),
            Err(ConfigError::ZeroLimit)
        );
        assert_eq!(
            ExtractionConfig { pad: 'x', ..base }.validate(),
            Err(ConfigError::AlphabeticPad { pad: 'x' })
        );
        assert_eq!(
            ExtractionConfig {
                min_word_chars: 0,
                ..base
            }
            .validate(),
            Err(ConfigError::ZeroMinWordChars)
        );
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::ZeroLimit.to_string(),
            "trigram limit must be at least 1"
        );
        assert_eq!(
            ConfigError::AlphabeticPad { pad: 'q' }.to_string(),
            "padding character 'q' must not be alphabetic"
        );
    }
}
