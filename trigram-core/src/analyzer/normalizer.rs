//! Case normalization for raw corpus text.

/// Unicode-aware lowercasing normalizer.
///
/// Performs the following operations:
/// - Converts every character to lowercase using full Unicode case mapping,
///   including context-sensitive rules (a word-final `Σ` becomes `ς`)
/// - Leaves everything else untouched; punctuation, digits and whitespace
///   are the tokenizer's concern
///
/// # Performance
///
/// Pure ASCII input is copied and lowered in place, byte by byte.
/// Anything else goes through `str::to_lowercase`.
///
/// # Examples
///
/// ```
/// use trigram_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("Hello, WORLD"), "hello, world");
/// assert_eq!(normalizer.normalize("ΟΔΟΣ"), "οδος");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        if input.is_ascii() {
            out.push_str(input);
            out.make_ascii_lowercase();
            return;
        }

        // Final-sigma handling needs the surrounding context, so the
        // non-ASCII path lowers the whole string at once.
        out.push_str(&input.to_lowercase());
    }

    /// Allocating form of [`normalize_into`](Self::normalize_into).
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_lowercase() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("The QUICK Brown fox"), "the quick brown fox");
    }

    #[test]
    fn preserves_non_letters() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("A1_b-C!\n\tD"), "a1_b-c!\n\td");
    }

    #[test]
    fn empty_input() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn unicode_lowercase() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("ÉCOLE"), "école");
        assert_eq!(n.normalize("ПРИВІТ Світ"), "привіт світ");
        assert_eq!(n.normalize("ĈIUJ ŜANĜOJ"), "ĉiuj ŝanĝoj");
    }

    #[test]
    fn final_sigma() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("ΟΔΟΣ"), "οδος");
        assert_eq!(n.normalize("ΣΑΣ ΣΟΦΟΣ"), "σας σοφος");
    }

    #[test]
    fn buffer_is_reused() {
        let n = TextNormalizer::new();
        let mut buf = String::with_capacity(64);
        n.normalize_into("FIRST", &mut buf);
        assert_eq!(buf, "first");

        n.normalize_into("Second", &mut buf);
        assert_eq!(buf, "second");
        assert!(buf.capacity() >= 64);
    }

    #[test]
    fn idempotent() {
        let n = TextNormalizer::new();
        let once = n.normalize("Ünïcödé MIXED text ΣΣ");
        assert_eq!(n.normalize(&once), once);
    }
}
