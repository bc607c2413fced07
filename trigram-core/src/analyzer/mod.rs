//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lowercases raw corpus text
//! - **Tokenizer**: Splits normalized text into letter runs
//! - **Trigram**: Pads words and extracts 3-character sequences

pub mod normalizer;
pub mod tokenizer;
pub mod trigram;

pub use normalizer::TextNormalizer;
pub use tokenizer::WordTokenizer;
pub use trigram::{PaddedWindowExtractor, TrigramExtractor};
