//! Character trigram profiling for language-identification training data.
//!
//! The pipeline is load → profile → emit:
//!
//! - [`corpus::load_corpus`] reads a UTF-8 text file
//! - [`TrigramProfile`] lowercases it, splits it into letter runs,
//!   pads each word with a boundary placeholder and counts every trigram
//! - [`emit::emit`] writes the ranked list as a Lua table
//!
//! ```
//! use trigram_core::{emit::render_table, rank_trigrams};
//!
//! let table = render_table(&rank_trigrams("The the THE"));
//! assert_eq!(table, "return {\n    \"_th\",\n    \"the\",\n    \"he_\",\n}");
//! ```

pub mod analyzer;
pub mod corpus;
pub mod emit;
pub mod error;
pub mod profile;

pub use error::{ReadError, WriteError};
pub use profile::{rank_trigrams, ProfileStats, TrigramProfile};
pub use trigram_types::{ConfigError, ExtractionConfig, Trigram, TrigramCount};
