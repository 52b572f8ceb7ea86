//! # nimbus-core
//!
//! Word-frequency statistics engine for word-cloud style visualizations.
//!
//! The central type is [`FrequencyAnalyzer`]: feed it text (in-memory
//! strings, files, readers, or URLs) and it produces a ranked list of
//! [`WordFrequency`] pairs. Every run walks the same pipeline:
//!
//! 1. **tokenize** each text into raw tokens
//! 2. **filter** raw tokens (stop words, length bounds, user filters)
//! 3. **normalize** survivors into canonical words
//! 4. **aggregate** counts per canonical word
//! 5. **rank** by count and truncate to the configured top-N
//!
//! Each stage is pluggable: swap the [`Tokenizer`], append [`Filter`]s, or
//! replace the [`Normalizer`] chain without touching the rest.
//!
//! ## Quick start
//!
//! ```
//! use nimbus_core::FrequencyAnalyzer;
//!
//! let mut analyzer = FrequencyAnalyzer::new();
//! analyzer.set_stop_words(["the"]);
//!
//! let top = analyzer.load(&["the cat sat on the mat"]);
//! assert_eq!(top[0].word, "cat");
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod frequency;
pub mod source;

pub use analyzer::{
    CharacterStripping, CompositeFilter, DiacriticStripping, Filter, LowerCase, Normalizer,
    StopWordFilter, Tokenizer, TrimToEmpty, WhitespaceTokenizer, WordSizeFilter,
};
pub use frequency::{AnalyzerMetrics, FrequencyAnalyzer, RunStats};
pub use source::LoadError;

pub use nimbus_types::{encoding, AnalyzerConfig, ConfigError, Count, WordFrequency};
