//! Text analysis pipeline components.
//!
//! This module provides the pluggable pipeline stages:
//! - **Tokenizer**: Splits a raw text blob into word tokens
//! - **Filter**: Rejects unwanted raw tokens (stop words, length bounds)
//! - **Normalizer**: Transforms surviving tokens into canonical words

pub mod filter;
pub mod normalizer;
pub mod tokenizer;

pub use filter::{CompositeFilter, Filter, StopWordFilter, WordSizeFilter};
pub use normalizer::{
    CharacterStripping, DiacriticStripping, LowerCase, Normalizer, TrimToEmpty,
};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
