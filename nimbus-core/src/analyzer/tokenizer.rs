//! Word Tokenization Module
//!
//! This module provides the tokenization stage of the analysis pipeline:
//! splitting a raw text blob into word tokens. It's the first stage of the
//! pipeline; everything downstream (filters, normalizers, counting) works on
//! the tokens emitted here.
//!
//! ## What It Does
//!
//! Given raw input like `"The  quick brown\tfox"`, the default tokenizer
//! emits each whitespace-delimited word:
//!
//! ```ignore
//! "The"
//! "quick"
//! "brown"
//! "fox"
//! ```
//!
//! ## Key Features
//!
//! - **Pluggable**: Tokenization is a single-method trait; swap in your own
//!   strategy without touching any other pipeline stage
//! - **Whitespace default**: Splits on whitespace runs, discarding empty
//!   fragments (Unicode whitespace included)
//! - **Raw tokens**: No trimming, stripping or case-folding happens here;
//!   that is the normalizer chain's job
//!
//! ## Usage
//!
//! ```
//! use nimbus_core::analyzer::tokenizer::{Tokenizer, WhitespaceTokenizer};
//!
//! let tokenizer = WhitespaceTokenizer;
//! let tokens = tokenizer.tokenize("hello  world");
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

/// Splits a text blob into a sequence of raw word tokens.
///
/// Implementations must be pure: the same input always yields the same
/// token sequence. Tokens are returned in document order.
pub trait Tokenizer {
    /// Tokenizes `text` into raw word tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer - splits on whitespace runs.
///
/// Consecutive whitespace (spaces, tabs, newlines, Unicode whitespace)
/// counts as a single separator, so no empty tokens are ever produced.
///
/// ## Example
///
/// ```
/// use nimbus_core::analyzer::tokenizer::{Tokenizer, WhitespaceTokenizer};
///
/// let tokens = WhitespaceTokenizer.tokenize("one\t two\n  three");
/// assert_eq!(tokens, vec!["one", "two", "three"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }
}
