//! Core types for the Nimbus word-frequency engine.
//!
//! This crate provides the fundamental types that are shared across
//! the Nimbus ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and any front-end share the same types
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Zero dependencies**: The data model pulls in nothing

#![warn(missing_docs)]

use core::fmt;
use core::time::Duration;

/// Occurrence count for a single word.
///
/// A 32-bit unsigned counter is enough for ~4 billion occurrences of one
/// word, far beyond any realistic corpus while keeping the result type
/// compact.
pub type Count = u32;

/// A word together with how often it occurred.
///
/// This is the unit produced by frequency analysis: every entry in a ranked
/// result carries the canonical (normalized) word and a count of at least 1.
///
/// Equality considers both fields. The natural ordering sorts by count
/// first, then by word, so that ranked output (count descending, word
/// ascending on ties) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordFrequency {
    /// The canonical word as counted.
    pub word: String,
    /// Number of occurrences (>= 1 in any analysis result).
    pub count: Count,
}

impl WordFrequency {
    /// Creates a new word/count pair.
    #[inline(always)]
    pub fn new(word: impl Into<String>, count: Count) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl PartialOrd for WordFrequency {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordFrequency {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: count. Secondary: word (deterministic ordering when
        // counts are equal).
        match self.count.cmp(&other.count) {
            core::cmp::Ordering::Equal => self.word.cmp(&other.word),
            ord => ord,
        }
    }
}

impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word, self.count)
    }
}

/// Default number of ranked results returned by an analysis.
pub const DEFAULT_WORD_FREQUENCIES_TO_RETURN: usize = 50;

/// Default minimum raw-token length (inclusive, in chars).
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Default maximum raw-token length (inclusive, in chars).
pub const DEFAULT_MAX_WORD_LENGTH: usize = 32;

/// Default timeout for fetching a remote document.
pub const DEFAULT_URL_LOAD_TIMEOUT: Duration = Duration::from_millis(3000);

/// Analyzer configuration options.
///
/// Owned by one analyzer instance; mutations take effect on the next run.
/// Length bounds apply to the raw token as produced by the tokenizer,
/// before any normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Maximum number of ranked `(word, count)` pairs to return.
    pub word_frequencies_to_return: usize,
    /// Minimum raw-token length in chars (inclusive).
    pub min_word_length: usize,
    /// Maximum raw-token length in chars (inclusive).
    pub max_word_length: usize,
    /// Character encoding used when decoding byte sources.
    pub encoding: encoding::TextEncoding,
    /// Timeout applied to remote-document fetches.
    pub url_load_timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            word_frequencies_to_return: DEFAULT_WORD_FREQUENCIES_TO_RETURN,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            encoding: encoding::TextEncoding::Utf8,
            url_load_timeout: DEFAULT_URL_LOAD_TIMEOUT,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a configuration that keeps every token length and returns
    /// all distinct words.
    pub const fn unbounded() -> Self {
        Self {
            word_frequencies_to_return: usize::MAX,
            min_word_length: 1,
            max_word_length: usize::MAX,
            encoding: encoding::TextEncoding::Utf8,
            url_load_timeout: DEFAULT_URL_LOAD_TIMEOUT,
        }
    }

    /// Checks the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLengthBounds`] when
    /// `min_word_length > max_word_length`. A configuration like that would
    /// silently filter out every token, so it is rejected up front.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_word_length > self.max_word_length {
            return Err(ConfigError::InvalidLengthBounds {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }
        Ok(())
    }
}

/// Errors raised when a configuration change is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The minimum word length exceeds the maximum word length.
    InvalidLengthBounds {
        /// The requested minimum length.
        min: usize,
        /// The requested maximum length.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLengthBounds { min, max } => {
                write!(
                    f,
                    "invalid word length bounds: min {} exceeds max {}",
                    min, max
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Character-encoding utilities for byte sources.
///
/// Covers the encodings the loaders actually see: UTF-8 (strict and
/// lossy) and Latin-1. Anything more exotic should be transcoded by the
/// caller before handing text to the analyzer.
pub mod encoding {
    use core::fmt;
    use core::str::FromStr;

    /// Supported character encodings for decoding byte sources.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum TextEncoding {
        /// Strict UTF-8; invalid sequences are an error.
        #[default]
        Utf8,
        /// UTF-8 with invalid sequences replaced by U+FFFD.
        Utf8Lossy,
        /// ISO-8859-1; every byte maps to the code point of the same value.
        Latin1,
    }

    /// Error type for decode and encoding-name-parse failures.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DecodeError {
        /// Input was not valid UTF-8.
        InvalidUtf8 {
            /// Number of valid bytes before the first invalid sequence.
            valid_up_to: usize,
        },
        /// Encoding name was not recognized.
        UnknownEncoding(
            /// The unrecognized name as given.
            String,
        ),
    }

    impl fmt::Display for DecodeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                DecodeError::InvalidUtf8 { valid_up_to } => {
                    write!(f, "invalid utf-8 after {} bytes", valid_up_to)
                }
                DecodeError::UnknownEncoding(name) => {
                    write!(f, "unknown character encoding '{}'", name)
                }
            }
        }
    }

    impl core::error::Error for DecodeError {}

    impl TextEncoding {
        /// Decodes raw bytes into a `String` according to this encoding.
        ///
        /// # Errors
        ///
        /// Returns [`DecodeError::InvalidUtf8`] for strict UTF-8 input that
        /// contains invalid sequences. `Utf8Lossy` and `Latin1` never fail.
        pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
            match self {
                TextEncoding::Utf8 => match core::str::from_utf8(bytes) {
                    Ok(s) => Ok(s.to_owned()),
                    Err(e) => Err(DecodeError::InvalidUtf8 {
                        valid_up_to: e.valid_up_to(),
                    }),
                },
                TextEncoding::Utf8Lossy => Ok(String::from_utf8_lossy(bytes).into_owned()),
                TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            }
        }

        /// Canonical name of this encoding.
        pub const fn name(self) -> &'static str {
            match self {
                TextEncoding::Utf8 => "utf-8",
                TextEncoding::Utf8Lossy => "utf-8-lossy",
                TextEncoding::Latin1 => "latin-1",
            }
        }
    }

    impl FromStr for TextEncoding {
        type Err = DecodeError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            // Accept the aliases callers actually write.
            match s.to_ascii_lowercase().as_str() {
                "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
                "utf-8-lossy" | "utf8-lossy" => Ok(TextEncoding::Utf8Lossy),
                "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
                other => Err(DecodeError::UnknownEncoding(other.to_owned())),
            }
        }
    }
}
