//! Analyzer type, constants and metrics.

use crate::analyzer::filter::Filter;
use crate::analyzer::normalizer::{default_chain, Normalizer};
use crate::analyzer::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::frequency::stats::RunStats;
use nimbus_types::{AnalyzerConfig, ConfigError};
use rustc_hash::FxHashSet;

/// Word-frequency analyzer for word-cloud generation.
///
/// Owns its configuration: stop words, user filters, the normalizer chain,
/// the tokenizer and the numeric bounds. Mutating any of them takes effect
/// on the next `load` call. The analyzer is intentionally not `Send`/`Sync`
/// friendly as a shared object: it assumes exclusive ownership by one
/// caller at a time, exactly like a local builder.
pub struct FrequencyAnalyzer {
    pub(crate) stop_words: FxHashSet<String>,
    pub(crate) tokenizer: Box<dyn Tokenizer>,
    pub(crate) filters: Vec<Box<dyn Filter>>,
    pub(crate) normalizers: Vec<Box<dyn Normalizer>>,
    pub(crate) config: AnalyzerConfig,
    pub(crate) last_run: RunStats,
    /// Total number of `load` runs executed
    pub(crate) runs_executed: u64,
    /// Total number of input texts processed
    pub(crate) texts_analyzed: u64,
    /// Total number of occurrences counted across all runs
    pub(crate) words_counted: u64,
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyAnalyzer {
    /// Creates an analyzer with the default configuration: whitespace
    /// tokenization, no stop words, no user filters, and the default
    /// trim → strip → lowercase normalizer chain.
    pub fn new() -> Self {
        Self {
            stop_words: FxHashSet::default(),
            tokenizer: Box::new(WhitespaceTokenizer),
            filters: Vec::new(),
            normalizers: default_chain(),
            config: AnalyzerConfig::default(),
            last_run: RunStats::default(),
            runs_executed: 0,
            texts_analyzed: 0,
            words_counted: 0,
        }
    }

    /// Creates an analyzer with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLengthBounds`] when the configured
    /// length bounds are inverted.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Returns the current configuration.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Returns the current stop-word set.
    #[inline(always)]
    #[must_use]
    pub fn stop_words(&self) -> &FxHashSet<String> {
        &self.stop_words
    }

    /// Returns basic metrics about the analyzer's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> AnalyzerMetrics {
        AnalyzerMetrics {
            runs_executed: self.runs_executed,
            texts_analyzed: self.texts_analyzed,
            words_counted: self.words_counted,
        }
    }

    /// Returns statistics from the most recent run.
    #[inline(always)]
    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.last_run
    }
}

/// Cumulative operational metrics for the analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzerMetrics {
    /// Total number of analysis runs executed.
    pub runs_executed: u64,
    /// Total number of input texts processed.
    pub texts_analyzed: u64,
    /// Total number of word occurrences counted.
    pub words_counted: u64,
}
