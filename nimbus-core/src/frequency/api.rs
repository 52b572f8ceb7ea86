//! Public API: running the pipeline and mutating configuration.

use crate::analyzer::filter::Filter;
use crate::analyzer::normalizer::Normalizer;
use crate::analyzer::tokenizer::Tokenizer;
use crate::frequency::rank::take_top;
use crate::frequency::types::FrequencyAnalyzer;
use core::time::Duration;
use log::debug;
use nimbus_types::encoding::TextEncoding;
use nimbus_types::{ConfigError, WordFrequency};

impl FrequencyAnalyzer {
    /// Runs the full pipeline over the given texts and returns the ranked,
    /// truncated word frequencies.
    ///
    /// Counts accumulate across all texts of one call, so a multi-document
    /// corpus can be analyzed as one logical input. Zero texts, or texts
    /// with nothing to count, yield an empty result.
    #[inline(never)]
    pub fn load<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<WordFrequency> {
        self.runs_executed += 1;
        self.texts_analyzed += texts.len() as u64;

        let counts = self.build_frequencies(texts);
        self.words_counted += counts.values().map(|&c| u64::from(c)).sum::<u64>();

        let frequencies: Vec<WordFrequency> = counts
            .into_iter()
            .map(|(word, count)| WordFrequency::new(word, count))
            .collect();

        let ranked = take_top(frequencies, self.config.word_frequencies_to_return);
        debug!("load produced {} ranked words", ranked.len());
        ranked
    }

    /// Ranks and truncates pre-computed frequencies, bypassing the
    /// tokenize/filter/normalize/aggregate stages.
    ///
    /// Useful when the caller already has counted words and only needs
    /// top-N selection and ordering.
    pub fn load_frequencies(&mut self, frequencies: Vec<WordFrequency>) -> Vec<WordFrequency> {
        self.runs_executed += 1;
        take_top(frequencies, self.config.word_frequencies_to_return)
    }

    // ── Configuration setters ───────────────────────────────────────────
    //
    // Every setter takes effect on the next run; none of them touch an
    // in-flight analysis because the analyzer is exclusively owned.

    /// Replaces the entire stop-word set.
    pub fn set_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
    }

    /// Sets how many ranked words a run returns.
    pub fn set_word_frequencies_to_return(&mut self, count: usize) {
        self.config.word_frequencies_to_return = count;
    }

    /// Sets the minimum raw-token length (inclusive, in chars).
    ///
    /// # Errors
    ///
    /// Rejects the change with [`ConfigError::InvalidLengthBounds`] when it
    /// would exceed the current maximum; the previous value is kept.
    pub fn set_min_word_length(&mut self, min: usize) -> Result<(), ConfigError> {
        let candidate = nimbus_types::AnalyzerConfig {
            min_word_length: min,
            ..self.config
        };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    /// Sets the maximum raw-token length (inclusive, in chars).
    ///
    /// # Errors
    ///
    /// Rejects the change with [`ConfigError::InvalidLengthBounds`] when it
    /// would fall below the current minimum; the previous value is kept.
    pub fn set_max_word_length(&mut self, max: usize) -> Result<(), ConfigError> {
        let candidate = nimbus_types::AnalyzerConfig {
            max_word_length: max,
            ..self.config
        };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    /// Sets both length bounds at once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLengthBounds`] when `min > max`.
    pub fn set_word_length_bounds(&mut self, min: usize, max: usize) -> Result<(), ConfigError> {
        let candidate = nimbus_types::AnalyzerConfig {
            min_word_length: min,
            max_word_length: max,
            ..self.config
        };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    /// Replaces the tokenizer.
    pub fn set_tokenizer(&mut self, tokenizer: Box<dyn Tokenizer>) {
        self.tokenizer = tokenizer;
    }

    /// Appends a user filter after the existing ones.
    pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Replaces all user filters with a single one.
    ///
    /// The built-in stop-word and word-size filters are unaffected: they
    /// are rebuilt from the current configuration on every run and are not
    /// part of the user list.
    pub fn set_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.clear();
        self.filters.push(filter);
    }

    /// Removes all user filters (built-ins are unaffected).
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Appends a normalizer to the end of the chain.
    pub fn add_normalizer(&mut self, normalizer: Box<dyn Normalizer>) {
        self.normalizers.push(normalizer);
    }

    /// Replaces the entire normalizer chain with a single normalizer.
    pub fn set_normalizer(&mut self, normalizer: Box<dyn Normalizer>) {
        self.normalizers.clear();
        self.normalizers.push(normalizer);
    }

    /// Removes every normalizer; tokens are then counted as filtered raw.
    pub fn clear_normalizers(&mut self) {
        self.normalizers.clear();
    }

    /// Sets the character encoding used by the byte-source loaders.
    pub fn set_character_encoding(&mut self, encoding: TextEncoding) {
        self.config.encoding = encoding;
    }

    /// Sets the timeout applied to remote-document fetches.
    pub fn set_url_load_timeout(&mut self, timeout: Duration) {
        self.config.url_load_timeout = timeout;
    }
}
