//! Token counting across input texts.

use crate::analyzer::filter::{CompositeFilter, Filter, WordSizeFilter};
use crate::analyzer::normalizer::apply_chain;
use crate::frequency::stats::RunStats;
use crate::frequency::types::FrequencyAnalyzer;
use log::debug;
use nimbus_types::Count;
use rustc_hash::{FxHashMap, FxHashSet};

/// Built-in stop-word predicate over the analyzer's current set.
///
/// Borrowed so the set is never cloned per run; matches the raw token
/// exactly, before any normalization.
struct RawStopWords<'a>(&'a FxHashSet<String>);

impl Filter for RawStopWords<'_> {
    #[inline]
    fn accept(&self, token: &str) -> bool {
        !self.0.contains(token)
    }
}

impl FrequencyAnalyzer {
    /// Counts normalized, filtered tokens across all input texts.
    ///
    /// The filter chain is rebuilt from the current configuration on every
    /// call: stop words first, then the size bounds, then user filters.
    /// Filters see the raw token; the normalizer chain runs only on tokens
    /// that survive. Tokens normalized to the empty string are dropped.
    pub(crate) fn build_frequencies<S: AsRef<str>>(
        &mut self,
        texts: &[S],
    ) -> FxHashMap<String, Count> {
        let mut counts: FxHashMap<String, Count> = FxHashMap::default();
        let mut stats = RunStats {
            texts: texts.len(),
            ..RunStats::default()
        };

        let stop_words = RawStopWords(&self.stop_words);
        let size = WordSizeFilter::new(self.config.min_word_length, self.config.max_word_length);

        let mut chain = CompositeFilter::new();
        chain.push(&stop_words);
        chain.push(&size);
        for filter in &self.filters {
            chain.push(filter.as_ref());
        }

        for text in texts {
            let tokens = self.tokenizer.tokenize(text.as_ref());
            stats.raw_tokens += tokens.len();

            for token in &tokens {
                if !chain.accept(token) {
                    stats.rejected_by_filters += 1;
                    continue;
                }

                let word = apply_chain(&self.normalizers, token);
                if word.is_empty() {
                    stats.dropped_empty += 1;
                    continue;
                }

                *counts.entry(word).or_insert(0) += 1;
                stats.counted += 1;
            }
        }

        stats.distinct_words = counts.len();
        debug!("aggregated {stats}");
        self.last_run = stats;

        counts
    }
}
