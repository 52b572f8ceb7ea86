//! Per-run statistics.

/// A snapshot of the most recent analysis run.
///
/// Tracks how many tokens entered the pipeline and where the rest went:
/// `raw_tokens == counted + rejected_by_filters + dropped_empty`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of input texts processed.
    pub texts: usize,
    /// Tokens produced by the tokenizer across all texts.
    pub raw_tokens: usize,
    /// Tokens rejected by the filter chain (stop words, size, user filters).
    pub rejected_by_filters: usize,
    /// Tokens dropped because normalization left them empty.
    pub dropped_empty: usize,
    /// Occurrences actually counted.
    pub counted: usize,
    /// Distinct words in the frequency table before truncation.
    pub distinct_words: usize,
}

impl RunStats {
    /// Tokens that survived filtering (whether or not they were counted).
    #[inline(always)]
    #[must_use]
    pub const fn surviving_tokens(&self) -> usize {
        self.raw_tokens - self.rejected_by_filters
    }
}

impl core::fmt::Display for RunStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} texts, {} tokens ({} filtered, {} empty), {} counted into {} distinct words",
            self.texts,
            self.raw_tokens,
            self.rejected_by_filters,
            self.dropped_empty,
            self.counted,
            self.distinct_words
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let stats = RunStats::default();
        assert_eq!(stats.texts, 0);
        assert_eq!(stats.raw_tokens, 0);
        assert_eq!(stats.surviving_tokens(), 0);
    }

    #[test]
    fn surviving_tokens_subtracts_rejections() {
        let stats = RunStats {
            texts: 2,
            raw_tokens: 10,
            rejected_by_filters: 4,
            dropped_empty: 1,
            counted: 5,
            distinct_words: 3,
        };
        assert_eq!(stats.surviving_tokens(), 6);
    }

    #[test]
    fn display_mentions_all_counters() {
        let stats = RunStats {
            texts: 2,
            raw_tokens: 12,
            rejected_by_filters: 5,
            dropped_empty: 1,
            counted: 6,
            distinct_words: 4,
        };
        let s = format!("{stats}");
        assert!(s.contains("2 texts"));
        assert!(s.contains("12 tokens"));
        assert!(s.contains("4 distinct"));
    }
}
