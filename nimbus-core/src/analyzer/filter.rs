//! Token Filtering Module
//!
//! Filters are predicates that decide whether a raw token enters the
//! pipeline at all. They run BEFORE normalization, so they see tokens
//! exactly as the tokenizer produced them; stop-word matching in
//! particular is therefore case-sensitive against the raw token.
//!
//! ## Built-ins
//!
//! - [`StopWordFilter`] - rejects tokens present in an exact-match set
//! - [`WordSizeFilter`] - rejects tokens outside `[min, max]` chars
//!
//! The analyzer always applies both built-ins (rebuilt from its current
//! configuration on every run) before any user-added filters.
//!
//! ## Composition
//!
//! [`CompositeFilter`] ANDs any number of member filters, short-circuiting
//! on the first rejection. Order affects only efficiency, never the
//! verdict.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// A predicate over raw tokens.
///
/// Returns `true` when the token should be kept. Implementations must be
/// pure; the analyzer may call them once per token per run.
pub trait Filter {
    /// Tests whether `token` survives this filter.
    fn accept(&self, token: &str) -> bool;
}

/// Rejects tokens contained in a stop-word set.
///
/// Matching is exact: no case folding, no trimming. Callers who want
/// case-insensitive stop words should list every casing they care about,
/// or normalize their stop-word set to match their tokenizer's output.
#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    words: FxHashSet<String>,
}

impl StopWordFilter {
    /// Creates a filter from any collection of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of stop words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Filter for StopWordFilter {
    #[inline]
    fn accept(&self, token: &str) -> bool {
        !self.words.contains(token)
    }
}

/// Rejects tokens whose char length lies outside `[min, max]` inclusive.
#[derive(Debug, Clone, Copy)]
pub struct WordSizeFilter {
    min: usize,
    max: usize,
}

impl WordSizeFilter {
    /// Creates a size filter with inclusive bounds.
    #[inline]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Filter for WordSizeFilter {
    #[inline]
    fn accept(&self, token: &str) -> bool {
        let len = token.chars().count();
        len >= self.min && len <= self.max
    }
}

/// ANDs a set of filters, short-circuiting on the first rejection.
///
/// Holds borrowed filters so the analyzer can compose its built-ins with
/// user filters per run without cloning any of them. An empty composite
/// accepts everything.
#[derive(Default)]
pub struct CompositeFilter<'a> {
    filters: SmallVec<[&'a dyn Filter; 4]>,
}

impl<'a> CompositeFilter<'a> {
    /// Creates an empty composite.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: SmallVec::new(),
        }
    }

    /// Appends a member filter. Members are evaluated in push order.
    pub fn push(&mut self, filter: &'a dyn Filter) {
        self.filters.push(filter);
    }

    /// Number of member filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the composite has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Filter for CompositeFilter<'_> {
    #[inline]
    fn accept(&self, token: &str) -> bool {
        self.filters.iter().all(|f| f.accept(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn stop_word_filter_rejects_members() {
        let f = StopWordFilter::new(["the", "a"]);
        assert!(!f.accept("the"));
        assert!(!f.accept("a"));
        assert!(f.accept("cat"));
    }

    #[test]
    fn stop_word_matching_is_case_sensitive() {
        let f = StopWordFilter::new(["the"]);
        assert!(!f.accept("the"));
        assert!(f.accept("The")); // raw token, no folding
        assert!(f.accept("THE"));
    }

    #[test]
    fn stop_word_filter_empty_set_accepts_all() {
        let f = StopWordFilter::default();
        assert!(f.is_empty());
        assert!(f.accept("anything"));
    }

    #[test]
    fn stop_word_filter_len() {
        let f = StopWordFilter::new(["a", "b", "a"]);
        assert_eq!(f.len(), 2); // set semantics
    }

    #[test]
    fn word_size_bounds_are_inclusive() {
        let f = WordSizeFilter::new(3, 5);
        assert!(!f.accept("ab"));
        assert!(f.accept("abc"));
        assert!(f.accept("abcde"));
        assert!(!f.accept("abcdef"));
    }

    #[test]
    fn word_size_measures_chars_not_bytes() {
        let f = WordSizeFilter::new(4, 4);
        assert!(f.accept("café")); // 4 chars, 5 bytes
    }

    #[test]
    fn word_size_degenerate_bounds() {
        let f = WordSizeFilter::new(0, usize::MAX);
        assert!(f.accept(""));
        assert!(f.accept("anything"));
    }

    #[test]
    fn composite_is_logical_and() {
        let stop = StopWordFilter::new(["the"]);
        let size = WordSizeFilter::new(3, 8);

        let mut composite = CompositeFilter::new();
        composite.push(&stop);
        composite.push(&size);

        assert!(composite.accept("cat"));
        assert!(!composite.accept("the")); // rejected by stop words
        assert!(!composite.accept("on")); // rejected by size
    }

    #[test]
    fn empty_composite_accepts_everything() {
        let composite = CompositeFilter::new();
        assert!(composite.is_empty());
        assert!(composite.accept(""));
        assert!(composite.accept("anything"));
    }

    #[test]
    fn composite_short_circuits_on_first_rejection() {
        struct RejectAll;
        impl Filter for RejectAll {
            fn accept(&self, _token: &str) -> bool {
                false
            }
        }

        struct CountCalls<'a>(&'a Cell<usize>);
        impl Filter for CountCalls<'_> {
            fn accept(&self, _token: &str) -> bool {
                self.0.set(self.0.get() + 1);
                true
            }
        }

        let calls = Cell::new(0);
        let reject = RejectAll;
        let counter = CountCalls(&calls);

        let mut composite = CompositeFilter::new();
        composite.push(&reject);
        composite.push(&counter);

        assert!(!composite.accept("token"));
        assert_eq!(calls.get(), 0); // never reached
    }

    #[test]
    fn composite_nests() {
        let stop = StopWordFilter::new(["x"]);
        let mut inner = CompositeFilter::new();
        inner.push(&stop);

        let mut outer = CompositeFilter::new();
        outer.push(&inner);

        assert!(!outer.accept("x"));
        assert!(outer.accept("y"));
    }

    #[test]
    fn composite_spills_past_inline_capacity() {
        let size = WordSizeFilter::new(1, 100);
        let mut composite = CompositeFilter::new();
        for _ in 0..8 {
            composite.push(&size);
        }
        assert_eq!(composite.len(), 8);
        assert!(composite.accept("ok"));
    }
}
