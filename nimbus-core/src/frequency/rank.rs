//! Ranking and top-N truncation.

use nimbus_types::WordFrequency;

/// Descending-by-count comparator; ties fall back to word order so the
/// result is deterministic.
#[inline(always)]
fn descending(a: &WordFrequency, b: &WordFrequency) -> core::cmp::Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.word.cmp(&b.word))
}

/// Sorts `(word, count)` pairs by count descending and keeps at most
/// `limit` entries.
///
/// When the input is larger than the limit, a partition step
/// (`select_nth_unstable_by`) narrows it down before the final sort, so
/// the full input is never completely sorted.
pub(crate) fn take_top(
    mut frequencies: Vec<WordFrequency>,
    limit: usize,
) -> Vec<WordFrequency> {
    if frequencies.is_empty() || limit == 0 {
        frequencies.clear();
        return frequencies;
    }

    if frequencies.len() > limit {
        frequencies.select_nth_unstable_by(limit, descending);
        frequencies.truncate(limit);
    }
    frequencies.sort_unstable_by(descending);

    frequencies
}
