//! Naive word counting over chapter content.

/// Count whitespace-separated tokens in `text`.
///
/// Runs of whitespace collapse into a single separator, so consecutive
/// spaces never produce empty tokens. Leading and trailing whitespace
/// contribute nothing.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
