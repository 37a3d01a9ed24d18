//! Whitespace normalization helpers shared by every detector.

/// Trim leading/trailing whitespace and collapse interior runs to one space.
///
/// Total over any input; idempotent (`normalize(normalize(s)) == normalize(s)`).
/// Whitespace-only input normalizes to the empty string.
pub fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-delimited tokens of the input, empty tokens dropped.
pub fn words_of(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Character count of the normalized input, normalized spaces included.
///
/// Counts Unicode scalar values, not bytes.
pub fn char_count(input: &str) -> usize {
    normalize(input).chars().count()
}
