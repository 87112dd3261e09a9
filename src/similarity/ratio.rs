//! Conversion of a raw edit distance into a similarity ratio.

/// Calculate `1 - distance / max(source_len, target_len)`.
///
/// Two empty strings are identical, so a zero maximum length yields 1.0
/// instead of dividing by zero. The result is clamped to [0, 1].
pub fn similarity_ratio(distance: usize, source_len: usize, target_len: usize) -> f64 {
    let max_len = source_len.max(target_len);

    if max_len == 0 {
        return 1.0;
    }

    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}
