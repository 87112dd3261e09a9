//! Reversal and target truncation applied before distance scoring.

/// Reverse both inputs and cut the reversed target down to the shorter length.
///
/// The source is never truncated. When the target is the longer of the two,
/// only its first `len(source)` characters after reversal survive, which on
/// the unreversed strings means comparing the tail of `text2` against the whole
/// of `text1`.
pub fn reverse_and_truncate(text1: &str, text2: &str) -> (Vec<char>, Vec<char>) {
    let source: Vec<char> = text1.chars().rev().collect();
    let mut target: Vec<char> = text2.chars().rev().collect();

    let len_min = source.len().min(target.len());
    target.truncate(len_min);

    (source, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_string(chars: &[char]) -> String {
        chars.iter().collect()
    }

    #[test]
    fn test_reverse_equal_lengths() {
        let (a, b) = reverse_and_truncate("123", "234");
        assert_eq!(as_string(&a), "321");
        assert_eq!(as_string(&b), "432");
    }

    #[test]
    fn test_shorter_target_unchanged() {
        let (a, b) = reverse_and_truncate("1234", "234");
        assert_eq!(as_string(&a), "4321");
        assert_eq!(as_string(&b), "432");
    }

    #[test]
    fn test_longer_target_truncated() {
        let (a, b) = reverse_and_truncate("123", "12345");
        assert_eq!(as_string(&a), "321");
        assert_eq!(as_string(&b), "543");
    }

    #[test]
    fn test_empty_inputs() {
        let (a, b) = reverse_and_truncate("", "13800138000");
        assert!(a.is_empty());
        assert!(b.is_empty());

        let (a, b) = reverse_and_truncate("138", "");
        assert_eq!(as_string(&a), "831");
        assert!(b.is_empty());
    }

    #[test]
    fn test_multibyte_characters() {
        let (a, b) = reverse_and_truncate("电话", "号码电话");
        assert_eq!(as_string(&a), "话电");
        assert_eq!(as_string(&b), "话电");
    }
}
