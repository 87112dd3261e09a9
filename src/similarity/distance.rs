//! Edit distance with a configurable character equivalence.
//!
//! The engine is a plain Levenshtein DP (unit cost insert, delete and
//! substitute) where a substitution is free whenever the two characters are
//! equivalent under an [`EquivalenceRule`].

use std::cmp::min;

use serde::{Deserialize, Serialize};

/// Distance between upper and lower case ASCII letters.
const CASE_OFFSET: u32 = 32;

/// How two characters are compared when deciding substitution cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalenceRule {
    /// Equal, or code points exactly 32 apart in either direction.
    ///
    /// This is the historical scoring rule. It does not check that the
    /// characters are letters, so `'0'` (48) also matches `'\u{10}'` (16)
    /// and `'@'` (64) matches `'`'` (96).
    #[default]
    Literal,
    /// Equal after ASCII case folding. Only letters fold.
    AsciiCaseInsensitive,
    /// Plain equality.
    Exact,
}

impl EquivalenceRule {
    /// Whether `ch1` and `ch2` substitute for free.
    #[inline]
    pub fn equivalent(self, ch1: char, ch2: char) -> bool {
        match self {
            EquivalenceRule::Literal => {
                let diff = (ch1 as u32).abs_diff(ch2 as u32);
                diff == 0 || diff == CASE_OFFSET
            }
            EquivalenceRule::AsciiCaseInsensitive => ch1.eq_ignore_ascii_case(&ch2),
            EquivalenceRule::Exact => ch1 == ch2,
        }
    }

    /// Short name used in logs and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            EquivalenceRule::Literal => "literal",
            EquivalenceRule::AsciiCaseInsensitive => "ascii",
            EquivalenceRule::Exact => "exact",
        }
    }
}

/// Calculate the edit distance from `source` to `target`.
///
/// Only two rows of the DP matrix are kept, so memory is O(len(target)).
#[allow(clippy::needless_range_loop)]
pub fn edit_distance(source: &[char], target: &[char], rule: EquivalenceRule) -> usize {
    let n = source.len();
    let m = target.len();

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut prev_row: Vec<usize> = (0..=m).collect();
    let mut curr_row = vec![0; m + 1];

    for i in 1..=n {
        curr_row[0] = i;
        let ch1 = source[i - 1];

        for j in 1..=m {
            let cost = if rule.equivalent(ch1, target[j - 1]) {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[m]
}

/// Calculate the edit distance between two strings without any preprocessing.
pub fn str_distance(source: &str, target: &str, rule: EquivalenceRule) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    edit_distance(&source, &target, rule)
}
