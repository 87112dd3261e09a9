//! Null-aware scoring boundary.
//!
//! Host runtimes hand over nullable values and expect something back for
//! every row. [`evaluate`] short-circuits nulls, runs the strategy, logs any
//! failure and returns an [`Outcome`]; it never panics or returns an error.

use serde::{Deserialize, Serialize};

use crate::error::SimiError;
use crate::similarity::scorer::{PhoneSimilarity, TextSimilarity};

/// Result of scoring one input pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Both inputs present and scored.
    Score { score: f64 },
    /// At least one input was null. Scored as zero by legacy callers.
    NullInput,
    /// The strategy failed. Carries the logged message.
    Failed { message: String },
}

impl Outcome {
    /// Map to the host contract: nulls score 0, failures yield no result.
    pub fn legacy_value(&self) -> Option<f64> {
        match self {
            Outcome::Score { score } => Some(*score),
            Outcome::NullInput => Some(0.0),
            Outcome::Failed { .. } => None,
        }
    }

    /// The score, if the pair was actually scored.
    pub fn score(&self) -> Option<f64> {
        match self {
            Outcome::Score { score } => Some(*score),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    /// Status tag, matching the serialized `status` field.
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Score { .. } => "score",
            Outcome::NullInput => "null_input",
            Outcome::Failed { .. } => "failed",
        }
    }
}

/// Score a nullable input pair with `strategy`.
pub fn evaluate<S>(strategy: &S, text1: Option<&str>, text2: Option<&str>) -> Outcome
where
    S: TextSimilarity + ?Sized,
{
    let (Some(text1), Some(text2)) = (text1, text2) else {
        return Outcome::NullInput;
    };

    let result = strategy.similarity(text1, text2).and_then(|score| {
        if (0.0..=1.0).contains(&score) {
            Ok(score)
        } else {
            Err(SimiError::InvalidScore(score))
        }
    });

    match result {
        Ok(score) => Outcome::Score { score },
        Err(e) => {
            log::error!("{} failed: {e}", strategy.name());
            Outcome::Failed {
                message: e.to_string(),
            }
        }
    }
}

/// Score a nullable pair with the default phone strategy, legacy contract.
///
/// Returns `Some(0.0)` when either input is `None` and `None` when scoring
/// failed.
pub fn similarity(text1: Option<&str>, text2: Option<&str>) -> Option<f64> {
    evaluate(&PhoneSimilarity::default(), text1, text2).legacy_value()
}

/// Help text for a scoring function exposed under `name`.
pub fn usage(name: &str) -> String {
    format!(
        "Returns the similarity of TEXT1 and TEXT2 after reversal\n\
         Usage: {name}(text1,text2)\n\
         Similarity range [0,1]"
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::SimilarityConfig;
    use crate::error::Result;

    struct FixedScore(f64);

    impl TextSimilarity for FixedScore {
        fn name(&self) -> &str {
            "fixed"
        }

        fn similarity(&self, _text1: &str, _text2: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[derive(Default)]
    struct CountingScorer {
        calls: Cell<usize>,
    }

    impl TextSimilarity for CountingScorer {
        fn name(&self) -> &str {
            "counting"
        }

        fn similarity(&self, _text1: &str, _text2: &str) -> Result<f64> {
            self.calls.set(self.calls.get() + 1);
            Ok(1.0)
        }
    }

    #[test]
    fn test_null_inputs_score_zero() {
        assert_eq!(similarity(None, Some("123")), Some(0.0));
        assert_eq!(similarity(Some("123"), None), Some(0.0));
        assert_eq!(similarity(None, None), Some(0.0));
    }

    #[test]
    fn test_null_inputs_skip_strategy() {
        let scorer = CountingScorer::default();
        assert_eq!(evaluate(&scorer, None, Some("1")), Outcome::NullInput);
        assert_eq!(evaluate(&scorer, Some("1"), None), Outcome::NullInput);
        assert_eq!(scorer.calls.get(), 0);

        evaluate(&scorer, Some("1"), Some("1"));
        assert_eq!(scorer.calls.get(), 1);
    }

    #[test]
    fn test_scored_pair() {
        let outcome = evaluate(&PhoneSimilarity::default(), Some("1234"), Some("234"));
        assert_eq!(outcome, Outcome::Score { score: 0.75 });
        assert_eq!(outcome.score(), Some(0.75));
        assert_eq!(similarity(Some(""), Some("")), Some(1.0));
    }

    #[test]
    fn test_failure_yields_no_result() {
        let scorer = PhoneSimilarity::new(SimilarityConfig::default().with_max_input_chars(3));
        let outcome = evaluate(&scorer, Some("1234"), Some("1"));

        assert!(outcome.is_failed());
        assert_eq!(outcome.legacy_value(), None);
        assert_eq!(outcome.score(), None);
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        assert!(evaluate(&FixedScore(1.5), Some("a"), Some("b")).is_failed());
        assert!(evaluate(&FixedScore(-0.1), Some("a"), Some("b")).is_failed());
        assert!(evaluate(&FixedScore(f64::NAN), Some("a"), Some("b")).is_failed());
        assert_eq!(
            evaluate(&FixedScore(0.0), Some("a"), Some("b")),
            Outcome::Score { score: 0.0 }
        );
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_string(&Outcome::Score { score: 0.5 }).unwrap();
        assert_eq!(json, r#"{"status":"score","score":0.5}"#);
        let json = serde_json::to_string(&Outcome::NullInput).unwrap();
        assert_eq!(json, r#"{"status":"null_input"}"#);

        let failed = Outcome::Failed {
            message: "boom".to_string(),
        };
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["status"], failed.status());
    }

    #[test]
    fn test_usage() {
        let text = usage("phone_res_simi");
        assert!(text.contains("Usage: phone_res_simi(text1,text2)"));
        assert!(text.ends_with("Similarity range [0,1]"));
    }
}
