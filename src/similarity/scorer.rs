//! Similarity strategies.

use serde::{Deserialize, Serialize};

use crate::config::SimilarityConfig;
use crate::error::{Result, SimiError};
use crate::similarity::distance::{EquivalenceRule, edit_distance};
use crate::similarity::preprocess::reverse_and_truncate;
use crate::similarity::ratio::similarity_ratio;

/// A strategy that scores two texts in [0, 1].
pub trait TextSimilarity {
    /// Name of the strategy.
    fn name(&self) -> &str;

    /// Score two non-null texts. 1.0 means identical.
    fn similarity(&self, text1: &str, text2: &str) -> Result<f64>;
}

/// Intermediate values of a single phone comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// `text1` reversed.
    pub source: String,
    /// `text2` reversed and truncated.
    pub target: String,
    /// Edit distance between `source` and `target`.
    pub distance: usize,
    /// Similarity ratio in [0, 1].
    pub score: f64,
}

/// Reversed, target-truncated edit distance similarity.
///
/// Suited to phone numbers, where the trailing digits carry the identity and
/// country or trunk prefixes vary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneSimilarity {
    config: SimilarityConfig,
}

impl PhoneSimilarity {
    /// Create a scorer with the given configuration.
    pub fn new(config: SimilarityConfig) -> Self {
        PhoneSimilarity { config }
    }

    /// Create a scorer that uses `rule` and no length limit.
    pub fn with_rule(rule: EquivalenceRule) -> Self {
        Self::new(SimilarityConfig::default().with_rule(rule))
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Compare two texts and return every intermediate value.
    pub fn explain(&self, text1: &str, text2: &str) -> Result<Comparison> {
        self.check_length(text1)?;
        self.check_length(text2)?;

        let (source, target) = reverse_and_truncate(text1, text2);
        let distance = edit_distance(&source, &target, self.config.rule);
        let score = similarity_ratio(distance, source.len(), target.len());

        log::debug!(
            "compare rule={} source_len={} target_len={} distance={} score={}",
            self.config.rule.name(),
            source.len(),
            target.len(),
            distance,
            score
        );

        Ok(Comparison {
            source: source.into_iter().collect(),
            target: target.into_iter().collect(),
            distance,
            score,
        })
    }

    /// Similarity ratio of two texts.
    pub fn compare(&self, text1: &str, text2: &str) -> Result<f64> {
        Ok(self.explain(text1, text2)?.score)
    }

    /// Edit distance of two texts after reversal and truncation.
    pub fn distance(&self, text1: &str, text2: &str) -> Result<usize> {
        Ok(self.explain(text1, text2)?.distance)
    }

    fn check_length(&self, text: &str) -> Result<()> {
        if let Some(max) = self.config.max_input_chars {
            let len = text.chars().count();
            if len > max {
                return Err(SimiError::input_too_long(len, max));
            }
        }
        Ok(())
    }
}

impl TextSimilarity for PhoneSimilarity {
    fn name(&self) -> &str {
        "phone_res_simi"
    }

    fn similarity(&self, text1: &str, text2: &str) -> Result<f64> {
        self.compare(text1, text2)
    }
}
