//! Configuration for similarity scoring.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimiError};
use crate::similarity::distance::EquivalenceRule;

/// Settings for [`PhoneSimilarity`](crate::similarity::PhoneSimilarity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Character equivalence used for substitution cost.
    pub rule: EquivalenceRule,
    /// Reject inputs longer than this many characters.
    pub max_input_chars: Option<usize>,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            rule: EquivalenceRule::Literal,
            max_input_chars: None,
        }
    }
}

impl SimilarityConfig {
    /// Set the equivalence rule.
    pub fn with_rule(mut self, rule: EquivalenceRule) -> Self {
        self.rule = rule;
        self
    }

    /// Set the input length limit.
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = Some(max);
        self
    }

    /// Check the configuration for values that can never score anything.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars == Some(0) {
            return Err(SimiError::invalid_config(
                "max_input_chars must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let config: SimilarityConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
