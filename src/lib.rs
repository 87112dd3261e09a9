//! # phone-simi
//!
//! Similarity scoring for phone numbers and other short strings.
//!
//! Both inputs are reversed, the second is truncated to the shorter length,
//! and a Levenshtein distance (with case-folding substitution) is turned into
//! a ratio in [0, 1].
//!
//! ```
//! use phone_simi::similarity::{PhoneSimilarity, similarity};
//!
//! let scorer = PhoneSimilarity::default();
//! assert_eq!(scorer.compare("1234", "234").unwrap(), 0.75);
//!
//! // Nullable inputs, host-runtime contract.
//! assert_eq!(similarity(None, Some("123")), Some(0.0));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod similarity;

pub mod prelude {
    pub use crate::config::SimilarityConfig;
    pub use crate::error::{Result, SimiError};
    pub use crate::similarity::{
        EquivalenceRule, Outcome, PhoneSimilarity, TextSimilarity, evaluate, similarity,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
