//! Reversed edit-distance similarity.
//!
//! Scoring runs in three steps: both inputs are reversed and the second is
//! truncated to the shorter length ([`preprocess`]), a Levenshtein distance is
//! computed with a configurable character equivalence ([`distance`]), and the
//! distance is normalized against the longer length ([`ratio`]).
//! [`PhoneSimilarity`] chains the steps; [`evaluate`] wraps any
//! [`TextSimilarity`] with null handling and failure logging.

pub mod distance;
pub mod outcome;
pub mod preprocess;
pub mod ratio;
pub mod scorer;

pub use distance::{EquivalenceRule, edit_distance, str_distance};
pub use outcome::{Outcome, evaluate, similarity, usage};
pub use preprocess::reverse_and_truncate;
pub use ratio::similarity_ratio;
pub use scorer::{Comparison, PhoneSimilarity, TextSimilarity};
