//! Error types for phone-simi.
//!
//! All fallible operations in the crate return [`SimiError`]. The scoring
//! boundary in [`crate::similarity::outcome`] converts these into an
//! [`Outcome`](crate::similarity::Outcome) so nothing escapes past it.
//!
//! # Examples
//!
//! ```
//! use phone_simi::error::{SimiError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SimiError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for phone-simi operations.
#[derive(Error, Debug)]
pub enum SimiError {
    /// I/O errors (reading batch or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input exceeded the configured character limit
    #[error("Input too long: {len} characters exceeds limit of {max}")]
    InputTooLong { len: usize, max: usize },

    /// A similarity strategy produced a value outside [0, 1]
    #[error("Invalid score: {0}")]
    InvalidScore(f64),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SimiError.
pub type Result<T> = std::result::Result<T, SimiError>;

impl SimiError {
    /// Create a new input-too-long error.
    pub fn input_too_long(len: usize, max: usize) -> Self {
        SimiError::InputTooLong { len, max }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SimiError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SimiError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SimiError::Other(msg.into())
    }
}
