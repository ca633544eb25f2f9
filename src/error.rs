//! Error types for input normalization and aggregation.

use thiserror::Error;

/// Errors raised while turning raw form values into numbers.
///
/// Any variant aborts the whole submission: no partial sums are produced
/// and the previously displayed report is left standing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The cleaned value contains a digits-`e`-digits run (e.g. `1e10`).
    #[error("Invalid Input: {matched}")]
    InvalidNotation {
        /// The substring that matched the disallowed pattern.
        matched: String,
        /// The raw value as entered.
        raw: String,
    },

    /// The cleaned value is not parseable as a finite number.
    #[error("Invalid Input: {raw}")]
    Malformed {
        /// The raw value as entered.
        raw: String,
    },
}

impl InputError {
    /// The token to surface to the user.
    pub fn token(&self) -> &str {
        match self {
            InputError::InvalidNotation { matched, .. } => matched,
            InputError::Malformed { raw } => raw,
        }
    }
}

/// Result type for normalization and aggregation operations.
pub type Result<T> = std::result::Result<T, InputError>;
