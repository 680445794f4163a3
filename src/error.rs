//! Error types shared by the GF(2) arithmetic and the coding pipeline.
//!
//! Decoding outcomes (no error, corrected, uncorrectable) are not errors and
//! are reported through [`crate::coding::DecodeStatus`] instead.

use thiserror::Error;

/// Errors raised while building a code or applying it to a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input such as a non-binary character or an empty word
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Polynomial division by a divisor without any set bit
    #[error("Division by the zero polynomial")]
    DivisionByZero,

    /// A word does not have the length the code requires
    #[error("Length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// No design table entry covers the requested information length and capability
    #[error("No tabulated code for k = {k} correcting at least {s} errors")]
    NoSuitableParameters { k: usize, s: usize },

    /// The generator search ran out of candidate degrees
    #[error("No generator polynomial found for k = {k} up to degree {max_degree}")]
    NoGeneratorFound { k: usize, max_degree: usize },

    /// A minimal polynomial needed for a BCH generator is absent from the table
    #[error("Minimal polynomial P{index}(x) is not tabulated for field degree h = {h}")]
    MissingMinimalPolynomial { h: usize, index: usize },

    /// An error-injection position lies outside the word
    #[error("Position {position} is outside a word of length {length}")]
    InvalidPosition { position: usize, length: usize },

    /// An error-injection position was listed twice
    #[error("Position {0} is listed more than once")]
    DuplicatePosition(usize),

    /// More errors were requested or observed than the code can correct
    #[error("{errors} errors exceed the correction capability t = {capability}")]
    ExceedsCapability { errors: usize, capability: usize },
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
