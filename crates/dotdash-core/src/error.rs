//! Error types for the Morse processor.
//!
//! Neither error is fatal. A [`DecodeError`] is absorbed by the processor and
//! surfaced through the error flag; an [`UnknownAction`] is returned to the
//! caller that tried to resolve an identifier.

use thiserror::Error;

/// Errors produced while decoding a completed symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Completed pattern has no entry in the Morse table
    #[error("unknown morse pattern: {pattern:?}")]
    UnknownPattern {
        /// The dot/hyphen sequence that failed to match
        pattern: String,
    },
}

/// Identifier that does not name any [`crate::Action`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnknownAction {
    /// Button tag outside the known range
    #[error("unknown action tag: {0}")]
    Tag(u8),

    /// Symbolic name that matches no action
    #[error("unknown action name: {0:?}")]
    Name(String),
}
