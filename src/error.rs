//! Error types for transaction construction and encoding.

use thiserror::Error;

/// Errors produced when converting strings to fixed-width byte types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("invalid digest '{input}': {reason}")]
    InvalidDigest { input: String, reason: String },

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Errors produced while building or encoding a transaction payload.
///
/// Every error is terminal for the current build attempt; the builder itself
/// stays usable once the offending value is corrected.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// A full build requires a sender address.
    #[error("sender address is not set")]
    MissingSender,

    /// A full build requires payment, owner, price and budget to all be set.
    #[error("gas data is incomplete: {missing} is not set")]
    IncompleteGasData { missing: &'static str },

    /// A command references an input index past the end of the input pool.
    #[error("command {command} references input {index}, but only {inputs} inputs exist")]
    InputIndexOutOfBounds {
        command: usize,
        index: u16,
        inputs: usize,
    },

    /// A command references the result of a command that does not precede it.
    #[error("command {command} references the result of command {index}, which does not precede it")]
    ResultNotYetAvailable { command: usize, index: u16 },

    /// A type argument nests deeper than the supported ceiling.
    #[error("type parameter nesting exceeds {max} levels")]
    TypeNestingTooDeep { max: usize },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("bcs encoding failed: {0}")]
    Encoding(#[from] bcs::Error),
}
