// SPDX-License-Identifier: Apache-2.0

//! Error types for the low-level GF(2^n) primitives.
//!
//! Each enum corresponds to one row of the error table in the
//! specification's error-handling section; variants carry the context a
//! caller needs to produce a `FATAL:`/`WARNING:` message without the
//! library itself touching stdio.

/// Errors from [`crate::field`] construction, arithmetic and I/O.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("security level invalid (must be a multiple of 8 in 8..=1024)")]
    InvalidDegree,
    #[error("input string too long")]
    InputTooLong,
    #[error("invalid syntax")]
    InvalidSyntax,
    #[error("field_invert called on zero")]
    InvertZero,
}

/// Errors from [`crate::prng`].
#[derive(Debug, thiserror::Error)]
pub enum PrngError {
    #[error("couldn't read enough random bytes from the entropy source")]
    ReadFailed,
}

/// Errors from [`crate::reconstruct`].
#[derive(Debug, thiserror::Error)]
pub enum ReconstructError {
    #[error("shares inconsistent. Perhaps a single share was used twice")]
    Singular,
}

/// Errors from [`crate::codec`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid syntax")]
    MissingSeparator,
    #[error("invalid share")]
    InvalidIndex,
    #[error("invalid syntax")]
    InvalidYHex,
    #[error("token too long (max 128 characters)")]
    TokenTooLong,
    #[error("shares have different security levels")]
    MismatchedFieldSize,
}
