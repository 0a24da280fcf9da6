// SPDX-License-Identifier: Apache-2.0

//! Orchestration-level errors for split and combine.
//!
//! Each wraps the lower-level `ssss-cryptography` error it was caused by
//! via `#[from]`, plus the parameter-validation variants that only make
//! sense once you know what a whole split or combine run is doing.

use ssss_cryptography::{CodecError, FieldError, PrngError, ReconstructError};

/// Errors from [`crate::split::split`].
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("invalid parameters: threshold must be between 2 and {number} (got {threshold})")]
    InvalidThreshold { threshold: u32, number: u32 },
    #[error("invalid parameters: token too long")]
    TokenTooLong,
    #[error("invalid parameters: token must not contain '-'")]
    TokenContainsSeparator,
    #[error("security level invalid")]
    InvalidSecurityLevel,
    #[error("security level invalid (secret too long?)")]
    InvalidInferredSecurityLevel,
    #[error("empty secret")]
    EmptySecret,
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Prng(#[from] PrngError),
}

/// Errors from [`crate::combine::combine`].
#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    #[error("invalid parameters: threshold must be at least 2 (got {0})")]
    InvalidThreshold(u32),
    #[error("wrong number of shares: expected {expected}, got {got}")]
    WrongShareCount { expected: u32, got: u32 },
    #[error("share has illegal length")]
    InvalidFieldSize,
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Reconstruct(#[from] ReconstructError),
}
