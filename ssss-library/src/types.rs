// SPDX-License-Identifier: Apache-2.0

//! Parameter and outcome types for [`crate::split::split`] and
//! [`crate::combine::combine`].
//!
//! `quiet`/`QUIET`/`require_lock` deliberately don't appear here: they
//! govern prompting and memory-locking behavior that lives entirely in
//! `ssss-cli`. The engine itself never prompts, logs a prompt, or locks
//! memory.

/// Inputs to [`crate::split::split`], corresponding to `ssss-split`'s
/// `-t/-n/-w/-s/-x/-D` flags.
#[derive(Debug, Clone)]
pub struct SplitParams {
    /// Minimum number of shares needed to reconstruct the secret.
    pub threshold: u32,
    /// Total number of shares to emit.
    pub number: u32,
    /// Explicit field degree in bits; `None` infers it from the secret's
    /// length.
    pub security_bits: Option<u32>,
    /// Optional run tag prefixed to every emitted share.
    pub token: Option<String>,
    /// Whether the secret is given as (and shares are printed as) hex.
    pub hex: bool,
    /// Whether to apply the keyless diffusion layer.
    pub diffusion: bool,
}

/// Result of a successful split.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// One formatted share line per share, in index order.
    pub shares: Vec<String>,
    /// The field degree actually used (explicit or inferred).
    pub degree: u32,
}

/// Inputs to [`crate::combine::combine`], corresponding to
/// `ssss-combine`'s `-t/-x/-D` flags.
#[derive(Debug, Clone)]
pub struct CombineParams {
    /// Number of shares expected (and required) in `share_lines`.
    pub threshold: u32,
    /// Whether to render the recovered secret as hex.
    pub hex: bool,
    /// Whether the shares were produced with diffusion enabled.
    pub diffusion: bool,
}

/// Result of a successful combine.
#[derive(Debug, Clone)]
pub struct CombineOutcome {
    /// The recovered secret, rendered per `hex`.
    pub secret: String,
    /// The field degree inferred from the shares.
    pub degree: u32,
}
