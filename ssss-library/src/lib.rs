// SPDX-License-Identifier: Apache-2.0

//! Split/combine orchestration for Shamir's Secret Sharing over
//! GF(2^n), built on the primitives in `ssss-cryptography`.
//!
//! This is the crate an application embeds: it owns parameter
//! validation and the split/combine procedures, but never touches
//! stdin/stdout, a terminal, or process memory locking — that's
//! `ssss-cli`'s job.

pub mod combine;
pub mod error;
pub mod split;
pub mod types;

pub use combine::combine;
pub use error::{CombineError, SplitError};
pub use split::split;
pub use types::{CombineOutcome, CombineParams, SplitOutcome, SplitParams};
