// SPDX-License-Identifier: Apache-2.0

//! Low-level cryptographic primitives for Shamir's Secret Sharing over
//! binary extension fields: field arithmetic, the CSPRNG source, the
//! keyless diffusion layer, polynomial evaluation, Gauss-Jordan
//! reconstruction and the share wire codec.
//!
//! This crate has no notion of "split" or "combine" as a whole
//! operation — that orchestration lives in `ssss-library`, which is the
//! only intended caller of most of what's public here.

pub mod codec;
pub mod diffusion;
pub mod error;
pub mod field;
pub mod poly;
pub mod prng;
pub mod reconstruct;

pub use error::{CodecError, FieldError, PrngError, ReconstructError};
pub use field::{FieldContext, FieldElement};
pub use prng::CsprngSource;
