// SPDX-License-Identifier: Apache-2.0

//! A cryptographic source of field elements (spec.md §4.B).
//!
//! Reads are always full: any short or failing read closes the source
//! and fails the whole operation. Partial randomness is never used as
//! coefficient material.

use rand_core::{CryptoRng, RngCore};

use crate::error::PrngError;
use crate::field::{FieldContext, FieldElement};

/// Opens once, reads deterministically, closes — the Rust stand-in for
/// the source's `cprng_init`/`cprng_read`/`cprng_deinit` trio.
///
/// The default constructor draws from the OS CSPRNG (`rand::rngs::OsRng`).
/// [`CsprngSource::from_rng`] accepts any `CryptoRng`, which is how tests
/// get bit-for-bit reproducible split runs from a seeded
/// `rand_chacha::ChaCha20Rng`.
pub struct CsprngSource<R: RngCore + CryptoRng> {
    rng: R,
}

impl CsprngSource<rand::rngs::OsRng> {
    /// Opens the canonical OS entropy source.
    pub fn open() -> Self {
        CsprngSource { rng: rand::rngs::OsRng }
    }
}

impl<R: RngCore + CryptoRng> CsprngSource<R> {
    /// Wraps an already-open CSPRNG (any `CryptoRng`), for deterministic
    /// tests and for embedding in callers with their own entropy policy.
    pub fn from_rng(rng: R) -> Self {
        CsprngSource { rng }
    }

    /// Fills a fresh field element with `degree/8` uniformly random
    /// bytes, big-endian. A failing read is always fatal to the caller.
    pub fn read(&mut self, ctx: &FieldContext) -> Result<FieldElement, PrngError> {
        let mut buf = vec![0u8; ctx.degree() as usize / 8];
        self.rng.try_fill_bytes(&mut buf).map_err(|_| PrngError::ReadFailed)?;
        Ok(ctx.from_be_bytes(&buf))
    }

    /// Closes the source. A no-op for in-process RNGs, kept as a named
    /// call so the open/read/close lifecycle stays visible at call sites.
    pub fn close(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn same_seed_yields_same_bytes() {
        let ctx = FieldContext::new(64).unwrap();
        let mut a = CsprngSource::from_rng(ChaCha20Rng::seed_from_u64(7));
        let mut b = CsprngSource::from_rng(ChaCha20Rng::seed_from_u64(7));
        let x = a.read(&ctx).unwrap();
        let y = b.read(&ctx).unwrap();
        assert_eq!(ctx.print(&x, true), ctx.print(&y, true));
    }

    #[test]
    fn different_seeds_yield_different_bytes() {
        let ctx = FieldContext::new(64).unwrap();
        let mut a = CsprngSource::from_rng(ChaCha20Rng::seed_from_u64(1));
        let mut b = CsprngSource::from_rng(ChaCha20Rng::seed_from_u64(2));
        let x = a.read(&ctx).unwrap();
        let y = b.read(&ctx).unwrap();
        assert_ne!(ctx.print(&x, true), ctx.print(&y, true));
    }
}
