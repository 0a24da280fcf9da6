// SPDX-License-Identifier: Apache-2.0

//! The keyless diffusion layer (spec.md §4.C): a bijective permutation
//! over the secret's byte representation, applied before it becomes
//! `coeff[0]`, so a known-plaintext attack on one share's high bytes
//! doesn't leak anything about the rest of the secret.
//!
//! Every byte offset, shift count and the `deg % 16 == 8` swap below are
//! wire-level constants shared with other `ssss`-compatible
//! implementations — this module is a direct, careful port of
//! `encipher_block`/`decipher_block`/`encode_slice`/`encode_mpz` in
//! `examples/original_source/ssss.c`, not a reinterpretation. Deviating
//! from any of it produces shares incompatible with the rest of the
//! ecosystem.

use crate::field::{FieldContext, FieldElement};

/// Degree below which diffusion is skipped: a 64-bit XTEA block can't
/// mix a secret narrower than itself.
pub const MIN_DIFFUSION_DEGREE: u32 = 64;

const DELTA: u32 = 0x9E37_79B9;

/// 32-round XTEA encipherment of a single 64-bit block, zero key.
fn encipher_block(v: &mut [u32; 2]) {
    let mut sum = 0u32;
    for _ in 0..32 {
        v[0] = v[0].wrapping_add((((v[1] << 4) ^ (v[1] >> 5)).wrapping_add(v[1])) ^ sum);
        sum = sum.wrapping_add(DELTA);
        v[1] = v[1].wrapping_add((((v[0] << 4) ^ (v[0] >> 5)).wrapping_add(v[0])) ^ sum);
    }
}

/// 32-round XTEA decipherment, the exact inverse of [`encipher_block`].
fn decipher_block(v: &mut [u32; 2]) {
    let mut sum = DELTA.wrapping_mul(32);
    for _ in 0..32 {
        v[1] = v[1].wrapping_sub((((v[0] << 4) ^ (v[0] >> 5)).wrapping_add(v[0])) ^ sum);
        sum = sum.wrapping_sub(DELTA);
        v[0] = v[0].wrapping_sub((((v[1] << 4) ^ (v[1] >> 5)).wrapping_add(v[1])) ^ sum);
    }
}

/// Applies `process_block` to the 8 bytes at positions `idx, idx+1, ...,
/// idx+7 (mod len)`, loading/storing each 32-bit half big-endian.
fn encode_slice(data: &mut [u8], idx: usize, len: usize, process_block: fn(&mut [u32; 2])) {
    let mut v = [0u32; 2];
    for i in 0..2 {
        v[i] = (data[(idx + 4 * i) % len] as u32) << 24
            | (data[(idx + 4 * i + 1) % len] as u32) << 16
            | (data[(idx + 4 * i + 2) % len] as u32) << 8
            | (data[(idx + 4 * i + 3) % len] as u32);
    }
    process_block(&mut v);
    for i in 0..2 {
        data[(idx + 4 * i) % len] = (v[i] >> 24) as u8;
        data[(idx + 4 * i + 1) % len] = (v[i] >> 16) as u8;
        data[(idx + 4 * i + 2) % len] = (v[i] >> 8) as u8;
        data[(idx + 4 * i + 3) % len] = v[i] as u8;
    }
}

/// Exports `x` as 16-bit little-endian words (little-endian per word),
/// applying the `deg % 16 == 8` swap of the last meaningful byte with the
/// trailing pad byte, the permutation's required byte layout.
fn to_word_bytes(ctx: &FieldContext, x: &FieldElement) -> Vec<u8> {
    let degree_bytes = ctx.degree() as usize / 8;
    let padded_len = (ctx.degree() as usize + 8) / 16 * 2;
    let be = ctx.export_raw_be(x, degree_bytes);
    let mut v = vec![0u8; padded_len];
    // mpz_export(..., -1 /* LE word order */, 2 /* wordsize */, 1 /* LE within word */, ...)
    // reduces, for byte-granular data, to: each pair of source bytes
    // (big-endian within the original integer) lands as a little-endian
    // 16-bit word, written out word by word starting from the least
    // significant.
    for (i, chunk) in be.rchunks(2).enumerate() {
        match chunk {
            [hi, lo] => {
                v[2 * i] = *hi;
                v[2 * i + 1] = *lo;
            }
            [lo] => {
                v[2 * i + 1] = *lo;
            }
            _ => unreachable!(),
        }
    }
    if ctx.degree() % 16 == 8 {
        v[degree_bytes - 1] = v[degree_bytes];
    }
    v
}

/// Inverse of [`to_word_bytes`].
fn from_word_bytes(ctx: &FieldContext, mut v: Vec<u8>) -> FieldElement {
    let degree_bytes = ctx.degree() as usize / 8;
    if ctx.degree() % 16 == 8 {
        v[degree_bytes] = v[degree_bytes - 1];
        v[degree_bytes - 1] = 0;
    }
    let mut be = vec![0u8; degree_bytes];
    let nwords = (degree_bytes + 1) / 2;
    for i in 0..nwords {
        let hi = v[2 * i];
        let lo = v.get(2 * i + 1).copied().unwrap_or(0);
        let dst = degree_bytes - 2 * i;
        if dst >= 1 {
            be[dst - 1] = lo;
        }
        if dst >= 2 {
            be[dst - 2] = hi;
        }
    }
    ctx.from_be_bytes(&be)
}

/// Runs the full `40 * degree_bytes`-shift schedule in the given
/// direction.
fn permute(ctx: &FieldContext, x: &FieldElement, encode: bool) -> FieldElement {
    let degree_bytes = ctx.degree() as usize / 8;
    let mut v = to_word_bytes(ctx, x);
    if encode {
        let mut i = 0;
        while i < 40 * degree_bytes {
            encode_slice(&mut v, i, degree_bytes, encipher_block);
            i += 2;
        }
    } else {
        let mut i = 40 * degree_bytes as isize - 2;
        while i >= 0 {
            encode_slice(&mut v, i as usize, degree_bytes, decipher_block);
            i -= 2;
        }
    }
    from_word_bytes(ctx, v)
}

/// Applies the diffusion layer to `x`, or returns it unchanged with a
/// warning when `degree < MIN_DIFFUSION_DEGREE` (the layer can't mix a
/// block narrower than itself).
pub fn encode(ctx: &FieldContext, x: &FieldElement) -> FieldElement {
    if ctx.degree() < MIN_DIFFUSION_DEGREE {
        log::warn!("security level too small for the diffusion layer");
        return x.clone();
    }
    permute(ctx, x, true)
}

/// Inverse of [`encode`]; must be called with the same `diffusion` flag
/// and degree as the matching split run used.
pub fn decode(ctx: &FieldContext, x: &FieldElement) -> FieldElement {
    if ctx.degree() < MIN_DIFFUSION_DEGREE {
        log::warn!("security level too small for the diffusion layer");
        return x.clone();
    }
    permute(ctx, x, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtea_block_is_involutive() {
        let mut v = [0x1234_5678, 0x9abc_def0];
        let orig = v;
        encipher_block(&mut v);
        assert_ne!(v, orig);
        decipher_block(&mut v);
        assert_eq!(v, orig);
    }

    #[test]
    fn decode_encode_is_identity_at_every_supported_degree() {
        for deg in [64, 72, 80, 128, 256, 1024] {
            let ctx = FieldContext::new(deg).unwrap();
            let x = ctx.element_from_index(0xdead % (1 << 16).min(u32::MAX));
            let x = ctx.add(&x, &ctx.element_from_index(1));
            let enc = encode(&ctx, &x);
            let dec = decode(&ctx, &enc);
            assert_eq!(ctx.print(&dec, true), ctx.print(&x, true), "degree {deg}");
        }
    }

    #[test]
    fn decode_encode_roundtrip_at_degree_72_with_nonzero_top_byte() {
        let ctx = FieldContext::new(72).unwrap();
        let x = ctx.import("ff00000000000000ab", true).unwrap();
        let enc = encode(&ctx, &x);
        let dec = decode(&ctx, &enc);
        assert_eq!(ctx.print(&dec, true), ctx.print(&x, true));
    }

    #[test]
    fn below_min_degree_is_a_no_op() {
        let ctx = FieldContext::new(16).unwrap();
        let x = ctx.import("abcd", true).unwrap();
        let enc = encode(&ctx, &x);
        assert_eq!(ctx.print(&enc, true), "abcd");
    }
}
