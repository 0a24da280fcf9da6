// SPDX-License-Identifier: Apache-2.0

//! Arithmetic in GF(2^deg), for `deg` in `{8, 16, ..., 1024}`.
//!
//! A [`FieldContext`] fixes the active degree and field polynomial for a
//! single split or combine run and is threaded explicitly through every
//! operation (never a process-wide global, see DESIGN.md). A
//! [`FieldElement`] is a non-negative integer below `2^deg`, XOR for
//! addition, polynomial multiplication reduced modulo the field
//! polynomial for multiplication.

mod irred;
mod limbs;

use irred::IRRED_COEFF;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::FieldError;

/// Smallest and largest supported field degrees, and the step between
/// them — the original source's `MAXDEGREE` and the implicit 8-bit step
/// of `irred_coeff`.
pub const MIN_DEGREE: u32 = 8;
pub const MAX_DEGREE: u32 = 1024;

/// Returns whether `deg` is a field degree this implementation supports.
pub fn field_size_valid(deg: u32) -> bool {
    (MIN_DEGREE..=MAX_DEGREE).contains(&deg) && deg % 8 == 0
}

/// An element of GF(2^deg): a bitfield, non-negative, strictly below
/// `2^deg`.
///
/// Wipes its backing limbs on drop, since field elements are either
/// secret material (`coeff[0]`), derived from it, or on a path to
/// becoming part of one.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FieldElement {
    limbs: Vec<u64>,
}

impl FieldElement {
    fn zero(nlimbs: usize) -> Self {
        FieldElement { limbs: vec![0; nlimbs] }
    }

    fn one(nlimbs: usize) -> Self {
        let mut e = Self::zero(nlimbs);
        e.limbs[0] = 1;
        e
    }

    /// Builds the field element representing `n` (used for share indices,
    /// which are small integers in `1..=N`).
    pub fn from_index(n: u32, nlimbs: usize) -> Self {
        let mut e = Self::zero(nlimbs);
        e.limbs[0] = n as u64;
        e
    }

    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.limbs)
    }

    fn bit(&self, i: u32) -> bool {
        limbs::bit(&self.limbs, i)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.limbs == other.limbs
    }
}
impl Eq for FieldElement {}

/// The active field: degree plus the irreducible polynomial it implies.
///
/// Constructed once per split or combine run and dropped at the end of
/// it; this is the Rust stand-in for the source's global `degree`/`poly`
/// pair (see the REDESIGN FLAG in DESIGN.md).
pub struct FieldContext {
    degree: u32,
    poly: FieldElement,
    nlimbs: usize,
}

impl FieldContext {
    /// Initializes the field polynomial for the given degree: `x^deg +
    /// x^a + x^b + x^c + 1`, with `a > b > c` looked up from
    /// [`irred::IRRED_COEFF`].
    pub fn new(deg: u32) -> Result<Self, FieldError> {
        if !field_size_valid(deg) {
            return Err(FieldError::InvalidDegree);
        }
        let nlimbs = limbs::limb_count(deg);
        let mut poly = FieldElement::zero(nlimbs);
        let base = 3 * (deg as usize / 8 - 1);
        limbs::set_bit(&mut poly.limbs, deg);
        limbs::set_bit(&mut poly.limbs, IRRED_COEFF[base] as u32);
        limbs::set_bit(&mut poly.limbs, IRRED_COEFF[base + 1] as u32);
        limbs::set_bit(&mut poly.limbs, IRRED_COEFF[base + 2] as u32);
        limbs::set_bit(&mut poly.limbs, 0);
        Ok(FieldContext { degree: deg, poly, nlimbs })
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub(crate) fn nlimbs(&self) -> usize {
        self.nlimbs
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement::zero(self.nlimbs)
    }

    pub fn element_from_index(&self, n: u32) -> FieldElement {
        FieldElement::from_index(n, self.nlimbs)
    }

    /// Builds a field element directly from `degree/8` big-endian bytes,
    /// used by [`crate::prng`] to turn raw entropy into a coefficient
    /// without a hex round-trip.
    pub fn from_be_bytes(&self, bytes: &[u8]) -> FieldElement {
        let mut out = self.zero();
        limbs::import_be_bytes(&mut out.limbs, bytes);
        out
    }

    /// Exports the low `nbytes` bytes of `x` as big-endian, for callers
    /// elsewhere in the crate that need raw bytes rather than hex text
    /// (the diffusion layer's word-reordering, in particular).
    pub(crate) fn export_raw_be(&self, x: &FieldElement, nbytes: usize) -> Vec<u8> {
        limbs::export_be_bytes(&x.limbs, nbytes)
    }

    /// Field addition: bitwise XOR.
    pub fn add(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        let mut z = x.clone();
        limbs::xor_assign(&mut z.limbs, &y.limbs);
        z
    }

    /// Field multiplication: classical shift-and-xor, `degree` iterations
    /// regardless of operand value (constant work per bit of `y`, though
    /// not constant-time — see DESIGN.md on side channels).
    pub fn mul(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        let mut b = x.clone();
        let mut z = if y.bit(0) { x.clone() } else { self.zero() };
        for i in 1..self.degree {
            limbs::shl1(&mut b.limbs);
            if b.bit(self.degree) {
                limbs::xor_assign(&mut b.limbs, &self.poly.limbs);
            }
            if y.bit(i) {
                limbs::xor_assign(&mut z.limbs, &b.limbs);
            }
        }
        z
    }

    /// Multiplicative inverse via the binary extended-GCD ("almost
    /// inverse") method: maintains `(u, v, z, g)` with `z*x ≡ u` and
    /// `g*x ≡ v` (mod poly), starting `u=x, v=poly, z=1, g=0`, until
    /// `u=1`.
    pub fn invert(&self, x: &FieldElement) -> Result<FieldElement, FieldError> {
        if x.is_zero() {
            return Err(FieldError::InvertZero);
        }
        let mut u = x.clone();
        let mut v = self.poly.clone();
        let mut g = self.zero();
        let mut z = FieldElement::one(self.nlimbs);

        while limbs::bit_len(&u.limbs) != 1 {
            let mut i = limbs::bit_len(&u.limbs) as i64 - limbs::bit_len(&v.limbs) as i64;
            if i < 0 {
                std::mem::swap(&mut u, &mut v);
                std::mem::swap(&mut z, &mut g);
                i = -i;
            }
            let h = limbs::shl(&v.limbs, i as u32);
            limbs::xor_assign(&mut u.limbs, &h);
            let h = limbs::shl(&g.limbs, i as u32);
            limbs::xor_assign(&mut z.limbs, &h);
        }
        Ok(z)
    }

    /// Parses a field element from text, per spec.md §4.A:
    /// - hex: up to `deg/4` hex digits, left-padded with zeros; longer is
    ///   fatal, shorter warns.
    /// - text: up to `deg/8` bytes; any byte outside `[0x20, 0x7F)` warns
    ///   that the input looks binary.
    pub fn import(&self, s: &str, hex: bool) -> Result<FieldElement, FieldError> {
        if hex {
            let max_digits = self.degree as usize / 4;
            if s.len() > max_digits {
                return Err(FieldError::InputTooLong);
            }
            if s.len() < max_digits {
                log::warn!("input string too short, adding null padding on the left");
            }
            if !s.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(FieldError::InvalidSyntax);
            }
            let mut bytes = vec![0u8; max_digits.div_ceil(2)];
            let padded = format!("{s:0>width$}", width = bytes.len() * 2);
            for (i, chunk) in padded.as_bytes().chunks(2).enumerate() {
                let hex_pair = std::str::from_utf8(chunk).unwrap();
                bytes[i] = u8::from_str_radix(hex_pair, 16).map_err(|_| FieldError::InvalidSyntax)?;
            }
            let mut out = self.zero();
            limbs::import_be_bytes(&mut out.limbs, &bytes);
            Ok(out)
        } else {
            let max_bytes = self.degree as usize / 8;
            if s.len() > max_bytes {
                return Err(FieldError::InputTooLong);
            }
            if s.bytes().any(|b| !(0x20..0x7f).contains(&b)) {
                log::warn!("binary data detected, use -x mode instead");
            }
            let mut out = self.zero();
            limbs::import_be_bytes(&mut out.limbs, s.as_bytes());
            Ok(out)
        }
    }

    /// Renders a field element to text, reversing [`Self::import`]'s
    /// encoding. In text mode non-printable bytes render as `.` and emit
    /// a warning.
    pub fn print(&self, x: &FieldElement, hex: bool) -> String {
        if hex {
            // degree % 8 == 0, so degree/4 (the digit count) is always even.
            let digits = self.degree as usize / 4;
            let bytes = limbs::export_be_bytes(&x.limbs, digits / 2);
            bytes.iter().map(|b| format!("{b:02x}")).collect()
        } else {
            let nbytes = self.degree as usize / 8;
            let bytes = limbs::export_be_bytes(&x.limbs, nbytes);
            let mut warn = false;
            let rendered: String = bytes
                .iter()
                .map(|&b| {
                    let printable = (0x20..0x7f).contains(&b);
                    warn |= !printable;
                    if printable { b as char } else { '.' }
                })
                .collect();
            if warn {
                log::warn!("binary data detected, use -x mode instead");
            }
            rendered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_element(ctx: &FieldContext) -> FieldElement {
        let mut rng = rand::thread_rng();
        let mut e = ctx.zero();
        for limb in e.limbs.iter_mut() {
            *limb = rng.gen();
        }
        // clear bits at/above degree so it's a valid field element
        for i in ctx.degree..(ctx.nlimbs() as u32 * 64) {
            if e.bit(i) {
                let word = i as usize / 64;
                let off = i % 64;
                e.limbs[word] &= !(1u64 << off);
            }
        }
        e
    }

    #[test]
    fn field_size_valid_bounds() {
        assert!(field_size_valid(8));
        assert!(field_size_valid(1024));
        assert!(!field_size_valid(4));
        assert!(!field_size_valid(1032));
        assert!(!field_size_valid(12));
    }

    #[test]
    fn add_is_commutative_and_self_inverse() {
        let ctx = FieldContext::new(64).unwrap();
        let x = random_element(&ctx);
        let y = random_element(&ctx);
        assert_eq!(ctx.add(&x, &y), ctx.add(&y, &x));
        assert!(ctx.add(&x, &x).is_zero());
    }

    #[test]
    fn mul_by_zero_is_zero() {
        let ctx = FieldContext::new(64).unwrap();
        let x = random_element(&ctx);
        assert!(ctx.mul(&x, &ctx.zero()).is_zero());
    }

    #[test]
    fn mul_is_commutative() {
        let ctx = FieldContext::new(64).unwrap();
        let x = random_element(&ctx);
        let y = random_element(&ctx);
        assert_eq!(ctx.mul(&x, &y), ctx.mul(&y, &x));
    }

    #[test]
    fn mul_distributes_over_add() {
        let ctx = FieldContext::new(64).unwrap();
        let x = random_element(&ctx);
        let y = random_element(&ctx);
        let z = random_element(&ctx);
        let lhs = ctx.mul(&x, &ctx.add(&y, &z));
        let rhs = ctx.add(&ctx.mul(&x, &y), &ctx.mul(&x, &z));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let ctx = FieldContext::new(64).unwrap();
        let mut x = random_element(&ctx);
        if x.is_zero() {
            x = ctx.element_from_index(1);
        }
        let inv = ctx.invert(&x).unwrap();
        assert_eq!(ctx.mul(&x, &inv), FieldElement::one(ctx.nlimbs()));
    }

    #[test]
    fn invert_zero_is_an_error() {
        let ctx = FieldContext::new(64).unwrap();
        assert!(ctx.invert(&ctx.zero()).is_err());
    }

    #[test]
    fn import_print_hex_roundtrip() {
        let ctx = FieldContext::new(64).unwrap();
        let x = ctx.import("deadbeefcafef00d", true).unwrap();
        assert_eq!(ctx.print(&x, true), "deadbeefcafef00d");
    }

    #[test]
    fn import_print_text_roundtrip() {
        let ctx = FieldContext::new(64).unwrap();
        let x = ctx.import("abcdefgh", false).unwrap();
        assert_eq!(ctx.print(&x, false), "abcdefgh");
    }

    #[test]
    fn import_hex_too_long_is_fatal() {
        let ctx = FieldContext::new(8).unwrap();
        assert!(ctx.import("abc", true).is_err());
    }

    #[test]
    fn import_hex_short_pads_left() {
        let ctx = FieldContext::new(16).unwrap();
        let x = ctx.import("f", true).unwrap();
        assert_eq!(ctx.print(&x, true), "000f");
    }
}
