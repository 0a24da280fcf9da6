// SPDX-License-Identifier: Apache-2.0

//! Polynomial evaluation over GF(2^n), by Horner's method (spec.md
//! §4.D).
//!
//! [`evaluate_share`] folds in one extra `x^n` term on top of the
//! `n - 1`-degree polynomial implied by `coeff`. That term carries no
//! security benefit and is kept only so shares stay wire-compatible with
//! other `ssss` implementations; [`crate::reconstruct`] subtracts it back
//! out during recombination.

use crate::field::{FieldContext, FieldElement};

/// Evaluates `coeff[n-1]*x^n + coeff[n-2]*x^(n-1) + ... + coeff[1]*x^2 +
/// coeff[0]*x + x` at the given `x` — i.e. the usual degree-`(n-1)`
/// polynomial with an extra bare `x^n` term folded in by starting the
/// accumulator at `x` instead of zero.
pub fn evaluate_share(ctx: &FieldContext, coeff: &[FieldElement], x: &FieldElement) -> FieldElement {
    let n = coeff.len();
    let mut y = x.clone();
    for c in coeff.iter().skip(1).rev() {
        y = ctx.add(&y, c);
        y = ctx.mul(&y, x);
    }
    if n > 0 {
        y = ctx.add(&y, &coeff[0]);
    }
    y
}
