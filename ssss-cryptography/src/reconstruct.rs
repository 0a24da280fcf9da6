// SPDX-License-Identifier: Apache-2.0

//! Secret reconstruction via Gauss-Jordan elimination over GF(2^n)
//! (spec.md §4.E), a direct port of `restore_secret` in
//! `examples/original_source/ssss.c`.
//!
//! The matrix is built so that `matrix[k][i]` holds `x_i^(threshold-1-k)`
//! for share `i`'s index `x_i` — column `i` is the Vandermonde column
//! for that share. Elimination here swaps and combines whole *columns*,
//! not rows; that's a property of the original construction, not a bug,
//! and is kept faithfully rather than transposed into a more familiar
//! row-based presentation.

use crate::error::ReconstructError;
use crate::field::{FieldContext, FieldElement};

/// A square `n x n` matrix of field elements, addressed `get(row, col)`,
/// matching the original's `A[row][col]` layout.
pub struct Matrix {
    n: usize,
    cells: Vec<FieldElement>,
}

impl Matrix {
    pub fn zero(ctx: &FieldContext, n: usize) -> Self {
        Matrix { n, cells: vec![ctx.zero(); n * n] }
    }

    pub fn get(&self, row: usize, col: usize) -> &FieldElement {
        &self.cells[row * self.n + col]
    }

    pub fn set(&mut self, row: usize, col: usize, v: FieldElement) {
        self.cells[row * self.n + col] = v;
    }

    fn swap_cols(&mut self, from_row: usize, a: usize, b: usize) {
        for row in from_row..self.n {
            self.cells.swap(row * self.n + a, row * self.n + b);
        }
    }
}

/// Builds column `col` of the Vandermonde-style matrix for share index
/// `x`: `matrix[n-1][col] = 1`, `matrix[j][col] = matrix[j+1][col] * x`
/// descending, so `matrix[j][col] = x^(n-1-j)`.
pub fn fill_vandermonde_column(ctx: &FieldContext, matrix: &mut Matrix, col: usize, x: &FieldElement) {
    let n = matrix.n;
    matrix.set(n - 1, col, ctx.element_from_index(1));
    for j in (0..n - 1).rev() {
        let prev = matrix.get(j + 1, col).clone();
        matrix.set(j, col, ctx.mul(&prev, x));
    }
}

/// Solves `matrix * coeff = rhs` in place via Gauss-Jordan elimination
/// with column pivoting, returning the final unknown (`rhs[n-1]`, the
/// secret's `coeff[0]` once the leading `x^n` term has been removed by
/// the caller).
///
/// Fails when two shares collide on the same index (a singular matrix),
/// the only failure mode `ssss` combine can hit at this layer.
pub fn solve(ctx: &FieldContext, matrix: &mut Matrix, rhs: &mut [FieldElement]) -> Result<FieldElement, ReconstructError> {
    let n = matrix.n;
    for i in 0..n {
        if matrix.get(i, i).is_zero() {
            let pivot = (i + 1..n).find(|&j| !matrix.get(i, j).is_zero());
            let j = pivot.ok_or(ReconstructError::Singular)?;
            matrix.swap_cols(i, i, j);
            rhs.swap(i, j);
        }
        for j in (i + 1)..n {
            if !matrix.get(i, j).is_zero() {
                let factor = matrix.get(i, j).clone();
                let pivot_diag = matrix.get(i, i).clone();
                for k in (i + 1)..n {
                    let h = ctx.mul(matrix.get(k, i), &factor);
                    let scaled = ctx.mul(matrix.get(k, j), &pivot_diag);
                    matrix.set(k, j, ctx.add(&scaled, &h));
                }
                let h = ctx.mul(&rhs[i], &factor);
                let scaled = ctx.mul(&rhs[j], &pivot_diag);
                rhs[j] = ctx.add(&scaled, &h);
            }
        }
    }
    let inv = ctx.invert(matrix.get(n - 1, n - 1)).map_err(|_| ReconstructError::Singular)?;
    Ok(ctx.mul(&rhs[n - 1], &inv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::evaluate_share;

    #[test]
    fn reconstructs_secret_from_threshold_shares() {
        let ctx = FieldContext::new(64).unwrap();
        let secret = ctx.import("cafef00dcafef00d", true).unwrap();
        let coeff = vec![
            secret.clone(),
            ctx.import("1111111111111111", true).unwrap(),
            ctx.import("2222222222222222", true).unwrap(),
        ];
        let n = coeff.len();
        let indices = [1u32, 2, 3];

        let mut matrix = Matrix::zero(&ctx, n);
        let mut rhs = Vec::new();
        for (col, &idx) in indices.iter().enumerate() {
            let x = ctx.element_from_index(idx);
            fill_vandermonde_column(&ctx, &mut matrix, col, &x);
            let share_value = evaluate_share(&ctx, &coeff, &x);
            // remove the leading x^n term, same as combine() does.
            let xn = ctx.mul(&x, matrix.get(0, col));
            rhs.push(ctx.add(&share_value, &xn));
        }

        let restored = solve(&ctx, &mut matrix, &mut rhs).unwrap();
        assert_eq!(ctx.print(&restored, true), ctx.print(&secret, true));
    }

    #[test]
    fn duplicate_share_index_is_singular() {
        let ctx = FieldContext::new(64).unwrap();
        let coeff = vec![
            ctx.import("cafef00dcafef00d", true).unwrap(),
            ctx.import("1111111111111111", true).unwrap(),
        ];
        let n = coeff.len();

        let mut matrix = Matrix::zero(&ctx, n);
        let mut rhs = Vec::new();
        for col in 0..n {
            let x = ctx.element_from_index(5); // same index twice
            fill_vandermonde_column(&ctx, &mut matrix, col, &x);
            let share_value = evaluate_share(&ctx, &coeff, &x);
            let xn = ctx.mul(&x, matrix.get(0, col));
            rhs.push(ctx.add(&share_value, &xn));
        }

        assert!(solve(&ctx, &mut matrix, &mut rhs).is_err());
    }
}
