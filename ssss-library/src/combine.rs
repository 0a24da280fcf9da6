// SPDX-License-Identifier: Apache-2.0

//! The combine orchestrator (spec.md §4.G step 2), a direct port of
//! `combine()` in `examples/original_source/ssss.c` minus the parts that
//! belong to `ssss-cli`: prompting and stdin/stdout.

use ssss_cryptography::field::FieldContext;
use ssss_cryptography::reconstruct::{fill_vandermonde_column, solve, Matrix};
use ssss_cryptography::{codec, diffusion};

use crate::error::CombineError;
use crate::types::{CombineOutcome, CombineParams};

/// Reconstructs the secret from exactly `params.threshold` share lines.
pub fn combine(params: CombineParams, share_lines: &[String]) -> Result<CombineOutcome, CombineError> {
    if params.threshold < 2 {
        return Err(CombineError::InvalidThreshold(params.threshold));
    }
    if share_lines.len() != params.threshold as usize {
        return Err(CombineError::WrongShareCount { expected: params.threshold, got: share_lines.len() as u32 });
    }

    let degree = codec::Share::degree_of(&share_lines[0])?;
    if !ssss_cryptography::field::field_size_valid(degree) {
        return Err(CombineError::InvalidFieldSize);
    }
    let ctx = FieldContext::new(degree)?;

    let n = params.threshold as usize;
    let mut matrix = Matrix::zero(&ctx, n);
    let mut rhs = Vec::with_capacity(n);
    for (col, line) in share_lines.iter().enumerate() {
        let share = codec::Share::parse(&ctx, line)?;
        let x = ctx.element_from_index(share.index);
        fill_vandermonde_column(&ctx, &mut matrix, col, &x);
        // Remove the leading x^threshold term added by evaluate_share.
        let xn = ctx.mul(&x, matrix.get(0, col));
        rhs.push(ctx.add(&share.y, &xn));
    }

    let mut secret = solve(&ctx, &mut matrix, &mut rhs)?;
    if params.diffusion {
        if degree >= diffusion::MIN_DIFFUSION_DEGREE {
            secret = diffusion::decode(&ctx, &secret);
        } else {
            log::warn!("security level too small for the diffusion layer");
        }
    }

    Ok(CombineOutcome { secret: ctx.print(&secret, params.hex), degree })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::split;
    use crate::types::SplitParams;

    #[test]
    fn rejects_threshold_below_two() {
        let params = CombineParams { threshold: 1, hex: true, diffusion: true };
        let err = combine(params, &["1-ab".to_string()]).unwrap_err();
        assert!(matches!(err, CombineError::InvalidThreshold(1)));
    }

    #[test]
    fn rejects_wrong_share_count() {
        let params = CombineParams { threshold: 3, hex: true, diffusion: true };
        let lines = vec!["1-abcd".to_string(), "2-abcd".to_string()];
        let err = combine(params, &lines).unwrap_err();
        assert!(matches!(err, CombineError::WrongShareCount { expected: 3, got: 2 }));
    }

    #[test]
    fn duplicate_share_is_inconsistent() {
        let split_params =
            SplitParams { threshold: 2, number: 3, security_bits: None, token: None, hex: true, diffusion: false };
        let outcome = split(split_params, "abcd").unwrap();
        let lines = vec![outcome.shares[0].clone(), outcome.shares[0].clone()];
        let combine_params = CombineParams { threshold: 2, hex: true, diffusion: false };
        let err = combine(combine_params, &lines).unwrap_err();
        assert!(matches!(err, CombineError::Reconstruct(_)));
    }

    #[test]
    fn full_round_trip_recovers_the_secret() {
        let split_params =
            SplitParams { threshold: 3, number: 5, security_bits: None, token: None, hex: true, diffusion: false };
        let outcome = split(split_params, "deadbeef").unwrap();

        let lines: Vec<String> = outcome.shares[..3].to_vec();
        let combine_params = CombineParams { threshold: 3, hex: true, diffusion: false };
        let restored = combine(combine_params, &lines).unwrap();
        assert_eq!(restored.secret, "deadbeef");
    }
}
