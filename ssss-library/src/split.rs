// SPDX-License-Identifier: Apache-2.0

//! The split orchestrator (spec.md §4.G step 1), a direct port of
//! `split()` in `examples/original_source/ssss.c` minus the parts that
//! belong to `ssss-cli`: prompting, terminal echo, and stdout.

use ssss_cryptography::field::FieldContext;
use ssss_cryptography::{codec, diffusion, poly, prng::CsprngSource};

use crate::error::SplitError;
use crate::types::{SplitOutcome, SplitParams};

/// Splits `secret` into `params.number` shares, any `params.threshold` of
/// which reconstruct it.
///
/// `secret` is the raw line as the caller read it from the user: hex
/// digits if `params.hex`, otherwise raw text bytes. Reading the line and
/// suppressing terminal echo while doing so is the caller's job.
pub fn split(params: SplitParams, secret: &str) -> Result<SplitOutcome, SplitError> {
    if params.threshold < 2 || params.threshold > params.number {
        return Err(SplitError::InvalidThreshold { threshold: params.threshold, number: params.number });
    }
    if let Some(token) = &params.token {
        if token.len() > codec::MAX_TOKEN_LEN {
            return Err(SplitError::TokenTooLong);
        }
        if token.contains('-') {
            return Err(SplitError::TokenContainsSeparator);
        }
    }
    if secret.is_empty() {
        return Err(SplitError::EmptySecret);
    }
    if let Some(deg) = params.security_bits {
        if !ssss_cryptography::field::field_size_valid(deg) {
            return Err(SplitError::InvalidSecurityLevel);
        }
    }

    let degree = match params.security_bits {
        Some(deg) => deg,
        None => {
            let inferred = if params.hex {
                4 * (secret.len() as u32 + (secret.len() as u32 % 2))
            } else {
                8 * secret.len() as u32
            };
            if !ssss_cryptography::field::field_size_valid(inferred) {
                return Err(SplitError::InvalidInferredSecurityLevel);
            }
            inferred
        }
    };

    let ctx = FieldContext::new(degree)?;

    let mut secret_elem = ctx.import(secret, params.hex)?;
    if params.diffusion {
        if degree >= diffusion::MIN_DIFFUSION_DEGREE {
            secret_elem = diffusion::encode(&ctx, &secret_elem);
        } else {
            log::warn!("security level too small for the diffusion layer");
        }
    }

    let mut coeff = Vec::with_capacity(params.threshold as usize);
    coeff.push(secret_elem);
    let mut rng = CsprngSource::open();
    for _ in 1..params.threshold {
        coeff.push(rng.read(&ctx)?);
    }
    rng.close();

    let index_width = codec::index_width(params.number);
    let mut shares = Vec::with_capacity(params.number as usize);
    for i in 0..params.number {
        let x = ctx.element_from_index(i + 1);
        let y = poly::evaluate_share(&ctx, &coeff, &x);
        let share = codec::Share { token: params.token.clone(), index: i + 1, y };
        shares.push(share.format(&ctx, index_width));
    }

    Ok(SplitOutcome { shares, degree })
}
