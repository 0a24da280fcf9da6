// SPDX-License-Identifier: Apache-2.0

//! Split/combine round-trip and failure-mode coverage (spec.md §8).

use ssss_library::{combine, split, CombineParams, SplitParams};

fn split_params(threshold: u32, number: u32, hex: bool, diffusion: bool) -> SplitParams {
    SplitParams { threshold, number, security_bits: None, token: None, hex, diffusion }
}

#[test]
fn every_t_subset_of_small_scheme_reconstructs() {
    let outcome = split(split_params(3, 5, true, true), "cafef00d").unwrap();
    assert_eq!(outcome.shares.len(), 5);

    // every 3-subset of {0..5}
    for a in 0..5 {
        for b in (a + 1)..5 {
            for c in (b + 1)..5 {
                let lines = vec![outcome.shares[a].clone(), outcome.shares[b].clone(), outcome.shares[c].clone()];
                let restored = combine(CombineParams { threshold: 3, hex: true, diffusion: true }, &lines).unwrap();
                assert_eq!(restored.secret, "cafef00d", "subset ({a},{b},{c})");
            }
        }
    }
}

#[test]
fn explicit_security_level_is_honored() {
    let mut params = split_params(3, 5, false, true);
    params.security_bits = Some(128);
    let outcome = split(params, "hello").unwrap();
    assert_eq!(outcome.degree, 128);

    let lines = outcome.shares[..3].to_vec();
    let restored = combine(CombineParams { threshold: 3, hex: false, diffusion: true }, &lines).unwrap();
    assert_eq!(restored.secret, "hello");
}

#[test]
fn subthreshold_shares_do_not_recover_the_secret() {
    let outcome = split(split_params(3, 5, true, true), "deadbeef").unwrap();
    // Only 2 of the needed 3 shares: combine with threshold=2 on a
    // threshold-3 scheme "succeeds" but returns the wrong value.
    let lines = outcome.shares[..2].to_vec();
    let restored = combine(CombineParams { threshold: 2, hex: true, diffusion: true }, &lines).unwrap();
    assert_ne!(restored.secret, "deadbeef");
}

#[test]
fn duplicate_share_is_rejected_as_inconsistent() {
    let outcome = split(split_params(2, 3, true, true), "abcd").unwrap();
    let lines = vec![outcome.shares[0].clone(), outcome.shares[0].clone()];
    let err = combine(CombineParams { threshold: 2, hex: true, diffusion: true }, &lines).unwrap_err();
    assert!(err.to_string().contains("inconsistent"));
}

#[test]
fn mismatched_field_sizes_across_shares_is_rejected() {
    let small = split(split_params(2, 3, true, true), "ab").unwrap();
    let mut big_params = split_params(2, 3, true, true);
    big_params.security_bits = Some(64);
    let big = split(big_params, "abcdabcdabcdabcd").unwrap();

    let lines = vec![small.shares[0].clone(), big.shares[0].clone()];
    let err = combine(CombineParams { threshold: 2, hex: true, diffusion: true }, &lines).unwrap_err();
    assert!(matches!(err, ssss_library::CombineError::Codec(_)));
}

#[test]
fn low_degree_skips_diffusion_without_failing() {
    let outcome = split(split_params(2, 3, true, true), "ab").unwrap();
    assert_eq!(outcome.degree, 8);
    let restored = combine(CombineParams { threshold: 2, hex: true, diffusion: true }, &outcome.shares[..2]).unwrap();
    assert_eq!(restored.secret, "ab");
}
