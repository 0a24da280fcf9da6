// SPDX-License-Identifier: Apache-2.0

//! Command-line arguments for `ssss-split` and `ssss-combine`, grounded
//! in the `getopt` flag table (`"MvDhqQxs:t:n:w:"`) of
//! `examples/original_source/ssss.c`'s `main()`, and in the `clap`
//! derive style used across the pack (e.g.
//! `TaceoLabs-oprf-service/oprf-dev-client/src/config.rs`).

use clap::Parser;

/// Split secrets using Shamir's Secret Sharing Scheme.
#[derive(Parser, Debug)]
#[command(name = "ssss-split", version)]
pub struct SplitArgs {
    /// Number of shares needed to reconstruct the secret.
    #[arg(short = 't', long, env = "SSSS_THRESHOLD")]
    pub threshold: u32,

    /// Total number of shares to generate.
    #[arg(short = 'n', long, env = "SSSS_NUMBER")]
    pub number: u32,

    /// Explicit security level in bits; inferred from the secret if omitted.
    #[arg(short = 's', long, env = "SSSS_SECURITY")]
    pub security: Option<u32>,

    /// Token to prefix every generated share with.
    #[arg(short = 'w', long, env = "SSSS_TOKEN")]
    pub token: Option<String>,

    /// Treat the secret/shares as hexadecimal rather than text.
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Suppress prompts.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Suppress prompts and warnings.
    #[arg(short = 'Q', long)]
    pub very_quiet: bool,

    /// Disable the keyless diffusion layer.
    #[arg(short = 'D', long)]
    pub no_diffusion: bool,

    /// Fail instead of warning if memory locking is unavailable.
    #[arg(short = 'M', long)]
    pub require_lock: bool,
}

/// Combine shares using Shamir's Secret Sharing Scheme.
#[derive(Parser, Debug)]
#[command(name = "ssss-combine", version)]
pub struct CombineArgs {
    /// Number of shares required to reconstruct the secret.
    #[arg(short = 't', long, env = "SSSS_THRESHOLD")]
    pub threshold: u32,

    /// Treat the recovered secret (and input shares' yhex) as hexadecimal.
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Suppress prompts.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Suppress prompts and warnings.
    #[arg(short = 'Q', long)]
    pub very_quiet: bool,

    /// Disable the keyless diffusion layer (must match how the shares were split).
    #[arg(short = 'D', long)]
    pub no_diffusion: bool,

    /// Fail instead of warning if memory locking is unavailable.
    #[arg(short = 'M', long)]
    pub require_lock: bool,
}
