// SPDX-License-Identifier: Apache-2.0

//! `ssss-split`: prompts for a secret, splits it, prints the shares.
//!
//! Mirrors `split()`/`main()` in `examples/original_source/ssss.c`, with
//! the actual splitting delegated to `ssss_library::split`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use ssss_cli::args::SplitArgs;
use ssss_cli::{memlock, report_fatal, report_warning, terminal::TerminalGuard};
use ssss_library::SplitParams;
use zeroize::Zeroizing;

fn main() -> ExitCode {
    env_logger::init();
    let args = SplitArgs::parse();
    let quiet = args.quiet || args.very_quiet;
    let very_quiet = args.very_quiet;

    match memlock::lock_all() {
        memlock::LockOutcome::Locked => {}
        memlock::LockOutcome::Failed(err) => {
            if args.require_lock {
                return report_fatal("memory lock is required to proceed");
            }
            report_warning(&memlock::describe_failure(&err), very_quiet);
        }
    }

    if args.threshold < 2 {
        return report_fatal("invalid parameters: invalid threshold value");
    }
    if args.number < args.threshold {
        return report_fatal("invalid parameters: number of shares smaller than threshold");
    }

    if !quiet {
        eprintln!(
            "Generating shares using a ({},{}) scheme with {} security level.",
            args.threshold,
            args.number,
            args.security.map(|s| format!("a {s} bit")).unwrap_or_else(|| "dynamic".to_string()),
        );
        let kind = if args.hex { "hex digits" } else { "ASCII characters" };
        eprint!("Enter the secret, at most as many {kind} as the security level allows: ");
        io::stderr().flush().ok();
    }

    let secret = {
        let _echo_guard = match TerminalGuard::suppress() {
            Ok(guard) => guard,
            Err(_) => return report_fatal("couldn't control terminal echo"),
        };
        let mut line = Zeroizing::new(String::new());
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => return report_fatal("I/O error while reading secret"),
            Ok(_) => {}
        }
        Zeroizing::new(line.trim_end_matches(['\r', '\n']).to_string())
    };
    if !quiet {
        eprintln!();
    }

    let params = SplitParams {
        threshold: args.threshold,
        number: args.number,
        security_bits: args.security,
        token: args.token,
        hex: args.hex,
        diffusion: !args.no_diffusion,
    };

    match ssss_library::split(params, &secret) {
        Ok(outcome) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for share in &outcome.shares {
                if writeln!(out, "{share}").is_err() {
                    return report_fatal("I/O error while writing shares");
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => report_fatal(&err.to_string()),
    }
}
