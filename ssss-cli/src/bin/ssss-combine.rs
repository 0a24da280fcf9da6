// SPDX-License-Identifier: Apache-2.0

//! `ssss-combine`: prompts for `threshold` shares, reconstructs the
//! secret, prints it.
//!
//! Mirrors `combine()`/`main()` in `examples/original_source/ssss.c`,
//! with the actual reconstruction delegated to `ssss_library::combine`.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use ssss_cli::args::CombineArgs;
use ssss_cli::{memlock, report_fatal, report_warning};
use ssss_library::CombineParams;
use zeroize::Zeroizing;

fn main() -> ExitCode {
    env_logger::init();
    let args = CombineArgs::parse();
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

    if !quiet {
        eprintln!("Enter {} shares separated by newlines:", args.threshold);
    }

    let mut lines = Zeroizing::new(Vec::with_capacity(args.threshold as usize));
    let stdin = io::stdin();
    for i in 0..args.threshold {
        if !quiet {
            eprint!("Share [{}/{}]: ", i + 1, args.threshold);
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return report_fatal("I/O error while reading shares"),
            Ok(_) => {}
        }
        lines.push(line.trim_end_matches(['\r', '\n']).to_string());
    }

    let params = CombineParams { threshold: args.threshold, hex: args.hex, diffusion: !args.no_diffusion };

    match ssss_library::combine(params, &lines) {
        Ok(outcome) => {
            if !quiet {
                eprint!("Resulting secret: ");
            }
            println!("{}", outcome.secret);
            ExitCode::SUCCESS
        }
        Err(err) => report_fatal(&err.to_string()),
    }
}
