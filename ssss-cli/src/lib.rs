// SPDX-License-Identifier: Apache-2.0

//! The outer collaborator layer around `ssss-library`'s split/combine
//! engine: argument parsing, the secret/share prompt loop, terminal echo
//! suppression, process memory locking and `FATAL:`/`WARNING:` message
//! formatting. None of this carries cryptographic weight; it exists so
//! the engine is usable end to end from a shell.

pub mod args;
pub mod memlock;
pub mod terminal;

/// Prints `FATAL: {msg}.` to stderr (ringing the terminal bell first if
/// stderr is a tty, matching the original's `isatty(2)` check) and
/// returns the exit code callers should use.
pub fn report_fatal(msg: &str) -> std::process::ExitCode {
    // SAFETY: isatty takes a plain fd and has no other preconditions.
    let bell = if unsafe { libc::isatty(2) } != 0 { "\x07" } else { "" };
    eprintln!("{bell}FATAL: {msg}.");
    std::process::ExitCode::FAILURE
}

/// Prints `WARNING: {msg}.` to stderr unless `very_quiet` is set,
/// matching the original's `opt_QUIET` gate on `warning()`.
pub fn report_warning(msg: &str, very_quiet: bool) {
    if !very_quiet {
        // SAFETY: isatty takes a plain fd and has no other preconditions.
        let bell = if unsafe { libc::isatty(2) } != 0 { "\x07" } else { "" };
        eprintln!("{bell}WARNING: {msg}.");
    }
}
