// SPDX-License-Identifier: Apache-2.0

//! Best-effort process memory locking, grounded in the `mlockall` call
//! in `examples/original_source/ssss.c`'s `main()`.
//!
//! Locking prevents secret-bearing pages from being written to swap.
//! Failure is a warning by default (the process proceeds unlocked); with
//! `--require-lock` it's fatal, matching the original's `-M` flag.

use std::io;

/// Outcome of attempting to lock all of the process's current and
/// future memory pages.
pub enum LockOutcome {
    Locked,
    Failed(io::Error),
}

/// Calls `mlockall(MCL_CURRENT | MCL_FUTURE)`.
pub fn lock_all() -> LockOutcome {
    // SAFETY: mlockall takes a flags bitmask and has no pointer/lifetime
    // preconditions; any failure is reported through errno.
    let rc = unsafe { libc::mlockall(libc::MCL_CURRENT | libc::MCL_FUTURE) };
    if rc == 0 {
        LockOutcome::Locked
    } else {
        LockOutcome::Failed(io::Error::last_os_error())
    }
}

/// Renders a lock failure the way the original's `switch (errno)` block
/// does, naming the specific errno case where it's informative.
pub fn describe_failure(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(libc::ENOMEM) => {
            "couldn't get memory lock (ENOMEM, try to adjust RLIMIT_MEMLOCK!)".to_string()
        }
        Some(libc::EPERM) => "couldn't get memory lock (EPERM, try running as root!)".to_string(),
        Some(libc::ENOSYS) => "couldn't get memory lock (ENOSYS, kernel doesn't allow page locking)".to_string(),
        _ => format!("couldn't get memory lock ({err})"),
    }
}
