// SPDX-License-Identifier: Apache-2.0

//! Terminal echo suppression while reading a secret or share from stdin,
//! grounded in `tcgetattr`/`tcsetattr` usage in
//! `examples/original_source/ssss.c`.
//!
//! The original toggles a process-global `termios` pair and restores it
//! explicitly on every exit path, including the `fatal()` longjmp-style
//! abort. Here that's an RAII guard instead: `TerminalGuard::suppress`
//! turns echo off and restores it in `Drop`, so a `?`-propagated error
//! unwinding past it still leaves the terminal usable.

use std::io;
use std::os::fd::RawFd;

/// Restores the stdin terminal's original echo setting when dropped.
///
/// A no-op (not an error) when stdin isn't a terminal, matching the
/// original's unchecked `tcgetattr`/`tcsetattr` calls on a non-tty fd.
pub struct TerminalGuard {
    fd: RawFd,
    original: Option<libc::termios>,
}

impl TerminalGuard {
    /// Turns off local echo on stdin and returns a guard that restores it
    /// on drop.
    pub fn suppress() -> io::Result<Self> {
        let fd = 0;
        let mut term = std::mem::MaybeUninit::<libc::termios>::uninit();
        // SAFETY: `term` is a valid out-pointer for tcgetattr's well-defined size.
        let rc = unsafe { libc::tcgetattr(fd, term.as_mut_ptr()) };
        if rc != 0 {
            // Not a terminal (e.g. piped input in tests); nothing to suppress.
            return Ok(TerminalGuard { fd, original: None });
        }
        // SAFETY: tcgetattr succeeded above, so `term` is initialized.
        let original = unsafe { term.assume_init() };
        let mut off = original;
        off.c_lflag &= !(libc::ECHO as libc::tcflag_t);
        // SAFETY: `off` is a valid, fully-initialized termios value.
        unsafe {
            libc::tcsetattr(fd, libc::TCSANOW, &off);
        }
        Ok(TerminalGuard { fd, original: Some(original) })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(original) = &self.original {
            // SAFETY: `original` was filled in by a prior successful tcgetattr.
            unsafe {
                libc::tcsetattr(self.fd, libc::TCSANOW, original);
            }
        }
    }
}
