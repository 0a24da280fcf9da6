// SPDX-License-Identifier: Apache-2.0

//! The share wire format (spec.md §5): `[token "-"] index "-" yhex`.
//!
//! Formatting pads `index` to the width of the largest index in the run
//! (`fmt_len` in the original `split()`) so shares from the same run sort
//! and scan uniformly; parsing accepts any width.

use crate::error::CodecError;
use crate::field::{FieldContext, FieldElement};

/// Longest token `ssss-combine` will accept before a share is rejected
/// outright, matching the original's `MAXTOKENLEN`.
pub const MAX_TOKEN_LEN: usize = 128;

/// One decoded share: an optional run token, the 1-based share index,
/// and the evaluated polynomial value.
pub struct Share {
    pub token: Option<String>,
    pub index: u32,
    pub y: FieldElement,
}

impl Share {
    /// Renders `token-index-yhex` (or `index-yhex` with no token),
    /// left-padding `index` with zeros to `index_width` digits.
    pub fn format(&self, ctx: &FieldContext, index_width: usize) -> String {
        let yhex = ctx.print(&self.y, true);
        match &self.token {
            Some(t) => format!("{t}-{:0width$}-{yhex}", self.index, width = index_width),
            None => format!("{:0width$}-{yhex}", self.index, width = index_width),
        }
    }

    /// Parses a share line. The grammar is left-anchored, matching the
    /// original `combine()`: the first `-` splits off the token, but only
    /// if a second `-` follows it; otherwise there is no token and the
    /// first `-` separates `index` from `yhex`. Tokens may not contain
    /// `-` themselves (spec.md §4.F).
    pub fn parse(ctx: &FieldContext, line: &str) -> Result<Self, CodecError> {
        let first = line.find('-').ok_or(CodecError::MissingSeparator)?;
        let (head, tail) = (&line[..first], &line[first + 1..]);

        let (token, index_str, yhex) = match tail.find('-') {
            Some(sep) => (Some(head), &tail[..sep], &tail[sep + 1..]),
            None => (None, head, tail),
        };

        let index: u32 = index_str.parse().map_err(|_| CodecError::InvalidIndex)?;
        if index == 0 {
            return Err(CodecError::InvalidIndex);
        }

        if let Some(t) = token {
            if t.len() > MAX_TOKEN_LEN {
                return Err(CodecError::TokenTooLong);
            }
        }

        let expected_digits = ctx.degree() as usize / 4;
        if yhex.len() != expected_digits {
            return Err(CodecError::MismatchedFieldSize);
        }
        let y = ctx.import(yhex, true).map_err(|_| CodecError::InvalidYHex)?;

        Ok(Share { token: token.map(str::to_owned), index, y })
    }

    /// The field degree implied by a share's `yhex` length, used to build
    /// the [`FieldContext`] before the rest of the line can be parsed
    /// (spec.md's "shares have different security levels" check).
    pub fn degree_of(line: &str) -> Result<u32, CodecError> {
        let first = line.find('-').ok_or(CodecError::MissingSeparator)?;
        let tail = &line[first + 1..];
        let yhex = match tail.find('-') {
            Some(sep) => &tail[sep + 1..],
            None => tail,
        };
        if yhex.is_empty() || yhex.len() % 4 != 0 || !yhex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CodecError::InvalidYHex);
        }
        Ok(yhex.len() as u32 * 4)
    }
}

/// Width (in decimal digits) needed to print every index in `1..=count`
/// with consistent left-padding, matching the original's `fmt_len` loop.
pub fn index_width(count: u32) -> usize {
    let mut fmt_len = 1;
    let mut i = count;
    while i >= 10 {
        i /= 10;
        fmt_len += 1;
    }
    fmt_len
}
