//! CTID listing and allocation.
//!
//! Allocation is `max + 1` over the host's current listing, falling back
//! to a configured floor on an empty host. Two concurrent allocators can
//! compute the same value; nothing here locks the remote registry.

use vzremote_common::error::{Result, VzRemoteError};
use vzremote_session::ExecOpts;

use crate::command;
use crate::host::VzHost;

/// Parses the newline-delimited output of `vzlist -a -1`.
///
/// Blank lines are skipped; any other non-integer token is an error.
///
/// # Errors
///
/// Returns `VzRemoteError::CtidParse` on a non-integer line.
pub fn parse_ctid_lines(output: &str) -> Result<Vec<u32>> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<u32>().map_err(|_| VzRemoteError::CtidParse {
                token: line.to_string(),
            })
        })
        .collect()
}

impl VzHost {
    /// Lists the CTIDs currently used on the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing command fails or its output
    /// contains a non-integer line.
    pub fn list_ctids(&self) -> Result<Vec<u32>> {
        let output = self.session().run(&command::build_vzlist(), &ExecOpts::quiet())?;
        parse_ctid_lines(&output.stdout)
    }

    /// Returns the next available CTID: `max + 1` over the current
    /// listing, or the configured floor when the host has no containers.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing fails.
    pub fn next_available_ctid(&self) -> Result<u32> {
        let ctids = self.list_ctids()?;
        let next = ctids
            .iter()
            .max()
            .map_or(self.ctid_floor(), |max| max + 1);
        tracing::debug!(next, "allocated CTID");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ctid_lines_basic() {
        assert_eq!(parse_ctid_lines("3\n7\n5\n").expect("parse failed"), vec![3, 7, 5]);
    }

    #[test]
    fn parse_ctid_lines_empty_output() {
        assert!(parse_ctid_lines("").expect("parse failed").is_empty());
    }

    #[test]
    fn parse_ctid_lines_skips_blank_lines() {
        assert_eq!(parse_ctid_lines("101\n\n102\n").expect("parse failed"), vec![101, 102]);
    }

    #[test]
    fn parse_ctid_lines_rejects_garbage() {
        assert!(matches!(
            parse_ctid_lines("101\nCTID\n"),
            Err(VzRemoteError::CtidParse { .. })
        ));
    }
}
