//! Local session backend.
//!
//! Runs commands on the current host through `sh -c`. Useful when the
//! tool is invoked directly on the OpenVZ host rather than from a
//! management machine.

use std::process::Command;

use vzremote_common::error::{Result, VzRemoteError};

use crate::session::{self, ExecOpts, RemoteOutput, RemoteSession};

/// Session that runs commands on the local host.
#[derive(Debug, Clone, Default)]
pub struct LocalSession;

impl LocalSession {
    /// Creates a new local session.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RemoteSession for LocalSession {
    fn run(&self, command: &str, opts: &ExecOpts) -> Result<RemoteOutput> {
        if opts.quiet {
            tracing::debug!(command, "local run");
        } else {
            tracing::info!(command, "local run");
        }

        let output = if opts.elevated {
            Command::new("sudo").args(["-n", "sh", "-c", command]).output()
        } else {
            Command::new("sh").args(["-c", command]).output()
        }
        .map_err(|e| VzRemoteError::Io {
            path: if opts.elevated { "sudo" } else { "sh" }.into(),
            source: e,
        })?;

        session::finish(command, output, opts)
    }

    fn is_available(&self) -> bool {
        which::which("sh").is_ok()
    }

    fn target(&self) -> String {
        "localhost".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unelevated_echo_captures_stdout() {
        let session = LocalSession::new();
        let opts = ExecOpts {
            elevated: false,
            ..ExecOpts::default()
        };
        let output = session.run("echo hello", &opts).expect("run failed");
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.succeeded());
    }

    #[test]
    fn failing_command_is_an_error_by_default() {
        let session = LocalSession::new();
        let opts = ExecOpts {
            elevated: false,
            ..ExecOpts::default()
        };
        assert!(session.run("exit 3", &opts).is_err());
    }

    #[test]
    fn failing_command_tolerated_with_warn_only() {
        let session = LocalSession::new();
        let opts = ExecOpts {
            elevated: false,
            warn_only: true,
            quiet: true,
        };
        let output = session.run("exit 3", &opts).expect("run failed");
        assert!(!output.succeeded());
        assert_eq!(output.status, 3);
    }

    #[test]
    fn local_session_target_is_localhost() {
        assert_eq!(LocalSession::new().target(), "localhost");
    }
}
