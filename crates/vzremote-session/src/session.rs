//! Session abstraction for executing commands on a managed host.

use vzremote_common::error::{Result, VzRemoteError};

/// Per-call execution options.
///
/// The original tooling scoped these as an ambient context around a single
/// call; here they are explicit arguments so every operation names its own
/// tolerance.
#[derive(Debug, Clone)]
pub struct ExecOpts {
    /// Run the command under `sudo -n` on the target host.
    pub elevated: bool,
    /// Treat a non-zero remote exit as an in-band result instead of an
    /// error; the caller inspects [`RemoteOutput::succeeded`].
    pub warn_only: bool,
    /// Demote per-command echo logging to debug level.
    pub quiet: bool,
}

impl Default for ExecOpts {
    fn default() -> Self {
        Self {
            elevated: true,
            warn_only: false,
            quiet: false,
        }
    }
}

impl ExecOpts {
    /// Options for calls that tolerate remote failure (`status`).
    #[must_use]
    pub fn tolerant() -> Self {
        Self {
            warn_only: true,
            ..Self::default()
        }
    }

    /// Options for silent probes (`exists`): tolerant and unechoed.
    #[must_use]
    pub fn probe() -> Self {
        Self {
            warn_only: true,
            quiet: true,
            ..Self::default()
        }
    }

    /// Options for listing calls whose output is consumed, not shown.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }
}

/// Captured result of one remote command.
#[derive(Debug, Clone)]
pub struct RemoteOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Exit status of the remote command (`-1` if terminated by signal).
    pub status: i32,
}

impl RemoteOutput {
    /// Whether the remote command exited zero.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status == 0
    }
}

/// A session against a managed host.
///
/// Implementors run a single shell command string and capture its output.
/// Each call is independent: there is no connection state to maintain and
/// no ordering guarantee between calls.
pub trait RemoteSession: Send + Sync {
    /// Runs a command on the target host.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned, or if it exits
    /// non-zero and `opts.warn_only` is false.
    fn run(&self, command: &str, opts: &ExecOpts) -> Result<RemoteOutput>;

    /// Returns whether this session can operate in the current environment.
    fn is_available(&self) -> bool;

    /// Human-readable description of the target, for log and CLI output.
    fn target(&self) -> String;
}

/// Converts a finished [`std::process::Output`] into a [`RemoteOutput`],
/// applying the `warn_only` policy.
///
/// # Errors
///
/// Returns `VzRemoteError::Remote` if the command exited non-zero and
/// `opts.warn_only` is false.
pub(crate) fn finish(
    command: &str,
    output: std::process::Output,
    opts: &ExecOpts,
) -> Result<RemoteOutput> {
    let result = RemoteOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        status: output.status.code().unwrap_or(-1),
    };

    if opts.quiet {
        tracing::debug!(command, status = result.status, "remote command finished");
    } else {
        tracing::info!(command, status = result.status, "remote command finished");
    }

    if !result.succeeded() && !opts.warn_only {
        return Err(VzRemoteError::Remote {
            command: command.to_string(),
            status: result.status,
            stderr: result.stderr.trim().to_string(),
        });
    }
    Ok(result)
}
