//! Unified error types for the vzremote workspace.
//!
//! A single failure channel is deliberate: almost everything that can go
//! wrong here is either a local process-spawn problem or a remote command
//! reporting a non-zero exit.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum VzRemoteError {
    /// A local I/O operation failed (config file, subprocess spawn).
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path or program where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid or missing.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A remote command exited non-zero.
    #[error("remote command failed ({status}): {command}: {stderr}")]
    Remote {
        /// The command line that was executed remotely.
        command: String,
        /// Exit status reported by the remote side.
        status: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// A `vzctl status` line did not have the expected shape.
    #[error("unparseable status output: {line:?}")]
    StatusParse {
        /// The offending status line.
        line: String,
    },

    /// A line in the CTID listing was not an integer.
    #[error("unparseable CTID: {token:?}")]
    CtidParse {
        /// The offending token.
        token: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, VzRemoteError>;
