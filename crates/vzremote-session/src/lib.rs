//! Remote command execution for the vzremote workspace.
//!
//! Everything above this crate deals in command *strings*; this crate is
//! the only place that actually spawns processes. The [`RemoteSession`]
//! trait is the seam: production code talks to an OpenVZ host through
//! [`SshSession`] (or [`LocalSession`] when running on the host itself),
//! tests inject a scripted implementation.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod local;
pub mod session;
pub mod ssh;

pub use local::LocalSession;
pub use session::{ExecOpts, RemoteOutput, RemoteSession};
pub use ssh::SshSession;
