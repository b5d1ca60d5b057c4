//! OpenVZ container management over a remote session.
//!
//! Every operation here is a string-formatting pass over typed options
//! followed by a single remote command execution through
//! [`vzremote_session::RemoteSession`]. No container state is held
//! locally; the remote host's registry is the only source of truth.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod args;
pub mod command;
pub mod ctid;
pub mod host;
pub mod status;
pub mod template;

pub use args::{OptValue, VzOptions};
pub use host::{CreateOpts, RestartOpts, SetOpts, StartOpts, StopOpts, VzHost};
pub use status::VzStatus;
pub use template::TemplateSource;
