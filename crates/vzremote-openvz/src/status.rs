//! Status queries and predicates.
//!
//! `vzctl status` conventionally prints one line:
//!
//! ```text
//! CTID 101 exist mounted running
//! ```
//!
//! The run-state token is the fifth whitespace-delimited field. That is a
//! positional contract with the installed tool version, observed rather
//! than guaranteed; a line with fewer fields is surfaced as a structured
//! parse error instead of a guess.

use serde::Serialize;

use vzremote_common::error::{Result, VzRemoteError};
use vzremote_common::types::{CtRef, RunState};
use vzremote_session::{ExecOpts, RemoteOutput};

use crate::args::VzOptions;
use crate::host::VzHost;

/// Field index of the run-state token in a status line.
const RUN_STATE_FIELD: usize = 4;

/// Typed view over one `vzctl status` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VzStatus {
    /// CTID echoed by the tool.
    pub ctid: String,
    /// Whether the container exists (`exist` vs `deleted`).
    pub exists: bool,
    /// Whether the private area is mounted (`mounted` vs `umounted`).
    pub mounted: bool,
    /// Run state token.
    pub state: RunState,
}

impl VzStatus {
    /// Parses the conventional five-field status line.
    ///
    /// # Errors
    ///
    /// Returns `VzRemoteError::StatusParse` if the line has fewer than
    /// five fields.
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() <= RUN_STATE_FIELD {
            return Err(VzRemoteError::StatusParse {
                line: line.to_string(),
            });
        }
        Ok(Self {
            ctid: fields[1].to_string(),
            exists: fields[2] == "exist",
            mounted: fields[3] == "mounted",
            state: RunState::from_token(fields[RUN_STATE_FIELD]),
        })
    }
}

/// Extracts the raw run-state token from a status line.
///
/// # Errors
///
/// Returns `VzRemoteError::StatusParse` if the line has fewer than five
/// whitespace-delimited fields.
pub fn run_state_token(line: &str) -> Result<&str> {
    line.split_whitespace()
        .nth(RUN_STATE_FIELD)
        .ok_or_else(|| VzRemoteError::StatusParse {
            line: line.to_string(),
        })
}

impl VzHost {
    /// Queries the raw status of a container.
    ///
    /// Executed with failure tolerance: a non-zero remote exit (container
    /// unknown to `vzctl`) still yields the captured output.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot spawn the command.
    pub fn status(&self, target: &CtRef) -> Result<RemoteOutput> {
        self.vzctl("status", target, &VzOptions::new(), &ExecOpts::tolerant())
    }

    /// Whether the container is running.
    ///
    /// True iff the fifth whitespace-delimited field of the status output
    /// is exactly `running`.
    ///
    /// # Errors
    ///
    /// Returns an error if the status query fails to spawn or the output
    /// cannot be parsed.
    pub fn running(&self, target: &CtRef) -> Result<bool> {
        let output = self.status(target)?;
        Ok(run_state_token(&output.stdout)? == "running")
    }

    /// Whether the container exists on the host.
    ///
    /// Reflects only the status command's exit flag; the output text is
    /// ignored. Executed quietly so probe loops do not flood the log.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot spawn the command.
    pub fn exists(&self, target: &CtRef) -> Result<bool> {
        let output = self.vzctl("status", target, &VzOptions::new(), &ExecOpts::probe())?;
        Ok(output.succeeded())
    }
}
