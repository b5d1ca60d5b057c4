//! SSH session backend.
//!
//! Delegates transport entirely to the system `ssh` binary: one process
//! per command, no multiplexing, no connection reuse. `BatchMode` keeps
//! the subprocess from blocking on an interactive password prompt.

use std::path::PathBuf;
use std::process::Command;

use vzremote_common::config::VzRemoteConfig;
use vzremote_common::error::{Result, VzRemoteError};

use crate::session::{self, ExecOpts, RemoteOutput, RemoteSession};

/// Session that reaches the OpenVZ host over SSH.
#[derive(Debug, Clone)]
pub struct SshSession {
    host: String,
    user: String,
    port: u16,
    identity_file: Option<PathBuf>,
}

impl SshSession {
    /// Creates a session for `user@host` on the default port.
    #[must_use]
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            port: vzremote_common::constants::DEFAULT_SSH_PORT,
            identity_file: None,
        }
    }

    /// Creates a session from a host configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has no host set.
    pub fn from_config(config: &VzRemoteConfig) -> Result<Self> {
        if config.host.is_empty() {
            return Err(VzRemoteError::Config {
                message: "no remote host configured (set --host or the config file)".into(),
            });
        }
        Ok(Self {
            host: config.host.clone(),
            user: config.user.clone(),
            port: config.port,
            identity_file: config.identity_file.clone(),
        })
    }

    /// Overrides the SSH port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a private key file for authentication.
    #[must_use]
    pub fn with_identity_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity_file = Some(path.into());
        self
    }

    /// Builds the argument vector passed to the `ssh` binary.
    ///
    /// The remote command is a single argument; `ssh` hands it to the
    /// remote shell verbatim, so no quoting is applied here either.
    fn argv(&self, command: &str, elevated: bool) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-p".to_string(),
            self.port.to_string(),
        ];
        if let Some(identity) = &self.identity_file {
            args.push("-i".to_string());
            args.push(identity.to_string_lossy().into_owned());
        }
        args.push(format!("{}@{}", self.user, self.host));
        args.push("--".to_string());
        if elevated && self.user != "root" {
            args.push(format!("sudo -n {command}"));
        } else {
            args.push(command.to_string());
        }
        args
    }
}

impl RemoteSession for SshSession {
    fn run(&self, command: &str, opts: &ExecOpts) -> Result<RemoteOutput> {
        if opts.quiet {
            tracing::debug!(target = %self.target(), command, "ssh run");
        } else {
            tracing::info!(target = %self.target(), command, "ssh run");
        }

        let output = Command::new("ssh")
            .args(self.argv(command, opts.elevated))
            .output()
            .map_err(|e| VzRemoteError::Io {
                path: "ssh".into(),
                source: e,
            })?;

        session::finish(command, output, opts)
    }

    fn is_available(&self) -> bool {
        which::which("ssh").is_ok()
    }

    fn target(&self) -> String {
        format!("{}@{}:{}", self.user, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_default_port_and_user() {
        let session = SshSession::new("vz1.example.com", "root");
        let argv = session.argv("vzctl status 101", true);
        assert_eq!(
            argv,
            vec![
                "-o",
                "BatchMode=yes",
                "-p",
                "22",
                "root@vz1.example.com",
                "--",
                "vzctl status 101",
            ]
        );
    }

    #[test]
    fn argv_non_root_elevated_prefixes_sudo() {
        let session = SshSession::new("vz1.example.com", "admin");
        let argv = session.argv("vzlist -a -1", true);
        assert_eq!(argv.last().map(String::as_str), Some("sudo -n vzlist -a -1"));
    }

    #[test]
    fn argv_unelevated_passes_command_verbatim() {
        let session = SshSession::new("vz1.example.com", "admin");
        let argv = session.argv("vzlist -a -1", false);
        assert_eq!(argv.last().map(String::as_str), Some("vzlist -a -1"));
    }

    #[test]
    fn argv_includes_identity_file_when_set() {
        let session =
            SshSession::new("vz1.example.com", "root").with_identity_file("/home/ops/.ssh/vz");
        let argv = session.argv("true", false);
        assert!(argv.contains(&"-i".to_string()));
        assert!(argv.contains(&"/home/ops/.ssh/vz".to_string()));
    }

    #[test]
    fn argv_custom_port() {
        let session = SshSession::new("vz1.example.com", "root").with_port(2222);
        let argv = session.argv("true", false);
        assert!(argv.windows(2).any(|w| w[0] == "-p" && w[1] == "2222"));
    }

    #[test]
    fn from_config_without_host_is_error() {
        let config = VzRemoteConfig::default();
        assert!(SshSession::from_config(&config).is_err());
    }

    #[test]
    fn target_renders_endpoint() {
        let session = SshSession::new("vz1.example.com", "root").with_port(2222);
        assert_eq!(session.target(), "root@vz1.example.com:2222");
    }
}
