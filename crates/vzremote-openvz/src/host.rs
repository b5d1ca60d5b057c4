//! Container lifecycle operations against a managed OpenVZ host.

use vzremote_common::config::VzRemoteConfig;
use vzremote_common::error::Result;
use vzremote_common::types::CtRef;
use vzremote_session::{ExecOpts, RemoteOutput, RemoteSession};

use crate::args::VzOptions;
use crate::command;

/// Options for `vzctl create`.
///
/// The named fields cover the options the tool is commonly driven with;
/// anything else goes through `extra`, which is appended after them in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct CreateOpts {
    /// OS template to create the container from.
    pub ostemplate: Option<String>,
    /// Configuration profile name (`--config`).
    pub config: Option<String>,
    /// Private area path.
    pub private: Option<String>,
    /// Root mount path.
    pub root: Option<String>,
    /// IP addresses to assign, one `--ipadd` per entry.
    pub ipadd: Vec<String>,
    /// Container hostname.
    pub hostname: Option<String>,
    /// Additional pass-through options.
    pub extra: VzOptions,
}

impl CreateOpts {
    fn to_options(&self) -> VzOptions {
        let mut opts = VzOptions::new();
        opts.push_scalar_opt("ostemplate", self.ostemplate.as_deref());
        opts.push_scalar_opt("config", self.config.as_deref());
        opts.push_scalar_opt("private", self.private.as_deref());
        opts.push_scalar_opt("root", self.root.as_deref());
        if !self.ipadd.is_empty() {
            opts.push_list("ipadd", self.ipadd.iter().cloned());
        }
        opts.push_scalar_opt("hostname", self.hostname.as_deref());
        opts.extend(self.extra.clone());
        opts
    }
}

/// Options for `vzctl set`.
#[derive(Debug, Clone)]
pub struct SetOpts {
    /// Persist the change to the container config (`--save`).
    pub save: bool,
    /// Parameters to set, as pass-through options.
    pub extra: VzOptions,
}

impl Default for SetOpts {
    fn default() -> Self {
        Self {
            save: true,
            extra: VzOptions::new(),
        }
    }
}

impl SetOpts {
    fn to_options(&self) -> VzOptions {
        let mut opts = VzOptions::new();
        opts.push_switch("save", self.save);
        opts.extend(self.extra.clone());
        opts
    }
}

/// Options for `vzctl start`.
///
/// `wait` is known to hang with vzctl 3.0.24 on Debian squeeze; it stays
/// off unless explicitly requested.
#[derive(Debug, Clone, Default)]
pub struct StartOpts {
    /// Wait until the container is fully up (`--wait`).
    pub wait: bool,
    /// Force start (`--force`).
    pub force: bool,
    /// Additional pass-through options.
    pub extra: VzOptions,
}

/// Options for `vzctl stop`.
#[derive(Debug, Clone, Default)]
pub struct StopOpts {
    /// Skip the graceful shutdown sequence (`--fast`).
    pub fast: bool,
    /// Additional pass-through options.
    pub extra: VzOptions,
}

/// Options for `vzctl restart`.
#[derive(Debug, Clone)]
pub struct RestartOpts {
    /// Wait until the container is fully up (`--wait`).
    pub wait: bool,
    /// Force start (`--force`).
    pub force: bool,
    /// Skip the graceful shutdown sequence (`--fast`).
    pub fast: bool,
    /// Additional pass-through options.
    pub extra: VzOptions,
}

impl Default for RestartOpts {
    fn default() -> Self {
        Self {
            wait: true,
            force: false,
            fast: false,
            extra: VzOptions::new(),
        }
    }
}

/// A managed OpenVZ host.
///
/// Owns the session it talks through; every operation is one remote
/// command, stateless and blocking.
pub struct VzHost {
    session: Box<dyn RemoteSession>,
    ctid_floor: u32,
    template_cache_dir: String,
}

impl VzHost {
    /// Creates a host handle over the given session with default
    /// allocation settings.
    #[must_use]
    pub fn new(session: Box<dyn RemoteSession>) -> Self {
        Self {
            session,
            ctid_floor: vzremote_common::constants::DEFAULT_CTID_FLOOR,
            template_cache_dir: vzremote_common::constants::TEMPLATE_CACHE_DIR.to_string(),
        }
    }

    /// Creates a host handle, taking allocation settings from a config.
    #[must_use]
    pub fn with_config(session: Box<dyn RemoteSession>, config: &VzRemoteConfig) -> Self {
        Self {
            session,
            ctid_floor: config.ctid_floor,
            template_cache_dir: config.template_cache_dir.clone(),
        }
    }

    /// Returns the session this host talks through.
    #[must_use]
    pub fn session(&self) -> &dyn RemoteSession {
        self.session.as_ref()
    }

    /// CTID handed out by the allocator when the host has no containers.
    #[must_use]
    pub fn ctid_floor(&self) -> u32 {
        self.ctid_floor
    }

    /// Remote directory templates are downloaded into.
    #[must_use]
    pub fn template_cache_dir(&self) -> &str {
        &self.template_cache_dir
    }

    /// Runs a `vzctl` verb against a target.
    pub(crate) fn vzctl(
        &self,
        verb: &str,
        target: &CtRef,
        options: &VzOptions,
        exec_opts: &ExecOpts,
    ) -> Result<RemoteOutput> {
        let command = command::build_vzctl(verb, target, options);
        tracing::debug!(verb, target = %target, "vzctl");
        self.session.run(&command, exec_opts)
    }

    /// Creates a container.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    pub fn create(&self, target: &CtRef, opts: &CreateOpts) -> Result<RemoteOutput> {
        self.vzctl("create", target, &opts.to_options(), &ExecOpts::default())
    }

    /// Destroys a container.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    pub fn destroy(&self, target: &CtRef) -> Result<RemoteOutput> {
        self.vzctl("destroy", target, &VzOptions::new(), &ExecOpts::default())
    }

    /// Sets container parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    pub fn set(&self, target: &CtRef, opts: &SetOpts) -> Result<RemoteOutput> {
        self.vzctl("set", target, &opts.to_options(), &ExecOpts::default())
    }

    /// Starts a container.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    pub fn start(&self, target: &CtRef, opts: &StartOpts) -> Result<RemoteOutput> {
        let mut options = VzOptions::new();
        options.push_switch("wait", opts.wait);
        options.push_switch("force", opts.force);
        options.extend(opts.extra.clone());
        self.vzctl("start", target, &options, &ExecOpts::default())
    }

    /// Stops a container.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    pub fn stop(&self, target: &CtRef, opts: &StopOpts) -> Result<RemoteOutput> {
        let mut options = VzOptions::new();
        options.push_switch("fast", opts.fast);
        options.extend(opts.extra.clone());
        self.vzctl("stop", target, &options, &ExecOpts::default())
    }

    /// Restarts a container.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails.
    pub fn restart(&self, target: &CtRef, opts: &RestartOpts) -> Result<RemoteOutput> {
        let mut options = VzOptions::new();
        options.push_switch("wait", opts.wait);
        options.push_switch("force", opts.force);
        options.push_switch("fast", opts.fast);
        options.extend(opts.extra.clone());
        self.vzctl("restart", target, &options, &ExecOpts::default())
    }

    /// Runs a command inside a container via `vzctl exec2`.
    ///
    /// The command string is passed through verbatim and interpreted by
    /// the shell inside the container.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote command fails (including a non-zero
    /// exit of the command inside the container).
    pub fn exec(&self, target: &CtRef, command: &str) -> Result<RemoteOutput> {
        let line = format!(
            "{} exec2 {} {}",
            vzremote_common::constants::VZCTL_BIN,
            target,
            command
        );
        self.session.run(&line, &ExecOpts::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_opts_expand_in_declared_order() {
        let opts = CreateOpts {
            ostemplate: Some("debian-7.0-x86_64".into()),
            ipadd: vec!["10.0.0.3".into(), "10.0.0.4".into()],
            hostname: Some("web01".into()),
            ..CreateOpts::default()
        };
        assert_eq!(
            opts.to_options().expand(),
            vec![
                "--ostemplate",
                "debian-7.0-x86_64",
                "--ipadd",
                "10.0.0.3",
                "--ipadd",
                "10.0.0.4",
                "--hostname",
                "web01",
            ]
        );
    }

    #[test]
    fn create_opts_empty_expand_to_nothing() {
        assert!(CreateOpts::default().to_options().expand().is_empty());
    }

    #[test]
    fn set_opts_save_on_by_default() {
        assert_eq!(SetOpts::default().to_options().expand(), vec!["--save"]);
    }

    #[test]
    fn restart_opts_wait_on_by_default() {
        let opts = RestartOpts::default();
        assert!(opts.wait);
        assert!(!opts.force);
        assert!(!opts.fast);
    }
}
