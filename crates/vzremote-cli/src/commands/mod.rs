//! CLI command definitions and dispatch.

pub mod create;
pub mod ctid;
pub mod destroy;
pub mod exec;
pub mod ls;
pub mod restart;
pub mod set;
pub mod start;
pub mod status;
pub mod stop;
pub mod template;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vzremote_common::config::VzRemoteConfig;
use vzremote_openvz::{VzHost, VzOptions};
use vzremote_session::{LocalSession, RemoteSession, SshSession};

/// vzremote — manage OpenVZ containers on a remote host.
#[derive(Parser, Debug)]
#[command(name = "vzr", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// OpenVZ host to manage.
    #[arg(long, global = true, env = "VZREMOTE_HOST")]
    pub host: Option<String>,

    /// Remote user to connect as.
    #[arg(long, global = true, env = "VZREMOTE_USER")]
    pub user: Option<String>,

    /// SSH port on the remote host.
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Private key file for SSH authentication.
    #[arg(long, global = true)]
    pub identity: Option<PathBuf>,

    /// Run vzctl on this machine instead of over SSH.
    #[arg(long, global = true)]
    pub local: bool,

    /// Path to a JSON config file.
    #[arg(long = "config-file", global = true)]
    pub config_file: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a container.
    Create(create::CreateArgs),
    /// Destroy a container.
    Destroy(destroy::DestroyArgs),
    /// Set container parameters.
    Set(set::SetArgs),
    /// Start a container.
    Start(start::StartArgs),
    /// Stop a container.
    Stop(stop::StopArgs),
    /// Restart a container.
    Restart(restart::RestartArgs),
    /// Show the status of a container.
    Status(status::StatusArgs),
    /// Run a command inside a container.
    Exec(exec::ExecArgs),
    /// List CTIDs in use on the host.
    Ls(ls::LsArgs),
    /// Print the next available CTID.
    Ctid(ctid::CtidArgs),
    /// Download an OS template into the host's template cache.
    Template(template::TemplateArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if configuration resolution, session setup, or the
/// command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let host = build_host(&cli, &config)?;

    match cli.command {
        Command::Create(args) => create::execute(&host, args),
        Command::Destroy(args) => destroy::execute(&host, args),
        Command::Set(args) => set::execute(&host, args),
        Command::Start(args) => start::execute(&host, args),
        Command::Stop(args) => stop::execute(&host, args),
        Command::Restart(args) => restart::execute(&host, args),
        Command::Status(args) => status::execute(&host, args),
        Command::Exec(args) => exec::execute(&host, args),
        Command::Ls(args) => ls::execute(&host, args),
        Command::Ctid(args) => ctid::execute(&host, args),
        Command::Template(args) => template::execute(&host, args),
    }
}

/// Loads the config file (explicit path, or the default location when it
/// exists) and overlays the global CLI flags on top.
fn resolve_config(cli: &Cli) -> anyhow::Result<VzRemoteConfig> {
    let mut config = if let Some(path) = &cli.config_file {
        VzRemoteConfig::load(path)?
    } else {
        match vzremote_common::constants::default_config_file() {
            Some(path) if path.exists() => VzRemoteConfig::load(&path)?,
            _ => VzRemoteConfig::default(),
        }
    };

    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(user) = &cli.user {
        config.user = user.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(identity) = &cli.identity {
        config.identity_file = Some(identity.clone());
    }
    Ok(config)
}

/// Builds the host handle over the selected session backend.
fn build_host(cli: &Cli, config: &VzRemoteConfig) -> anyhow::Result<VzHost> {
    let session: Box<dyn RemoteSession> = if cli.local {
        Box::new(LocalSession::new())
    } else {
        Box::new(SshSession::from_config(config)?)
    };
    if !session.is_available() {
        anyhow::bail!("transport for {} is not available on this machine", session.target());
    }
    tracing::debug!(target = %session.target(), "session ready");
    Ok(VzHost::with_config(session, config))
}

/// Parses repeated `NAME=VALUE` arguments into pass-through options.
///
/// # Errors
///
/// Returns an error on an argument without `=`.
pub fn parse_params(params: &[String]) -> anyhow::Result<VzOptions> {
    let mut opts = VzOptions::new();
    for param in params {
        let (name, value) = param
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected NAME=VALUE, got {param:?}"))?;
        opts.push_scalar(name, value);
    }
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_params_builds_scalars_in_order() {
        let opts = parse_params(&["hostname=web01".into(), "diskspace=10G".into()])
            .expect("parse failed");
        assert_eq!(
            opts.expand(),
            vec!["--hostname", "web01", "--diskspace", "10G"]
        );
    }

    #[test]
    fn parse_params_rejects_missing_equals() {
        assert!(parse_params(&["hostname".into()]).is_err());
    }

    #[test]
    fn parse_params_keeps_equals_in_value() {
        let opts = parse_params(&["features=nfs:on".into()]).expect("parse failed");
        assert_eq!(opts.expand(), vec!["--features", "nfs:on"]);
    }
}
