//! `vzr restart` — Restart a container.

use clap::Args;
use vzremote_common::types::CtRef;
use vzremote_openvz::{RestartOpts, VzHost, VzOptions};

/// Arguments for the `restart` command.
#[derive(Args, Debug)]
pub struct RestartArgs {
    /// CTID or name of the container to restart.
    pub container: String,

    /// Do not wait until the container is fully up.
    #[arg(long)]
    pub no_wait: bool,

    /// Force start.
    #[arg(long)]
    pub force: bool,

    /// Skip the graceful shutdown sequence.
    #[arg(long)]
    pub fast: bool,
}

/// Executes the `restart` command.
///
/// # Errors
///
/// Returns an error if the remote restart fails.
pub fn execute(host: &VzHost, args: RestartArgs) -> anyhow::Result<()> {
    let target = CtRef::parse(&args.container);
    let opts = RestartOpts {
        wait: !args.no_wait,
        force: args.force,
        fast: args.fast,
        extra: VzOptions::new(),
    };
    let _ = host.restart(&target, &opts)?;
    println!("Restarted container {target}.");
    Ok(())
}
