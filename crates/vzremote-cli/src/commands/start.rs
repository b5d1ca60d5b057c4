//! `vzr start` — Start a container.

use clap::Args;
use vzremote_common::types::CtRef;
use vzremote_openvz::{StartOpts, VzHost, VzOptions};

/// Arguments for the `start` command.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// CTID or name of the container to start.
    pub container: String,

    /// Wait until the container is fully up.
    #[arg(long)]
    pub wait: bool,

    /// Force start.
    #[arg(long)]
    pub force: bool,
}

/// Executes the `start` command.
///
/// # Errors
///
/// Returns an error if the remote start fails.
pub fn execute(host: &VzHost, args: StartArgs) -> anyhow::Result<()> {
    let target = CtRef::parse(&args.container);
    let opts = StartOpts {
        wait: args.wait,
        force: args.force,
        extra: VzOptions::new(),
    };
    let _ = host.start(&target, &opts)?;
    println!("Started container {target}.");
    Ok(())
}
