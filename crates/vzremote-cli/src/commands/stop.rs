//! `vzr stop` — Stop a container.

use clap::Args;
use vzremote_common::types::CtRef;
use vzremote_openvz::{StopOpts, VzHost, VzOptions};

/// Arguments for the `stop` command.
#[derive(Args, Debug)]
pub struct StopArgs {
    /// CTID or name of the container to stop.
    pub container: String,

    /// Skip the graceful shutdown sequence.
    #[arg(long)]
    pub fast: bool,
}

/// Executes the `stop` command.
///
/// # Errors
///
/// Returns an error if the remote stop fails.
pub fn execute(host: &VzHost, args: StopArgs) -> anyhow::Result<()> {
    let target = CtRef::parse(&args.container);
    let opts = StopOpts {
        fast: args.fast,
        extra: VzOptions::new(),
    };
    let _ = host.stop(&target, &opts)?;
    println!("Stopped container {target}.");
    Ok(())
}
