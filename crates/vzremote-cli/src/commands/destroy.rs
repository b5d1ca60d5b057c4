//! `vzr destroy` — Destroy a container.

use clap::Args;
use vzremote_common::types::CtRef;
use vzremote_openvz::VzHost;

/// Arguments for the `destroy` command.
#[derive(Args, Debug)]
pub struct DestroyArgs {
    /// CTID or name of the container to destroy.
    pub container: String,
}

/// Executes the `destroy` command.
///
/// # Errors
///
/// Returns an error if the remote destruction fails.
pub fn execute(host: &VzHost, args: DestroyArgs) -> anyhow::Result<()> {
    let target = CtRef::parse(&args.container);
    let _ = host.destroy(&target)?;
    println!("Destroyed container {target}.");
    Ok(())
}
