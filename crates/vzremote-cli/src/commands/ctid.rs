//! `vzr ctid` — Print the next available CTID.

use clap::Args;
use vzremote_openvz::VzHost;

/// Arguments for the `ctid` command.
#[derive(Args, Debug)]
pub struct CtidArgs {}

/// Executes the `ctid` command.
///
/// The returned value is advisory: another actor can claim it between
/// this call and the subsequent `create`.
///
/// # Errors
///
/// Returns an error if the remote listing fails.
pub fn execute(host: &VzHost, _args: CtidArgs) -> anyhow::Result<()> {
    println!("{}", host.next_available_ctid()?);
    Ok(())
}
