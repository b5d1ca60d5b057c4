//! `vzr ls` — List CTIDs in use on the host.

use clap::Args;
use vzremote_openvz::VzHost;

/// Arguments for the `ls` command.
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Print the CTID list as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `ls` command.
///
/// # Errors
///
/// Returns an error if the remote listing fails or contains a
/// non-integer line.
pub fn execute(host: &VzHost, args: LsArgs) -> anyhow::Result<()> {
    let ctids = host.list_ctids()?;

    if args.json {
        println!("{}", serde_json::to_string(&ctids)?);
        return Ok(());
    }

    if ctids.is_empty() {
        println!("No containers found.");
        return Ok(());
    }
    println!("{}", crate::output::render_ctid_list(&ctids));
    Ok(())
}
