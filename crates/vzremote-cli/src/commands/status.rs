//! `vzr status` — Show the status of a container.

use clap::Args;
use vzremote_common::types::CtRef;
use vzremote_openvz::{VzHost, VzStatus};

/// Arguments for the `status` command.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// CTID or name of the container.
    pub container: String,

    /// Print the parsed status as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `status` command.
///
/// The query tolerates a failing remote command (unknown container) and
/// prints whatever the tool reported.
///
/// # Errors
///
/// Returns an error if the session fails or, with `--json`, the status
/// line cannot be parsed.
pub fn execute(host: &VzHost, args: StatusArgs) -> anyhow::Result<()> {
    let target = CtRef::parse(&args.container);
    let output = host.status(&target)?;

    if args.json {
        let status = VzStatus::parse(&output.stdout)?;
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    match VzStatus::parse(&output.stdout) {
        Ok(status) => println!("{}", crate::output::render_status(&status)),
        // Tool output that does not match the conventional five-field
        // layout is shown as-is rather than dropped.
        Err(_) => println!("{}", output.stdout.trim_end()),
    }
    Ok(())
}
