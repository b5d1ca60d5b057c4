//! `vzr set` — Set container parameters.

use clap::Args;
use vzremote_common::types::CtRef;
use vzremote_openvz::{SetOpts, VzHost};

/// Arguments for the `set` command.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// CTID or name of the container.
    pub container: String,

    /// Parameter to set, as NAME=VALUE. Repeatable.
    #[arg(long = "param", value_name = "NAME=VALUE", required = true)]
    pub params: Vec<String>,

    /// Apply without persisting to the container config.
    #[arg(long)]
    pub no_save: bool,
}

/// Executes the `set` command.
///
/// # Errors
///
/// Returns an error if a parameter is malformed or the remote command
/// fails.
pub fn execute(host: &VzHost, args: SetArgs) -> anyhow::Result<()> {
    let target = CtRef::parse(&args.container);
    let opts = SetOpts {
        save: !args.no_save,
        extra: super::parse_params(&args.params)?,
    };
    let _ = host.set(&target, &opts)?;
    println!("Updated container {target}.");
    Ok(())
}
