//! `vzr create` — Create a container.

use clap::Args;
use vzremote_common::types::CtRef;
use vzremote_openvz::{CreateOpts, VzHost};

/// Arguments for the `create` command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// CTID or name of the container to create.
    pub container: String,

    /// OS template to create the container from.
    #[arg(long)]
    pub ostemplate: Option<String>,

    /// Configuration profile name.
    #[arg(long)]
    pub config: Option<String>,

    /// Private area path.
    #[arg(long)]
    pub private: Option<String>,

    /// Root mount path.
    #[arg(long)]
    pub root: Option<String>,

    /// IP address to assign. Repeatable.
    #[arg(long = "ipadd")]
    pub ipadd: Vec<String>,

    /// Container hostname.
    #[arg(long)]
    pub hostname: Option<String>,

    /// Additional vzctl option as NAME=VALUE. Repeatable.
    #[arg(long = "opt", value_name = "NAME=VALUE")]
    pub opts: Vec<String>,
}

/// Executes the `create` command.
///
/// # Errors
///
/// Returns an error if the remote creation fails.
pub fn execute(host: &VzHost, args: CreateArgs) -> anyhow::Result<()> {
    let target = CtRef::parse(&args.container);
    let opts = CreateOpts {
        ostemplate: args.ostemplate,
        config: args.config,
        private: args.private,
        root: args.root,
        ipadd: args.ipadd,
        hostname: args.hostname,
        extra: super::parse_params(&args.opts)?,
    };
    let _ = host.create(&target, &opts)?;
    println!("Created container {target}.");
    Ok(())
}
