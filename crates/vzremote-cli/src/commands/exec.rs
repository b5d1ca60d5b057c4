//! `vzr exec` — Run a command inside a container.

use clap::Args;
use vzremote_common::types::CtRef;
use vzremote_openvz::VzHost;

/// Arguments for the `exec` command.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// CTID or name of the container.
    pub container: String,

    /// Command to run inside the container.
    #[arg(trailing_var_arg = true, required = true)]
    pub command: Vec<String>,
}

/// Executes the `exec` command.
///
/// The command tokens are joined with spaces and interpreted by the
/// shell inside the container.
///
/// # Errors
///
/// Returns an error if the remote execution fails, including a non-zero
/// exit of the command inside the container.
pub fn execute(host: &VzHost, args: ExecArgs) -> anyhow::Result<()> {
    let target = CtRef::parse(&args.container);
    let output = host.exec(&target, &args.command.join(" "))?;

    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        #[allow(clippy::print_stderr)]
        {
            eprint!("{}", output.stderr);
        }
    }
    Ok(())
}
