//! `vzr template` — Download an OS template into the host's cache.

use clap::Args;
use vzremote_openvz::{TemplateSource, VzHost};

/// Arguments for the `template` command.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Name of a precreated template (fetched from the official
    /// download site).
    #[arg(required_unless_present = "url", conflicts_with = "url")]
    pub name: Option<String>,

    /// Fetch from an explicit URL instead.
    #[arg(long)]
    pub url: Option<String>,
}

/// Executes the `template` command.
///
/// # Errors
///
/// Returns an error if the remote fetch fails.
pub fn execute(host: &VzHost, args: TemplateArgs) -> anyhow::Result<()> {
    let source = match (args.name, args.url) {
        (_, Some(url)) => TemplateSource::Url(url),
        (Some(name), None) => TemplateSource::Name(name),
        (None, None) => anyhow::bail!("either a template name or --url is required"),
    };
    let url = source.url();
    let _ = host.download_template(&source)?;
    println!("Downloaded {url} into {}.", host.template_cache_dir());
    Ok(())
}
