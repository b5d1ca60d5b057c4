//! OS template download onto the managed host.
//!
//! Templates are fetched by the *remote* host with `wget` into its
//! template cache; nothing is transferred through the local machine.

use vzremote_common::constants::TEMPLATE_BASE_URL;
use vzremote_common::error::Result;
use vzremote_session::{ExecOpts, RemoteOutput};

use crate::host::VzHost;

/// Where to fetch a template from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A precreated template by name; the URL is derived from the
    /// official download site.
    Name(String),
    /// An explicit URL.
    Url(String),
}

impl TemplateSource {
    /// Resolves the source to the URL the remote host will fetch.
    #[must_use]
    pub fn url(&self) -> String {
        match self {
            Self::Name(name) => format!("{TEMPLATE_BASE_URL}/{name}.tar.gz"),
            Self::Url(url) => url.clone(),
        }
    }
}

impl VzHost {
    /// Downloads an OS template into the host's template cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote fetch fails.
    pub fn download_template(&self, source: &TemplateSource) -> Result<RemoteOutput> {
        let url = source.url();
        let command = format!(
            "cd {} && wget --progress=dot \"{url}\"",
            self.template_cache_dir()
        );
        tracing::info!(url, "downloading template");
        self.session().run(&command, &ExecOpts::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_template_url_derives_from_download_site() {
        let source = TemplateSource::Name("debian-7.0-x86_64".into());
        assert_eq!(
            source.url(),
            "http://download.openvz.org/template/precreated/debian-7.0-x86_64.tar.gz"
        );
    }

    #[test]
    fn explicit_url_passes_through() {
        let source = TemplateSource::Url("http://mirror.local/t.tar.gz".into());
        assert_eq!(source.url(), "http://mirror.local/t.tar.gz");
    }
}
