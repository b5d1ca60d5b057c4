//! Assembly of remote `vzctl`/`vzlist` command lines.

use vzremote_common::constants::{VZCTL_BIN, VZLIST_BIN};
use vzremote_common::types::CtRef;

use crate::args::VzOptions;

/// Builds a `vzctl <verb> <target> [flags]` command line.
///
/// Tokens are joined with single spaces; an empty option set yields no
/// trailing whitespace.
#[must_use]
pub fn build_vzctl(verb: &str, target: &CtRef, options: &VzOptions) -> String {
    let mut parts = vec![VZCTL_BIN.to_string(), verb.to_string(), target.to_string()];
    parts.extend(options.expand());
    parts.join(" ")
}

/// Builds the command line listing all CTIDs, one per line.
#[must_use]
pub fn build_vzlist() -> String {
    format!("{VZLIST_BIN} -a -1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vzctl_with_options() {
        let mut opts = VzOptions::new();
        opts.push_switch("wait", false);
        opts.push_switch("force", true);
        assert_eq!(
            build_vzctl("start", &CtRef::Ctid(101), &opts),
            "vzctl start 101 --force"
        );
    }

    #[test]
    fn vzctl_without_options_has_no_trailing_space() {
        assert_eq!(
            build_vzctl("destroy", &CtRef::Ctid(101), &VzOptions::new()),
            "vzctl destroy 101"
        );
    }

    #[test]
    fn vzctl_accepts_container_name_target() {
        assert_eq!(
            build_vzctl("status", &CtRef::Name("web01".into()), &VzOptions::new()),
            "vzctl status web01"
        );
    }

    #[test]
    fn vzlist_lists_all_ctids() {
        assert_eq!(build_vzlist(), "vzlist -a -1");
    }
}
