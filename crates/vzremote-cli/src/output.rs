//! Formatted output helpers for CLI commands.

use vzremote_openvz::VzStatus;

/// Renders a CTID list as a one-column table.
#[must_use]
pub fn render_ctid_list(ctids: &[u32]) -> String {
    let mut out = String::from("CTID");
    for ctid in ctids {
        out.push('\n');
        out.push_str(&ctid.to_string());
    }
    out
}

/// Renders a parsed status line in a human-friendly form.
#[must_use]
pub fn render_status(status: &VzStatus) -> String {
    format!(
        "CTID {}: {}, {}, {}",
        status.ctid,
        if status.exists { "exists" } else { "deleted" },
        if status.mounted { "mounted" } else { "unmounted" },
        status.state
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctid_list_renders_one_per_line() {
        assert_eq!(render_ctid_list(&[101, 102]), "CTID\n101\n102");
    }

    #[test]
    fn ctid_list_empty_renders_header_only() {
        assert_eq!(render_ctid_list(&[]), "CTID");
    }

    #[test]
    fn status_renders_running_container() {
        let status = VzStatus::parse("CTID 101 exist mounted running").expect("parse failed");
        assert_eq!(render_status(&status), "CTID 101: exists, mounted, running");
    }

    #[test]
    fn status_renders_deleted_container() {
        let status = VzStatus::parse("CTID 102 deleted umounted down").expect("parse failed");
        assert_eq!(render_status(&status), "CTID 102: deleted, unmounted, down");
    }
}
