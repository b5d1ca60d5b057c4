//! System-wide constants and default values.

use std::path::PathBuf;

/// Remote binary implementing container lifecycle operations.
pub const VZCTL_BIN: &str = "vzctl";

/// Remote binary implementing container listing.
pub const VZLIST_BIN: &str = "vzlist";

/// Default SSH port.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Default remote user for elevated operations.
pub const DEFAULT_SSH_USER: &str = "root";

/// First CTID handed out when the remote host has no containers yet.
/// CTIDs below 100 are reserved by OpenVZ convention.
pub const DEFAULT_CTID_FLOOR: u32 = 1000;

/// Remote directory where precreated OS templates are cached.
pub const TEMPLATE_CACHE_DIR: &str = "/var/lib/vz/template/cache";

/// Base URL for precreated OS templates.
pub const TEMPLATE_BASE_URL: &str = "http://download.openvz.org/template/precreated";

/// Application name used in CLI output and config paths.
pub const APP_NAME: &str = "vzremote";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "vzr";

/// Returns the default config file path (`$HOME/.vzremote/config.json`),
/// or `None` when no home directory can be determined.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(|home| PathBuf::from(home).join(".vzremote").join("config.json"))
}
