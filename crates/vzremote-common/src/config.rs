//! Connection and allocation configuration for a managed OpenVZ host.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VzRemoteError};

/// Configuration for one managed remote host.
///
/// All state lives on the remote host; this struct only describes how to
/// reach it and a couple of allocation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VzRemoteConfig {
    /// Hostname or address of the OpenVZ host. Empty means unset.
    pub host: String,
    /// Remote user to connect as.
    pub user: String,
    /// SSH port.
    pub port: u16,
    /// Private key for authentication, if not using the agent.
    pub identity_file: Option<PathBuf>,
    /// Remote directory where downloaded templates are stored.
    pub template_cache_dir: String,
    /// CTID returned by the allocator when the host has no containers.
    pub ctid_floor: u32,
}

impl Default for VzRemoteConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            user: crate::constants::DEFAULT_SSH_USER.to_string(),
            port: crate::constants::DEFAULT_SSH_PORT,
            identity_file: None,
            template_cache_dir: crate::constants::TEMPLATE_CACHE_DIR.to_string(),
            ctid_floor: crate::constants::DEFAULT_CTID_FLOOR,
        }
    }
}

impl VzRemoteConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VzRemoteError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = VzRemoteConfig::default();
        assert_eq!(config.user, "root");
        assert_eq!(config.port, 22);
        assert_eq!(config.ctid_floor, 1000);
        assert_eq!(config.template_cache_dir, "/var/lib/vz/template/cache");
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"host": "vz1.example.com", "port": 2222}"#)
            .expect("failed to write");

        let config = VzRemoteConfig::load(&path).expect("load failed");
        assert_eq!(config.host, "vz1.example.com");
        assert_eq!(config.port, 2222);
        assert_eq!(config.user, "root");
    }

    #[test]
    fn load_missing_file_returns_error() {
        assert!(VzRemoteConfig::load(Path::new("/nonexistent/config.json")).is_err());
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").expect("failed to write");
        assert!(VzRemoteConfig::load(&path).is_err());
    }
}
