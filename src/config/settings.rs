use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultLinkError};

/// User-level configuration, loaded from `~/.config/vaultlink/config.toml`.
///
/// Every field has a sensible default so vaultlink works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the vault server.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// The vaultlink config directory: `$HOME/.config/vaultlink`.
    ///
    /// Also home to the audit database when the `audit-log` feature is on.
    pub fn config_dir() -> Option<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()?;
        Some(PathBuf::from(home).join(".config").join("vaultlink"))
    }

    /// Load settings from the default config directory.
    ///
    /// If the directory can't be resolved or the file does not exist,
    /// sensible defaults are returned. If the file exists but cannot be
    /// parsed, an error is returned.
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `<dir>/config.toml`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultLinkError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.server_url, "http://127.0.0.1:5000");
        assert_eq!(s.timeout_secs, 10);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load_from(tmp.path()).unwrap();
        assert_eq!(settings.server_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
server_url = "https://vault.example.com"
timeout_secs = 30
"#;
        fs::write(tmp.path().join("config.toml"), config).unwrap();

        let settings = Settings::load_from(tmp.path()).unwrap();
        assert_eq!(settings.server_url, "https://vault.example.com");
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let config = "server_url = \"http://10.0.0.2:5000\"\n";
        fs::write(tmp.path().join("config.toml"), config).unwrap();

        let settings = Settings::load_from(tmp.path()).unwrap();
        assert_eq!(settings.server_url, "http://10.0.0.2:5000");
        assert_eq!(settings.timeout_secs, 10);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not valid {{toml").unwrap();

        let result = Settings::load_from(tmp.path());
        assert!(result.is_err());
    }
}
