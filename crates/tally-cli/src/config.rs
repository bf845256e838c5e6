//! Optional TOML configuration.
//!
//! ```toml
//! [ledger]
//! path = "/home/me/finances/home.trdb"
//!
//! [display]
//! currency = "usd"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tally_core::storage::default_path_in;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LedgerSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    pub currency: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_ledger_path() -> anyhow::Result<PathBuf> {
    Ok(default_path_in(&home_dir()?))
}

pub fn read_config(path: &Path) -> anyhow::Result<TallyConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tally"));
        }
    }
    Ok(home_dir()?.join(".config").join("tally"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[ledger]\npath = \"/srv/home.trdb\"\n\n[display]\ncurrency = \"usd\"\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.ledger.path.as_deref(), Some("/srv/home.trdb"));
        assert_eq!(config.display.currency.as_deref(), Some("usd"));
    }

    #[test]
    fn test_sections_are_optional() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ncurrency = \"gbp\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.ledger.path.is_none());
        assert_eq!(config.display.currency.as_deref(), Some("gbp"));
    }

    #[test]
    fn test_invalid_toml_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ledger\n").unwrap();

        let err = read_config(&path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config"));
        assert!(err.contains("config.toml"));
    }
}
