//! Configuration management
//!
//! Loads `config.yaml` from the promptq data directory. A missing file
//! means defaults; a malformed file is an error rather than a silent
//! fallback.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::capture::default_image_extensions;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory exported dataset files are written to. Defaults to the
    /// current directory at export time.
    pub export_dir: Option<PathBuf>,

    /// File extensions accepted as images by the capture flow.
    pub image_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: None,
            image_extensions: default_image_extensions(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        serde_saphyr::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
    }

    /// Path of the configuration file inside the data directory.
    pub fn config_path() -> Result<PathBuf> {
        let data_dir = match std::env::var_os("PROMPTQ_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
                .join(".promptq"),
        };

        Ok(data_dir.join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.export_dir.is_none());
        assert!(config.image_extensions.iter().any(|e| e == "png"));
        assert!(config.image_extensions.iter().any(|e| e == "jpg"));
    }

    #[test]
    fn test_parse_partial_yaml_keeps_defaults() {
        let config: Config = serde_saphyr::from_str("export_dir: /data/exports\n").unwrap();

        assert_eq!(config.export_dir, Some(PathBuf::from("/data/exports")));
        assert!(
            !config.image_extensions.is_empty(),
            "Unset fields should fall back to defaults"
        );
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = "export_dir: /data/exports\nimage_extensions:\n  - png\n  - webp\n";
        let config: Config = serde_saphyr::from_str(yaml).unwrap();

        assert_eq!(config.image_extensions, vec!["png", "webp"]);
    }
}
