//! Configuration file loading (blockforge.toml).
//!
//! Every constant the tools need — author name, version string, API site
//! title, preview viewport and settle delay — lives here with a default, so
//! a repository without a config file still works out of the box.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (blockforge.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub records: RecordsConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Source directory holding the record trees
    pub dir: PathBuf,
    /// Output directory for the built API tree
    pub output: PathBuf,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src"),
            output: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title shown on the built landing page
    pub title: String,
    /// Version string written to the manifest
    pub version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blockforge".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Author written into new records
    pub author: String,
    /// Version written into new records
    pub version: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            author: "Blockforge Team".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Post-load settle delay in milliseconds
    pub settle_ms: u64,
    /// CSS utility framework injected into the document shell
    pub css_cdn_url: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            settle_ms: 1000,
            css_cdn_url: "https://cdn.tailwindcss.com".to_string(),
        }
    }
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let config = load(Path::new("does-not-exist.toml")).unwrap();

        assert_eq!(config.records.dir, PathBuf::from("src"));
        assert_eq!(config.records.output, PathBuf::from("dist"));
        assert_eq!(config.scaffold.author, "Blockforge Team");
        assert_eq!(config.preview.width, 1200);
        assert_eq!(config.preview.settle_ms, 1000);
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blockforge.toml");
        std::fs::write(
            &path,
            "[scaffold]\nauthor = \"Someone Else\"\n\n[preview]\nwidth = 640\n",
        )
        .unwrap();

        let config = load(&path).unwrap();

        assert_eq!(config.scaffold.author, "Someone Else");
        assert_eq!(config.scaffold.version, "1.0.0");
        assert_eq!(config.preview.width, 640);
        assert_eq!(config.preview.height, 800);
        assert_eq!(config.records.dir, PathBuf::from("src"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blockforge.toml");
        std::fs::write(&path, "[records\ndir = ").unwrap();

        assert!(load(&path).is_err());
    }
}
