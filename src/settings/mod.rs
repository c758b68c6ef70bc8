//! Runtime settings
//!
//! Settings are read from a flat TOML or YAML file, the format chosen by the file
//! extension. Every key is optional and falls back to its default.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

fn default_port() -> u16 {
    7890
}

fn default_socks_port() -> u16 {
    7891
}

fn default_true() -> bool {
    true
}

fn default_mode() -> String {
    "rule".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_external_controller() -> String {
    "127.0.0.1:9090".to_string()
}

fn default_test_url() -> String {
    "http://www.gstatic.com/generate_204".to_string()
}

fn default_interval() -> u32 {
    300
}

fn default_tolerance() -> u32 {
    50
}

fn default_general_output() -> String {
    "clash.yaml".to_string()
}

fn default_meta_output() -> String {
    "clash_meta.yaml".to_string()
}

/// Settings structure to hold the whole configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub port: u16,
    pub socks_port: u16,
    pub allow_lan: bool,
    pub mode: String,
    pub log_level: String,
    pub external_controller: String,

    // Health check of the automatic selection group
    pub test_url: String,
    pub test_interval: u32,
    pub test_tolerance: u32,

    pub general_output: String,
    pub meta_output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: default_port(),
            socks_port: default_socks_port(),
            allow_lan: default_true(),
            mode: default_mode(),
            log_level: default_log_level(),
            external_controller: default_external_controller(),
            test_url: default_test_url(),
            test_interval: default_interval(),
            test_tolerance: default_tolerance(),
            general_output: default_general_output(),
            meta_output: default_meta_output(),
        }
    }
}

/// Serialization format of a settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Yaml,
}

impl SettingsFormat {
    /// Pick the format from a file extension: `.toml`, `.yml` or `.yaml`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(SettingsFormat::Toml),
            "yml" | "yaml" => Some(SettingsFormat::Yaml),
            _ => None,
        }
    }
}

impl Settings {
    /// Parse settings content in the given format.
    pub fn load_from_content(content: &str, format: SettingsFormat) -> Result<Self> {
        match format {
            SettingsFormat::Toml => {
                toml::from_str(content).context("Failed to parse TOML settings")
            }
            // An empty YAML document is null, which serde_yaml refuses for a struct
            SettingsFormat::Yaml if content.trim().is_empty() => Ok(Self::default()),
            SettingsFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse YAML settings")
            }
        }
    }

    /// Load settings from a file, choosing the parser by its extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SettingsFormat::from_path(path).ok_or_else(|| {
            anyhow!(
                "Unsupported settings file '{}': expected a .toml, .yml or .yaml extension",
                path.display()
            )
        })?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file '{}'", path.display()))?;
        Self::load_from_content(&content, format)
            .with_context(|| format!("Invalid settings file '{}'", path.display()))
    }
}
