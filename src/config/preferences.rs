use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Optional defaults file for tether-proxy, edited by hand.
///
/// Every value can also be set through the environment or a CLI flag; the
/// file is the lowest-precedence source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Desired SOCKS proxy host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Desired SOCKS proxy port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Exact service name override, skips detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Alternation pattern for name-based detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matchers: Option<String>,

    /// Pipe-delimited bypass patterns, merged additively
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<String>,
}

impl Preferences {
    /// Get the preferences file path
    pub fn config_file_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".tether-proxy").join("config.json"))
    }

    /// Load preferences, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let prefs: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid preferences file {}", path.display()))?;
        Ok(prefs)
    }
}
