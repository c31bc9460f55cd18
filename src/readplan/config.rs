use crate::error::{ReadplanError, Result};
use crate::reference::DEFAULT_READER_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for readplan, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ReadplanConfig {
    /// Directory of month datasets replacing the bundled plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_dir: Option<PathBuf>,

    /// Base URL of the online reader chapters are opened in
    #[serde(default = "default_reader_url")]
    pub reader_url: String,
}

fn default_reader_url() -> String {
    DEFAULT_READER_URL.to_string()
}

impl Default for ReadplanConfig {
    fn default() -> Self {
        Self {
            plan_dir: None,
            reader_url: default_reader_url(),
        }
    }
}

/// Keys accepted by `get` / `set`, in display order.
pub const CONFIG_KEYS: [&str; 2] = ["plan-dir", "reader-url"];

impl ReadplanConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ReadplanError::Io)?;
        let config: ReadplanConfig =
            serde_json::from_str(&content).map_err(ReadplanError::Serialization)?;
        Ok(config)
    }

    /// Like [`ReadplanConfig::load`], but a broken file only costs a warning.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            warn!(error = %e, "config unreadable, using defaults");
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ReadplanError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ReadplanError::Serialization)?;
        fs::write(config_path, content).map_err(ReadplanError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "plan-dir" => Some(
                self.plan_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "reader-url" => Some(self.reader_url.clone()),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty `plan-dir` restores the bundled plan.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "plan-dir" => {
                self.plan_dir = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "reader-url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(ReadplanError::Api(format!(
                        "reader-url must be an http(s) URL, got '{}'",
                        value
                    )));
                }
                self.reader_url = value.to_string();
            }
            other => {
                return Err(ReadplanError::Api(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        CONFIG_KEYS
            .iter()
            .map(|k| (k.to_string(), self.get(k).unwrap_or_default()))
            .collect()
    }
}
