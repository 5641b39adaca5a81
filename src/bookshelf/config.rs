use crate::error::{Result, ShelfError};
use crate::store::LoadMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "books.json";

/// Keys accepted by [`ShelfConfig::set`] and [`ShelfConfig::get`].
pub const CONFIG_KEYS: &[&str] = &["data-file", "strict-load"];

/// Configuration for bookshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File name of the catalog document, relative to the data dir
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Refuse to open a catalog with unreadable entries (otherwise skip them)
    #[serde(default = "default_strict_load")]
    pub strict_load: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_strict_load() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            strict_load: default_strict_load(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShelfConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn load_mode(&self) -> LoadMode {
        if self.strict_load {
            LoadMode::Strict
        } else {
            LoadMode::Lenient
        }
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "strict-load" => Ok(self.strict_load.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ShelfError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "strict-load" => {
                self.strict_load = parse_bool(value).ok_or_else(|| {
                    ShelfError::Config(format!("strict-load expects true or false, got '{}'", value))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|v| (*key, v)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn unknown_key(key: &str) -> ShelfError {
    ShelfError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
