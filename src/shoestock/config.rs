use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

/// Configuration for shoestock, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Inventory file to load and save. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_inventory_file")]
    pub inventory_file: PathBuf,

    /// Write the inventory right after a new record is captured.
    #[serde(default)]
    pub autosave_on_capture: bool,
}

fn default_inventory_file() -> PathBuf {
    PathBuf::from(DEFAULT_INVENTORY_FILE)
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
            autosave_on_capture: false,
        }
    }
}

/// Settable configuration keys, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    InventoryFile,
    AutosaveCapture,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::InventoryFile, ConfigKey::AutosaveCapture];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::InventoryFile => "inventory-file",
            ConfigKey::AutosaveCapture => "autosave-capture",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| StockError::Config(format!("Unknown config key: {}", s)))
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::InventoryFile => self.inventory_file.display().to_string(),
            ConfigKey::AutosaveCapture => self.autosave_on_capture.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::InventoryFile => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StockError::Config("inventory-file cannot be empty".into()));
                }
                self.inventory_file = PathBuf::from(value);
            }
            ConfigKey::AutosaveCapture => {
                self.autosave_on_capture = parse_switch(value).ok_or_else(|| {
                    StockError::Config(format!(
                        "autosave-capture expects true/false, got '{}'",
                        value
                    ))
                })?;
            }
        }
        Ok(())
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
