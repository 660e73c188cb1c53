//! JSON config file with ambient options.
//!
//! Lives at `<config dir>/DynamicNotch/config.json`. A missing or empty file
//! means defaults; unknown fields are ignored and missing ones defaulted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NotchError, Result};
use crate::model::constants::{CONFIG_DIR_NAME, DEFAULT_FRAME_RATE, MAX_FRAME_RATE, MIN_FRAME_RATE};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Enables debug-level logging and honours `RUST_LOG`.
    pub debug_logging: bool,
    /// Animation tick rate in frames per second.
    pub frame_rate: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug_logging: false,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl AppConfig {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(NotchError::NoConfigDir)?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| NotchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: AppConfig = serde_json::from_str(&content)?;
        config.sanitize();
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write_err = |source: std::io::Error| NotchError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(write_err)
    }

    /// Clamp out-of-range values.
    pub fn sanitize(&mut self) {
        self.frame_rate = self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
    }

    /// Timer interval matching `frame_rate`.
    pub fn tick_interval(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE))
    }
}
