//! Error types for the notch overlay.
//!
//! The pointer/state pipeline itself never fails; these errors only come
//! from configuration persistence and from the platform when a window
//! cannot be created.

use std::path::PathBuf;

use thiserror::Error;

use crate::topology::DisplayId;

#[derive(Debug, Error)]
pub enum NotchError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("no config directory available on this system")]
    NoConfigDir,

    #[error("failed to persist setting `{key}`: {reason}")]
    Settings { key: String, reason: String },

    #[error("could not create overlay window for display {0}")]
    WindowCreation(DisplayId),
}

pub type Result<T> = std::result::Result<T, NotchError>;
