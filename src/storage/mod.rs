//! Persistence.
//!
//! - [`settings`]: the key/value seam for user-facing settings, with an
//!   in-memory implementation (NSUserDefaults lives in
//!   `platform::macos::storage`)
//! - [`config`]: the JSON config file with ambient options

pub mod config;
pub mod settings;

pub use config::AppConfig;
pub use settings::{MemorySettingsStore, SettingsStore};
