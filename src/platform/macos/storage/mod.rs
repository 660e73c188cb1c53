//! Storage for macOS using NSUserDefaults.

pub mod preferences;

pub use preferences::{prefs_get_bool, prefs_set_bool, UserDefaultsStore};
