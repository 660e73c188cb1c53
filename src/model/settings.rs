//! User-facing settings read by the topology manager at every rebuild.

use super::constants::*;
use crate::storage::SettingsStore;

/// Effective settings, with persisted-but-absent keys resolved to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotchSettings {
    /// Show overlays on screens other than the primary one.
    pub show_secondary_screen_notch: bool,
}

impl Default for NotchSettings {
    fn default() -> Self {
        Self {
            show_secondary_screen_notch: DEFAULT_SHOW_SECONDARY_SCREEN_NOTCH,
        }
    }
}

impl NotchSettings {
    /// Read the settings from a store. An unset key means the default.
    pub fn load(store: &dyn SettingsStore) -> Self {
        Self {
            show_secondary_screen_notch: store
                .bool_value(PREF_SHOW_SECONDARY_SCREEN_NOTCH)
                .unwrap_or(DEFAULT_SHOW_SECONDARY_SCREEN_NOTCH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySettingsStore;

    #[test]
    fn unset_secondary_screen_defaults_to_true() {
        let store = MemorySettingsStore::new();
        assert!(NotchSettings::load(&store).show_secondary_screen_notch);
    }

    #[test]
    fn explicit_false_is_respected() {
        let mut store = MemorySettingsStore::new();
        store.set_bool(PREF_SHOW_SECONDARY_SCREEN_NOTCH, false).unwrap();
        assert!(!NotchSettings::load(&store).show_secondary_screen_notch);
    }
}
