use std::collections::HashMap;

use crate::error::Result;

/// Boolean key/value settings.
pub trait SettingsStore {
    /// `None` when the key has never been written.
    fn bool_value(&self, key: &str) -> Option<bool>;

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn bool_value(&self, key: &str) -> Option<bool> {
        (**self).bool_value(key)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        (**self).set_bool(key, value)
    }
}

/// Settings held in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, bool>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&mut self, key: &str) -> Option<bool> {
        self.values.remove(key)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn bool_value(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
