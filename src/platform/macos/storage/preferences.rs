//! Settings persisted in NSUserDefaults.

use crate::error::{NotchError, Result};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, Bool};
use crate::storage::SettingsStore;

/// Reads a bool from NSUserDefaults, `None` if the key was never written.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str) -> Option<bool> {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: &*k];
    if obj == nil {
        None
    } else {
        let v: Bool = msg_send![ud, boolForKey: &*k];
        Some(v.as_bool())
    }
}

/// Saves a bool to NSUserDefaults and flushes it. Returns `false` if the
/// defaults database could not be written.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) -> bool {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring(key);
    let _: () = msg_send![ud, setBool: Bool::new(val), forKey: &*k];
    let synced: Bool = msg_send![ud, synchronize];
    synced.as_bool()
}

/// `SettingsStore` over the standard user defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDefaultsStore;

impl UserDefaultsStore {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsStore for UserDefaultsStore {
    fn bool_value(&self, key: &str) -> Option<bool> {
        unsafe { prefs_get_bool(key) }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        if unsafe { prefs_set_bool(key, value) } {
            Ok(())
        } else {
            Err(NotchError::Settings {
                key: key.to_owned(),
                reason: "NSUserDefaults synchronize failed".to_owned(),
            })
        }
    }
}
