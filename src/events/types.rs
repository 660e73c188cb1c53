//! Typed application events.
//!
//! Everything that used to be a process-wide notification (screens changed,
//! defaults changed, a modal sheet opened) arrives here as a value. This
//! module is pure Rust with no FFI dependencies.

use crate::content::NotchModule;
use crate::topology::DisplayId;

/// Application-level events, drained by the dispatcher on the UI tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    // === System Events ===
    /// Displays were attached, removed or reconfigured.
    ScreensChanged,

    /// Some persisted default changed. May or may not affect overlays.
    SettingsChanged,

    // === Input Events ===
    /// Status-bar menu: flip the secondary-screen setting.
    ToggleSecondaryScreens,

    /// A tab was clicked in the expanded panel on that display.
    ModuleSelected(DisplayId, NotchModule),

    // === Modal Lifecycle ===
    /// Hosted content opened a modal surface over the overlay on that display.
    ModalOpened(DisplayId),

    /// The modal surface on that display closed.
    ModalClosed(DisplayId),
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ScreensChanged => "Screen parameters changed",
            AppEvent::SettingsChanged => "User defaults changed",
            AppEvent::ToggleSecondaryScreens => "Toggle secondary screen overlays",
            AppEvent::ModuleSelected(..) => "Module tab selected",
            AppEvent::ModalOpened(_) => "Modal surface opened",
            AppEvent::ModalClosed(_) => "Modal surface closed",
        }
    }
}
