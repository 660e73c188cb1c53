//! macOS implementation using AppKit via objc2.
//!
//! - FFI helpers (objc2 bridge, NSScreen enumeration, pointer location)
//! - UI components (overlay NSWindow + NotchOverlayView, status bar item)
//! - Input handling (NSEvent mouse monitors, NSNotificationCenter observers)
//! - Storage (NSUserDefaults settings store)
//! - The app driver: UI tick timer and menu actions

pub mod app;
pub mod ffi;
pub mod input;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use app::run;
pub use ffi::bridge;
pub use input::MacPointerMonitors;
pub use storage::UserDefaultsStore;
pub use ui::{MacDisplayPlatform, MacOverlayWindow};
