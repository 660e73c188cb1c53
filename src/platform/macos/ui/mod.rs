//! AppKit UI: overlay windows and the status bar item.

pub mod overlay;
pub mod status_bar;

pub use overlay::{MacDisplayPlatform, MacOverlayWindow};
pub use status_bar::StatusBar;
