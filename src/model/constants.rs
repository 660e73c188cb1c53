//! Geometry, timing and preference constants.
//!
//! All sizes are in points (Cocoa logical units).

// === Collapsed overlay ===

/// Width of the collapsed overlay and of the trigger strip.
pub const COLLAPSED_WIDTH: f64 = 200.0;

/// Height of the collapsed overlay window.
pub const COLLAPSED_HEIGHT: f64 = 38.0;

/// Height of the trigger strip measured down from the top of the screen.
pub const TRIGGER_HEIGHT: f64 = 35.0;

// === Expanded overlay ===

/// Width of the expanded overlay window.
pub const EXPANDED_WIDTH: f64 = 700.0;

/// Height of the expanded overlay window.
pub const EXPANDED_HEIGHT: f64 = 250.0;

/// Extra height added to the expanded hit rectangle so a pointer resting on
/// the very top edge of the screen does not flicker the overlay closed.
/// Only used for containment, never for rendering.
pub const EXPANDED_TOP_TOLERANCE: f64 = 5.0;

// === Shape ===

/// Radius of the two rounded bottom corners.
pub const CORNER_RADIUS: f64 = 16.0;

// === Timing ===

/// Duration of the frame and outline transition, in seconds.
pub const TRANSITION_DURATION: f64 = 0.3;

/// Delay before the full layout is revealed after expanding, in seconds.
pub const CONTENT_REVEAL_DELAY: f64 = 0.3;

/// Default tick rate of the animation driver.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Slowest accepted animation tick rate.
pub const MIN_FRAME_RATE: u32 = 15;

/// Fastest accepted animation tick rate.
pub const MAX_FRAME_RATE: u32 = 240;

// === NSUserDefaults Keys ===

/// Whether overlays are shown on screens other than the primary one.
pub const PREF_SHOW_SECONDARY_SCREEN_NOTCH: &str = "showSecondaryScreenNotch";

/// Value used when `showSecondaryScreenNotch` has never been written.
pub const DEFAULT_SHOW_SECONDARY_SCREEN_NOTCH: bool = true;

// === Branding ===

/// Name shown in the status bar menu and in the expanded header row.
pub const APP_DISPLAY_NAME: &str = "Dynamic Notch";

/// Directory name used under the user's config directory.
pub const CONFIG_DIR_NAME: &str = "DynamicNotch";
