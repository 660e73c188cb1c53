#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Notch overlay core.
//!
//! Everything outside `platform` is pure Rust with no FFI so the state
//! machine, geometry and topology logic run as normal tests on any host.
//! `platform::macos` binds the core to AppKit.

pub mod animation;
pub mod content;
pub mod controller;
pub mod error;
pub mod events;
pub mod geometry;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod shape;
pub mod storage;
pub mod topology;
pub mod tracker;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the types most collaborators need
pub use controller::{NotchHandle, OverlayController, OverlayWindow};
pub use error::{NotchError, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use geometry::{compute_rects, window_frame, Point, Rect, Size, TriggerGeometry};
pub use model::{ExpansionState, NotchSettings, NotchViewModel};
pub use topology::{DisplayId, DisplayPlatform, ScreenDescriptor, TopologyManager};
pub use tracker::{MonitorToken, MouseTracker, PointerMonitors, PointerSource};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Linear interpolation between `a` and `b` at fraction `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
