//! Per-screen overlay controllers.
//!
//! - [`window`]: the `OverlayWindow` seam implemented by the platform
//! - [`surface`]: frame, outline and content animation for one window
//! - [`overlay`]: `OverlayController`, which wires a view model, its pointer
//!   subscriptions and a surface together

pub mod overlay;
pub mod surface;
pub mod window;

pub use overlay::{NotchHandle, OverlayController};
pub use surface::OverlaySurface;
pub use window::OverlayWindow;
