//! Overlay window and its content view.

pub mod drawing;
pub mod view;
pub mod window;

pub use view::{clear_publisher, create_notch_view, set_view_content, set_view_outline};
pub use window::{MacDisplayPlatform, MacOverlayWindow};
