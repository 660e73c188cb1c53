//! FFI helpers for AppKit, Foundation and CoreGraphics.

pub mod bridge;
pub mod cocoa_utils;

pub use cocoa_utils::{
    display_id_for_screen, main_display_id, mouse_location, rect_from_ns, rect_to_ns,
    screen_descriptors, STATUS_WINDOW_LEVEL,
};
