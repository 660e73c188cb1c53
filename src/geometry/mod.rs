//! Screen-space geometry.
//!
//! - [`rect`]: `Point`, `Size`, `Rect` with Cocoa containment semantics
//! - [`notch`]: trigger / expanded hit rectangles and window frames

pub mod notch;
pub mod rect;

pub use notch::{compute_rects, window_frame, TriggerGeometry};
pub use rect::{Point, Rect, Size};
