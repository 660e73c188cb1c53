//! Pointer sampling.
//!
//! - [`hit_test`]: the per-sample contract turning a pointer position into
//!   at most one state transition
//! - [`monitors`]: the subscription seam the platform implements with
//!   global and in-process mouse-moved monitors

pub mod monitors;

pub use hit_test::MouseTracker;
pub use monitors::{MonitorToken, PointerHandler, PointerMonitors, PointerSource};
