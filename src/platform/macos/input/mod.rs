//! Input handling module.
//!
//! - mouse_monitors.rs: global and local NSEvent mouse-moved monitors
//! - observers.rs: screen-parameter and user-defaults notifications

pub mod mouse_monitors;
pub mod observers;

pub use mouse_monitors::MacPointerMonitors;
pub use observers::{install_system_observers, SystemObservers};
