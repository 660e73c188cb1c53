//! Screen topology: which screens get an overlay, and the manager that
//! owns every overlay controller.

pub mod manager;
pub mod screen;

pub use manager::TopologyManager;
pub use screen::{eligible_screens, DisplayId, DisplayPlatform, ScreenDescriptor};
