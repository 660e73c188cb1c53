//! Overlay outline geometry and its animation.

pub mod outline;
pub mod renderer;

pub use outline::{NotchOutline, PathElement};
pub use renderer::ShapeRenderer;
