//! Timer-stepped property animation.
//!
//! - [`easing`]: timing curves
//! - [`animator`]: `Animation` / `AnimatedValue` and the `Interpolate` trait
//! - [`clock`]: `Clock` trait with system and manual implementations

pub mod animator;
pub mod clock;
pub mod easing;

pub use animator::{AnimatedValue, Animation, Interpolate};
pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::Easing;
