//! Platform-specific implementations.
//!
//! Only macOS is supported: the overlay sits around the MacBook notch.

#[cfg(target_os = "macos")]
pub mod macos;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "macos")]
pub use macos::*;
