//! Application domain model.
//!
//! Pure state holders (no FFI): the per-screen view model, the expansion
//! state, user settings and all constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod constants;
pub mod expansion;
pub mod settings;
pub mod view_model;

pub use constants::*;
pub use expansion::ExpansionState;
pub use settings::NotchSettings;
pub use view_model::{NotchViewModel, ObserverId, StateObserver};
