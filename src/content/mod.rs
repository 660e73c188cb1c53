//! Hosted content presentation.
//!
//! The widgets themselves live elsewhere; this module only decides which
//! layout the overlay shows, when it becomes visible and where the
//! expanded panel's rows sit.

pub mod layout;
pub mod presenter;

pub use layout::{body_rect, tab_at, tab_rect};
pub use presenter::{ContentLayout, ContentPresenter, ContentView, NotchModule};
