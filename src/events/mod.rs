//! Event system for decoupled inter-module communication.
//!
//! OS observers, the status-bar menu and hosted content publish typed
//! events; the UI tick drains them and hands them to the dispatcher.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Observers  │     │ Status menu │     │   Content   │
//! │ (NSNotif.)  │     │             │     │  (modals)   │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              Dispatcher → TopologyManager           │
//! │                  (UI tick timer)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The bus is an owned value created at startup and passed to whoever
//! needs a publisher; there is no process-wide instance.
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

// Re-export main types for convenient access
pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
