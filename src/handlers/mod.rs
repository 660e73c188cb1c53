//! Event handlers and dispatching.
//!
//! This module contains the event dispatcher that processes events
//! from the event bus and applies them to the topology manager.

pub mod dispatcher;

pub use dispatcher::{dispatch_event, dispatch_events};
