//! Event dispatcher for handling application events.
//!
//! The dispatcher is called from the UI tick timer and processes all
//! pending events in batch, in arrival order.
//!
//! ```text
//! EventBus::drain() → dispatch_events() → TopologyManager
//! ```

use tracing::{debug, error};

use crate::events::{AppEvent, EventBus};
use crate::storage::SettingsStore;
use crate::topology::{DisplayPlatform, TopologyManager};
use crate::tracker::PointerMonitors;

/// Drain the bus and apply every event. Returns the number handled.
pub fn dispatch_events<P, M, S>(bus: &EventBus, manager: &mut TopologyManager<P, M, S>) -> usize
where
    P: DisplayPlatform,
    M: PointerMonitors,
    S: SettingsStore,
{
    let events = bus.drain();
    for event in &events {
        dispatch_event(event, manager);
    }
    events.len()
}

/// Apply a single event.
pub fn dispatch_event<P, M, S>(event: &AppEvent, manager: &mut TopologyManager<P, M, S>)
where
    P: DisplayPlatform,
    M: PointerMonitors,
    S: SettingsStore,
{
    debug!(event = event.description(), "dispatch");

    match *event {
        AppEvent::ScreensChanged => {
            manager.on_screens_changed();
        }

        AppEvent::SettingsChanged => {
            manager.on_settings_changed();
        }

        AppEvent::ToggleSecondaryScreens => {
            if let Err(err) = manager.toggle_secondary_screens() {
                error!(%err, "could not toggle secondary screen overlays");
            }
        }

        AppEvent::ModuleSelected(display, module) => {
            manager.select_module(display, module);
        }

        AppEvent::ModalOpened(display) => {
            manager.set_suppressed(display, true);
        }

        AppEvent::ModalClosed(display) => {
            manager.set_suppressed(display, false);
        }
    }
}
