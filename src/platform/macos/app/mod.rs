//! Application bootstrap for macOS.

pub mod driver;
pub mod helpers;

use std::rc::Rc;

use tracing::{info, warn};

use crate::animation::{Clock, SystemClock};
use crate::events::EventBus;
use crate::platform::macos::ffi::bridge::{autoreleasepool, id, msg_send, NSApp};
use crate::platform::macos::input::{install_system_observers, MacPointerMonitors};
use crate::platform::macos::storage::UserDefaultsStore;
use crate::platform::macos::ui::{MacDisplayPlatform, StatusBar};
use crate::storage::AppConfig;
use crate::topology::TopologyManager;

pub use driver::{create_driver, menu_selectors, runtime_mut, start_timer, AppRuntime};
pub use helpers::{apply_to_all_views, redraw_all_views};

/// Run the accessory app until it terminates.
///
/// Builds the overlays for the current screens, starts observing screen and
/// defaults changes, installs the status item and enters the AppKit run loop.
pub fn run(config: &AppConfig) {
    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let bus = EventBus::new();
        let publisher = bus.publisher();
        let clock: Rc<dyn Clock> = Rc::new(SystemClock::new());
        let manager = TopologyManager::new(
            MacDisplayPlatform::new(publisher.clone()),
            MacPointerMonitors::new(),
            UserDefaultsStore::new(),
            clock,
        );

        let driver: id = create_driver(Box::new(AppRuntime::new(bus, manager)));
        let Some(runtime) = runtime_mut(&*driver) else {
            warn!("driver has no runtime");
            return;
        };

        let count = runtime.manager.rebuild();
        if count == 0 {
            warn!("no screens available; waiting for a display to appear");
        }

        runtime.observers = Some(install_system_observers(&publisher));

        let show_secondary = runtime
            .manager
            .applied_settings()
            .unwrap_or_default()
            .show_secondary_screen_notch;
        let (toggle, quit) = menu_selectors();
        runtime.status_bar = Some(StatusBar::install(driver, toggle, quit, show_secondary));

        start_timer(driver, config.tick_interval());
        info!(overlays = count, frame_rate = config.frame_rate, "running");

        let _: () = msg_send![app, run];
    });
}
