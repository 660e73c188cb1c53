//! The object AppKit calls back into: timer ticks and status menu actions.
//!
//! `NotchAppDriver` is an NSObject subclass whose `_runtime` ivar points at
//! the boxed `AppRuntime`. Everything runs on the main thread.

use std::ffi::c_void;

use chrono::{Local, Timelike};
use tracing::{debug, info};

use super::helpers::redraw_all_views;
use crate::events::{AppEvent, EventBus, EventPublisher};
use crate::handlers::dispatch_events;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, sel, AnyClass, AnyObject, ClassBuilder, ObjectExt,
    Sel, NSApp, YES,
};
use crate::platform::macos::input::{MacPointerMonitors, SystemObservers};
use crate::platform::macos::storage::UserDefaultsStore;
use crate::platform::macos::ui::{MacDisplayPlatform, StatusBar};
use crate::topology::TopologyManager;

pub type MacTopologyManager =
    TopologyManager<MacDisplayPlatform, MacPointerMonitors, UserDefaultsStore>;

const CLASS_NAME: &std::ffi::CStr = c"NotchAppDriver";

/// Everything the running app owns.
pub struct AppRuntime {
    pub bus: EventBus,
    pub publisher: EventPublisher,
    pub manager: MacTopologyManager,
    pub observers: Option<SystemObservers>,
    pub status_bar: Option<StatusBar>,
    last_minute: Option<u32>,
    in_tick: bool,
}

impl AppRuntime {
    pub fn new(bus: EventBus, manager: MacTopologyManager) -> Self {
        let publisher = bus.publisher();
        Self {
            bus,
            publisher,
            manager,
            observers: None,
            status_bar: None,
            last_minute: None,
            in_tick: false,
        }
    }

    /// One UI tick: apply pending events, step animations and keep the
    /// clock text current.
    pub fn tick(&mut self) {
        // AppKit can fire the timer again from a nested run loop
        if self.in_tick {
            return;
        }
        self.in_tick = true;

        if dispatch_events(&self.bus, &mut self.manager) > 0 {
            self.sync_status_bar();
        }
        self.manager.tick();

        let minute = Local::now().minute();
        if self.last_minute != Some(minute) {
            self.last_minute = Some(minute);
            unsafe { redraw_all_views() };
        }

        self.in_tick = false;
    }

    pub fn sync_status_bar(&self) {
        if let (Some(bar), Some(settings)) = (&self.status_bar, self.manager.applied_settings()) {
            bar.set_secondary_checked(settings.show_secondary_screen_notch);
        }
    }

    /// Remove observers and every overlay.
    pub fn shutdown(&mut self) {
        self.observers = None;
        self.manager.shutdown();
        self.status_bar = None;
        info!("shut down");
    }
}

/// Create the driver object and hand it ownership of `runtime`.
///
/// # Safety
/// Main thread only. The returned object is retained and lives for the
/// rest of the process.
pub unsafe fn create_driver(runtime: Box<AppRuntime>) -> id {
    let cls = driver_class();
    let driver: id = msg_send![cls, new];
    (*driver).store_ivar::<*mut c_void>("_runtime", Box::into_raw(runtime) as *mut c_void);
    (*driver).store_ivar::<id>("_timer", nil);
    driver
}

/// Borrow the runtime owned by `driver`.
///
/// # Safety
/// `driver` must come from `create_driver`, and no other borrow of the
/// runtime may be live.
pub unsafe fn runtime_mut<'a>(driver: &'a AnyObject) -> Option<&'a mut AppRuntime> {
    let ptr = *driver.load_ivar::<*mut c_void>("_runtime") as *mut AppRuntime;
    ptr.as_mut()
}

/// Start (or restart) the UI tick timer.
///
/// Added in common modes so it keeps firing while the status menu is open.
///
/// # Safety
/// `driver` must come from `create_driver`.
pub unsafe fn start_timer(driver: id, interval: f64) -> id {
    let prev: id = *(*driver).load_ivar::<id>("_timer");
    if prev != nil {
        let _: () = msg_send![prev, invalidate];
        (*driver).store_ivar::<id>("_timer", nil);
    }
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: driver,
        selector: sel!(tick:),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: &*common_modes];

    (*driver).store_ivar::<id>("_timer", timer);
    debug!(interval, "tick timer started");
    timer
}

unsafe fn driver_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(CLASS_NAME) {
        return cls;
    }
    let Some(mut builder) = ClassBuilder::new(CLASS_NAME, get_class("NSObject")) else {
        return get_class("NotchAppDriver");
    };

    builder.add_ivar::<*mut c_void>(c"_runtime"); // *mut AppRuntime
    builder.add_ivar::<id>(c"_timer");

    builder.add_method(sel!(tick:), tick as unsafe extern "C-unwind" fn(_, _, _));
    builder.add_method(
        sel!(toggleSecondaryScreens:),
        toggle_secondary_screens as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(sel!(quitApp:), quit_app as unsafe extern "C-unwind" fn(_, _, _));

    builder.register()
}

/// Selectors the status menu sends to the driver.
pub fn menu_selectors() -> (Sel, Sel) {
    (sel!(toggleSecondaryScreens:), sel!(quitApp:))
}

// ============================================================================
// Method implementations
// ============================================================================

unsafe extern "C-unwind" fn tick(this: &AnyObject, _cmd: Sel, _timer: id) {
    if let Some(runtime) = runtime_mut(this) {
        runtime.tick();
    }
}

unsafe extern "C-unwind" fn toggle_secondary_screens(this: &AnyObject, _cmd: Sel, _sender: id) {
    if let Some(runtime) = runtime_mut(this) {
        runtime.publisher.publish(AppEvent::ToggleSecondaryScreens);
    }
}

unsafe extern "C-unwind" fn quit_app(this: &AnyObject, _cmd: Sel, _sender: id) {
    let timer: id = *this.load_ivar::<id>("_timer");
    if timer != nil {
        let _: () = msg_send![timer, invalidate];
    }
    if let Some(runtime) = runtime_mut(this) {
        runtime.shutdown();
    }
    let _: () = msg_send![NSApp(), terminate: nil];
}
