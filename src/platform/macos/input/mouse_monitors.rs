//! NSEvent mouse-moved monitors.
//!
//! A global monitor sees movement while another application is frontmost;
//! a local monitor sees movement delivered to our own windows. Both report
//! `NSEvent.mouseLocation`, which is already in global Cocoa coordinates.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, RcBlock};
use crate::platform::macos::ffi::mouse_location;
use crate::tracker::{MonitorToken, PointerHandler, PointerMonitors, PointerSource};

/// `NSEventMaskMouseMoved` (`1 << NSEventTypeMouseMoved`).
const MOUSE_MOVED_MASK: u64 = 1 << 5;

/// Live NSEvent monitors keyed by token.
#[derive(Default)]
pub struct MacPointerMonitors {
    monitors: HashMap<MonitorToken, id>,
    next_token: u64,
}

impl MacPointerMonitors {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointerMonitors for MacPointerMonitors {
    fn install(&mut self, source: PointerSource, handler: PointerHandler) -> MonitorToken {
        let token = MonitorToken(self.next_token);
        self.next_token += 1;

        let monitor = unsafe {
            match source {
                PointerSource::Global => install_global_monitor(handler),
                PointerSource::Local => install_local_monitor(handler),
            }
        };
        if monitor == nil {
            warn!(%source, "NSEvent refused mouse-moved monitor");
        } else {
            trace!(%source, ?token, "mouse-moved monitor installed");
        }

        self.monitors.insert(token, monitor);
        token
    }

    fn remove(&mut self, token: MonitorToken) -> bool {
        let Some(monitor) = self.monitors.remove(&token) else {
            return false;
        };
        unsafe { remove_monitor(monitor) };
        trace!(?token, "mouse-moved monitor removed");
        true
    }

    fn active_count(&self) -> usize {
        self.monitors.len()
    }
}

impl Drop for MacPointerMonitors {
    fn drop(&mut self) {
        if !self.monitors.is_empty() {
            warn!(count = self.monitors.len(), "removing leftover mouse monitors");
        }
        for (_, monitor) in self.monitors.drain() {
            unsafe { remove_monitor(monitor) };
        }
    }
}

/// # Safety
/// Main thread only.
unsafe fn install_global_monitor(handler: PointerHandler) -> id {
    let block = RcBlock::new(move |_event: id| {
        handler(mouse_location());
    });
    let monitor: id = msg_send![
        get_class("NSEvent"),
        addGlobalMonitorForEventsMatchingMask: MOUSE_MOVED_MASK,
        handler: &*block
    ];
    retain(monitor)
}

/// # Safety
/// Main thread only.
unsafe fn install_local_monitor(handler: PointerHandler) -> id {
    let block = RcBlock::new(move |event: id| -> id {
        handler(mouse_location());
        event
    });
    let monitor: id = msg_send![
        get_class("NSEvent"),
        addLocalMonitorForEventsMatchingMask: MOUSE_MOVED_MASK,
        handler: &*block
    ];
    retain(monitor)
}

unsafe fn retain(monitor: id) -> id {
    if monitor != nil {
        let _: id = msg_send![monitor, retain];
    }
    monitor
}

/// # Safety
/// `monitor` must come from `install_*_monitor` and not be removed yet.
unsafe fn remove_monitor(monitor: id) {
    if monitor == nil {
        return;
    }
    let _: () = msg_send![get_class("NSEvent"), removeMonitor: monitor];
    let _: () = msg_send![monitor, release];
}
