//! Helpers operating on every overlay view.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, NSApp, YES};

/// Apply a closure to every contentView whose class is NotchOverlayView.
///
/// # Safety
/// Main thread only, with a valid autorelease pool.
pub unsafe fn apply_to_all_views<F: Fn(id)>(f: F) {
    let app: id = NSApp();
    let windows: id = msg_send![app, windows];
    let wcount: usize = msg_send![windows, count];

    let notch_cls = get_class("NotchOverlayView");

    for j in 0..wcount {
        let win: id = msg_send![windows, objectAtIndex: j];
        let view: id = msg_send![win, contentView];
        if view != nil {
            let is_notch: bool = msg_send![view, isKindOfClass: notch_cls];
            if is_notch {
                f(view);
            }
        }
    }
}

/// Schedule a redraw of every overlay view.
///
/// # Safety
/// Main thread only.
pub unsafe fn redraw_all_views() {
    apply_to_all_views(|v| {
        let _: () = msg_send![v, setNeedsDisplay: YES];
    });
}
