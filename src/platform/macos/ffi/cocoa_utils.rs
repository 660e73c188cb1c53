//! Cocoa utility functions: pointer location, screen enumeration and
//! window levels.

use core_graphics::display::CGDisplay;
use objc2_app_kit::NSEvent;

use super::bridge::{get_class, id, msg_send, nil, nsstring, NSRect};
use crate::geometry::{Point, Rect};
use crate::topology::{DisplayId, ScreenDescriptor};

/// `NSStatusWindowLevel`: above the menu bar, below pop-up menus.
pub const STATUS_WINDOW_LEVEL: i64 = 25;

/// Global mouse position in Cocoa coordinates (origin bottom-left).
pub fn mouse_location() -> Point {
    let p = NSEvent::mouseLocation();
    Point::new(p.x, p.y)
}

pub fn rect_from_ns(r: NSRect) -> Rect {
    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
}

pub fn rect_to_ns(r: Rect) -> NSRect {
    NSRect::new(
        super::bridge::NSPoint::new(r.origin.x, r.origin.y),
        super::bridge::NSSize::new(r.size.width, r.size.height),
    )
}

/// Stable CGDirectDisplayID for an NSScreen.
///
/// Survives Space switches and sleep/wake.
///
/// # Safety
/// `screen` must be a valid NSScreen pointer.
pub unsafe fn display_id_for_screen(screen: id) -> u32 {
    let desc: id = msg_send![screen, deviceDescription];
    let key = nsstring("NSScreenNumber");
    let num: id = msg_send![desc, objectForKey: &*key];
    if num == nil {
        0
    } else {
        let v: u64 = msg_send![num, unsignedIntegerValue];
        v as u32
    }
}

/// The display carrying the menu bar.
pub fn main_display_id() -> u32 {
    CGDisplay::main().id
}

/// Enumerate attached screens, in NSScreen order.
///
/// # Safety
/// Main thread only.
pub unsafe fn screen_descriptors() -> Vec<ScreenDescriptor> {
    let screens: id = msg_send![get_class("NSScreen"), screens];
    if screens == nil {
        return Vec::new();
    }
    let count: usize = msg_send![screens, count];
    let main_id = main_display_id();

    (0..count)
        .map(|i| {
            let screen: id = msg_send![screens, objectAtIndex: i];
            let frame: NSRect = msg_send![screen, frame];
            let did = display_id_for_screen(screen);
            ScreenDescriptor::new(DisplayId(did), rect_from_ns(frame), did == main_id)
        })
        .collect()
}
