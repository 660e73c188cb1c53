//! NotchOverlayView: the content view of every overlay window.
//!
//! The view is flipped so its coordinates match the outline path and the
//! content layout (origin top-left). Everything it draws comes from ivars
//! written by `MacOverlayWindow`.

use std::ffi::c_void;

use tracing::debug;

use super::drawing::{draw_compact, draw_full, draw_outline};
use crate::content::{tab_at, ContentLayout, ContentView, NotchModule};
use crate::events::{AppEvent, EventPublisher};
use crate::platform::macos::ffi::bridge::{
    get_bool_ivar, get_class, id, msg_send, nil, sel, set_bool_ivar, AnyClass, AnyObject, Bool,
    ClassBuilder, NSPoint, NSRect, NSSize, ObjectExt, Sel, YES,
};
use crate::shape::NotchOutline;
use crate::topology::DisplayId;

const CLASS_NAME: &std::ffi::CStr = c"NotchOverlayView";

const LAYOUT_COMPACT: i32 = 0;
const LAYOUT_FULL: i32 = 1;

/// Register the NotchOverlayView class (once) and create an instance.
///
/// # Safety
/// Main thread only. `publisher` must stay valid until it is cleared with
/// `clear_publisher`.
pub unsafe fn create_notch_view(
    size: NSSize,
    display: DisplayId,
    publisher: *mut EventPublisher,
) -> id {
    let cls = notch_view_class();
    let view: id = msg_send![cls, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), size);
    let view: id = msg_send![view, initWithFrame: frame];
    if view == nil {
        return nil;
    }

    (*view).store_ivar::<f64>("_outlineWidth", size.width);
    (*view).store_ivar::<f64>("_outlineHeight", size.height);
    (*view).store_ivar::<f64>("_cornerRadius", 0.0);
    (*view).store_ivar::<i32>("_layout", LAYOUT_COMPACT);
    (*view).store_ivar::<i32>("_module", 0);
    set_bool_ivar(view, "_contentVisible", true);
    (*view).store_ivar::<u32>("_displayId", display.0);
    (*view).store_ivar::<*mut c_void>("_publisher", publisher as *mut c_void);
    view
}

unsafe fn notch_view_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(CLASS_NAME) {
        return cls;
    }
    let Some(mut builder) = ClassBuilder::new(CLASS_NAME, get_class("NSView")) else {
        return get_class("NotchOverlayView");
    };

    // ====== Instance Variables ======
    builder.add_ivar::<f64>(c"_outlineWidth");
    builder.add_ivar::<f64>(c"_outlineHeight");
    builder.add_ivar::<f64>(c"_cornerRadius");
    builder.add_ivar::<i32>(c"_layout"); // 0=compact, 1=full
    builder.add_ivar::<i32>(c"_module"); // NotchModule index
    builder.add_ivar::<u8>(c"_contentVisible"); // bool as u8
    builder.add_ivar::<u32>(c"_displayId");
    builder.add_ivar::<*mut c_void>(c"_publisher"); // *mut EventPublisher, owned by the window

    // ====== Methods ======
    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(isFlipped),
        is_flipped as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(acceptsFirstMouse:),
        accepts_first_mouse as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );
    builder.add_method(
        sel!(mouseDown:),
        mouse_down as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

/// Store a new outline and schedule a redraw.
///
/// # Safety
/// `view` must be a live NotchOverlayView.
pub unsafe fn set_view_outline(view: id, outline: &NotchOutline) {
    (*view).store_ivar::<f64>("_outlineWidth", outline.width);
    (*view).store_ivar::<f64>("_outlineHeight", outline.height);
    (*view).store_ivar::<f64>("_cornerRadius", outline.corner_radius);
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

/// Store new content and schedule a redraw.
///
/// # Safety
/// `view` must be a live NotchOverlayView.
pub unsafe fn set_view_content(view: id, content: &ContentView) {
    let (layout, module) = match content.layout {
        ContentLayout::Compact => (LAYOUT_COMPACT, 0),
        ContentLayout::Full(m) => (LAYOUT_FULL, m.index() as i32),
    };
    (*view).store_ivar::<i32>("_layout", layout);
    (*view).store_ivar::<i32>("_module", module);
    set_bool_ivar(view, "_contentVisible", content.visible);
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

/// Detach the view from its publisher before the publisher is freed.
///
/// # Safety
/// `view` must be a live NotchOverlayView.
pub unsafe fn clear_publisher(view: id) {
    (*view).store_ivar::<*mut c_void>("_publisher", std::ptr::null_mut());
}

unsafe fn stored_outline(this: &AnyObject) -> NotchOutline {
    NotchOutline::new(
        *this.load_ivar::<f64>("_outlineWidth"),
        *this.load_ivar::<f64>("_outlineHeight"),
        *this.load_ivar::<f64>("_cornerRadius"),
    )
}

unsafe fn stored_module(this: &AnyObject) -> NotchModule {
    let idx = *this.load_ivar::<i32>("_module");
    usize::try_from(idx)
        .ok()
        .and_then(NotchModule::from_index)
        .unwrap_or_default()
}

// ============================================================================
// Method implementations
// ============================================================================

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, _rect: NSRect) {
    let outline = stored_outline(this);
    draw_outline(&outline);

    if !get_bool_ivar(this as *const _ as id, "_contentVisible") {
        return;
    }
    match *this.load_ivar::<i32>("_layout") {
        LAYOUT_FULL => draw_full(stored_module(this), outline.width, outline.height),
        _ => draw_compact(outline.width, outline.height),
    }
}

unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    Bool::YES
}

unsafe extern "C-unwind" fn accepts_first_mouse(_this: &AnyObject, _cmd: Sel, _event: id) -> Bool {
    Bool::YES
}

/// Tab clicks in the expanded panel publish `ModuleSelected`.
unsafe extern "C-unwind" fn mouse_down(this: &AnyObject, _cmd: Sel, event: id) {
    if *this.load_ivar::<i32>("_layout") != LAYOUT_FULL {
        return;
    }
    let publisher = *this.load_ivar::<*mut c_void>("_publisher") as *mut EventPublisher;
    if publisher.is_null() {
        return;
    }

    let in_window: NSPoint = msg_send![event, locationInWindow];
    let local: NSPoint = msg_send![this, convertPoint: in_window, fromView: nil];
    let width = *this.load_ivar::<f64>("_outlineWidth");

    if let Some(module) = tab_at(local.x, local.y, width) {
        let display_id = DisplayId(*this.load_ivar::<u32>("_displayId"));
        debug!(display = %display_id, %module, "tab clicked");
        (*publisher).publish(AppEvent::ModuleSelected(display_id, module));
    }
}
