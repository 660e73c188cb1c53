//! Drawing for the overlay view.
//!
//! All coordinates are view-local with the origin top-left (the view is
//! flipped), matching the outline path and content layout helpers.

use chrono::Local;

use crate::content::{body_rect, tab_rect, NotchModule};
use crate::geometry::Rect;
use crate::model::constants::APP_DISPLAY_NAME;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nsstring, NSPoint, NSSize};
use crate::platform::macos::ffi::rect_to_ns;
use crate::shape::{NotchOutline, PathElement};

/// Text style for `draw_text`.
#[derive(Clone, Copy)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub alpha: f64,
}

impl TextStyle {
    pub const fn new(size: f64, bold: bool, alpha: f64) -> Self {
        Self { size, bold, alpha }
    }
}

const TIME_STYLE: TextStyle = TextStyle::new(13.0, true, 1.0);
const TITLE_STYLE: TextStyle = TextStyle::new(14.0, true, 1.0);
const DATE_STYLE: TextStyle = TextStyle::new(12.0, false, 0.6);
const TAB_STYLE: TextStyle = TextStyle::new(12.0, true, 1.0);
const BODY_STYLE: TextStyle = TextStyle::new(13.0, false, 0.7);

/// Fill the outline in opaque black.
///
/// # Safety
/// Main thread, inside `drawRect:` of a flipped view.
pub unsafe fn draw_outline(outline: &NotchOutline) {
    let path: id = msg_send![get_class("NSBezierPath"), bezierPath];

    for element in outline.path() {
        match element {
            PathElement::MoveTo(p) => {
                let _: () = msg_send![path, moveToPoint: NSPoint::new(p.x, p.y)];
            }
            PathElement::LineTo(p) => {
                let _: () = msg_send![path, lineToPoint: NSPoint::new(p.x, p.y)];
            }
            PathElement::Arc {
                center,
                radius,
                start_deg,
                end_deg,
            } => {
                let _: () = msg_send![
                    path,
                    appendBezierPathWithArcWithCenter: NSPoint::new(center.x, center.y),
                    radius: radius,
                    startAngle: start_deg,
                    endAngle: end_deg,
                    clockwise: end_deg < start_deg
                ];
            }
            PathElement::Close => {
                let _: () = msg_send![path, closePath];
            }
        }
    }

    let black: id = msg_send![get_class("NSColor"), blackColor];
    let _: () = msg_send![black, set];
    let _: () = msg_send![path, fill];
}

/// Time row inside the collapsed pill.
///
/// # Safety
/// Main thread, inside `drawRect:`.
pub unsafe fn draw_compact(width: f64, height: f64) {
    let now = Local::now().format("%H:%M").to_string();
    draw_text_centered(&now, Rect::new(0.0, 0.0, width, height), TIME_STYLE);
}

/// Header, module tabs and the selected module's body.
///
/// # Safety
/// Main thread, inside `drawRect:`.
pub unsafe fn draw_full(selected: NotchModule, width: f64, height: f64) {
    use crate::content::layout::{HEADER_HEIGHT, PANEL_PADDING};

    let header = Rect::new(PANEL_PADDING, 0.0, width - 2.0 * PANEL_PADDING, HEADER_HEIGHT);
    let title_size = text_size(APP_DISPLAY_NAME, TITLE_STYLE);
    draw_text(
        APP_DISPLAY_NAME,
        NSPoint::new(header.min_x(), (HEADER_HEIGHT - title_size.height) / 2.0),
        TITLE_STYLE,
    );

    let date = Local::now().format("%a %d %b  %H:%M").to_string();
    let date_size = text_size(&date, DATE_STYLE);
    draw_text(
        &date,
        NSPoint::new(header.max_x() - date_size.width, (HEADER_HEIGHT - date_size.height) / 2.0),
        DATE_STYLE,
    );

    for module in NotchModule::ALL {
        let r = tab_rect(module, width);
        let is_selected = module == selected;
        if is_selected {
            let pill: id = msg_send![
                get_class("NSBezierPath"),
                bezierPathWithRoundedRect: rect_to_ns(r),
                xRadius: 8.0f64,
                yRadius: 8.0f64
            ];
            let fill: id = msg_send![get_class("NSColor"), colorWithWhite: 1.0f64, alpha: 0.15f64];
            let _: () = msg_send![fill, set];
            let _: () = msg_send![pill, fill];
        }
        let style = TextStyle {
            alpha: if is_selected { 1.0 } else { 0.5 },
            ..TAB_STYLE
        };
        draw_text_centered(module.title(), r, style);
    }

    let body = body_rect(width, height);
    draw_text_centered(module_placeholder(selected), body, BODY_STYLE);
}

fn module_placeholder(module: NotchModule) -> &'static str {
    match module {
        NotchModule::Shortcuts => "No shortcuts yet",
        NotchModule::Pomodoro => "25:00",
        NotchModule::Music => "Nothing playing",
    }
}

/// Build the `NSFont` / `NSColor` attribute dictionary. Caller releases.
unsafe fn text_attributes(style: TextStyle) -> id {
    let font_class = get_class("NSFont");
    let font: id = if style.bold {
        msg_send![font_class, boldSystemFontOfSize: style.size]
    } else {
        msg_send![font_class, systemFontOfSize: style.size]
    };
    let color: id = msg_send![get_class("NSColor"), colorWithWhite: 1.0f64, alpha: style.alpha];

    let attrs: id = msg_send![get_class("NSMutableDictionary"), new];
    let font_key = nsstring("NSFont");
    let color_key = nsstring("NSColor");
    let _: () = msg_send![attrs, setObject: font, forKey: &*font_key];
    let _: () = msg_send![attrs, setObject: color, forKey: &*color_key];
    attrs
}

unsafe fn text_size(text: &str, style: TextStyle) -> NSSize {
    let attrs = text_attributes(style);
    let s = nsstring(text);
    let size: NSSize = msg_send![&*s, sizeWithAttributes: attrs];
    let _: () = msg_send![attrs, release];
    size
}

unsafe fn draw_text(text: &str, at: NSPoint, style: TextStyle) {
    let attrs = text_attributes(style);
    let s = nsstring(text);
    let _: () = msg_send![&*s, drawAtPoint: at, withAttributes: attrs];
    let _: () = msg_send![attrs, release];
}

unsafe fn draw_text_centered(text: &str, within: Rect, style: TextStyle) {
    let size = text_size(text, style);
    let origin = NSPoint::new(
        within.min_x() + (within.width() - size.width) / 2.0,
        within.min_y() + (within.height() - size.height) / 2.0,
    );
    draw_text(text, origin, style);
}
