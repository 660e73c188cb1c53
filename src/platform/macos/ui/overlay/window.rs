//! Borderless overlay NSWindow and the AppKit `DisplayPlatform`.

use tracing::debug;

use super::view::{clear_publisher, create_notch_view, set_view_content, set_view_outline};
use crate::content::ContentView;
use crate::controller::OverlayWindow;
use crate::error::{NotchError, Result};
use crate::events::EventPublisher;
use crate::geometry::Rect;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, NO, YES};
use crate::platform::macos::ffi::{rect_to_ns, screen_descriptors, STATUS_WINDOW_LEVEL};
use crate::shape::NotchOutline;
use crate::topology::{DisplayId, DisplayPlatform, ScreenDescriptor};

// NSWindowCollectionBehavior bits
const CAN_JOIN_ALL_SPACES: u64 = 1 << 0;
const STATIONARY: u64 = 1 << 4;
const IGNORES_CYCLE: u64 = 1 << 6;
const FULL_SCREEN_AUXILIARY: u64 = 1 << 8;

/// One overlay NSWindow with a NotchOverlayView as content.
pub struct MacOverlayWindow {
    window: id,
    view: id,
    display: DisplayId,
    // Boxed so the view's `_publisher` ivar has a stable address
    _publisher: Box<EventPublisher>,
    closed: bool,
}

impl MacOverlayWindow {
    /// Create the window at `frame` (global coordinates). Not shown yet.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn create(
        display_id: DisplayId,
        frame: Rect,
        publisher: EventPublisher,
    ) -> Result<Self> {
        // NSWindowStyleMaskBorderless = 0, NSBackingStoreBuffered = 2
        let style_mask: u64 = 0;
        let backing: u64 = 2;

        let window: id = msg_send![get_class("NSWindow"), alloc];
        let window: id = msg_send![
            window,
            initWithContentRect: rect_to_ns(frame),
            styleMask: style_mask,
            backing: backing,
            defer: NO
        ];
        if window == nil {
            return Err(NotchError::WindowCreation(display_id));
        }

        let _: () = msg_send![window, setReleasedWhenClosed: NO];
        let _: () = msg_send![window, setOpaque: NO];
        let clear_color: id = msg_send![get_class("NSColor"), clearColor];
        let _: () = msg_send![window, setBackgroundColor: clear_color];
        let _: () = msg_send![window, setHasShadow: NO];
        let _: () = msg_send![window, setLevel: STATUS_WINDOW_LEVEL];
        let _: () = msg_send![window, setIgnoresMouseEvents: NO];
        let _: () = msg_send![window, setAcceptsMouseMovedEvents: YES];
        let behavior = CAN_JOIN_ALL_SPACES | STATIONARY | IGNORES_CYCLE | FULL_SCREEN_AUXILIARY;
        let _: () = msg_send![window, setCollectionBehavior: behavior];

        let mut publisher = Box::new(publisher);
        let content_rect = rect_to_ns(frame);
        let view = create_notch_view(content_rect.size, display_id, &mut *publisher);
        if view == nil {
            let _: () = msg_send![window, release];
            return Err(NotchError::WindowCreation(display_id));
        }
        let _: () = msg_send![window, setContentView: view];
        // The window retains its content view
        let _: () = msg_send![view, release];

        debug!(display = %display_id, "overlay window created");
        Ok(Self {
            window,
            view,
            display: display_id,
            _publisher: publisher,
            closed: false,
        })
    }

    pub fn display(&self) -> DisplayId {
        self.display
    }

    unsafe fn close_window(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        clear_publisher(self.view);
        let _: () = msg_send![self.window, orderOut: nil];
        let _: () = msg_send![self.window, close];
        let _: () = msg_send![self.window, release];
        debug!(display = %self.display, "overlay window closed");
    }
}

impl OverlayWindow for MacOverlayWindow {
    fn set_frame(&mut self, frame: Rect) {
        if self.closed {
            return;
        }
        unsafe {
            let _: () = msg_send![self.window, setFrame: rect_to_ns(frame), display: YES];
        }
    }

    fn set_outline(&mut self, outline: NotchOutline) {
        if self.closed {
            return;
        }
        unsafe { set_view_outline(self.view, &outline) };
    }

    fn set_content(&mut self, content: ContentView) {
        if self.closed {
            return;
        }
        unsafe { set_view_content(self.view, &content) };
    }

    fn order_front(&mut self) {
        if self.closed {
            return;
        }
        unsafe {
            let _: () = msg_send![self.window, orderFrontRegardless];
        }
    }

    fn close(&mut self) {
        unsafe { self.close_window() };
    }
}

impl Drop for MacOverlayWindow {
    fn drop(&mut self) {
        unsafe { self.close_window() };
    }
}

/// Screens from NSScreen, windows from `MacOverlayWindow`.
pub struct MacDisplayPlatform {
    publisher: EventPublisher,
}

impl MacDisplayPlatform {
    pub fn new(publisher: EventPublisher) -> Self {
        Self { publisher }
    }
}

impl DisplayPlatform for MacDisplayPlatform {
    type Window = MacOverlayWindow;

    fn screens(&self) -> Vec<ScreenDescriptor> {
        unsafe { screen_descriptors() }
    }

    fn create_window(&mut self, screen: &ScreenDescriptor, frame: Rect) -> Result<Self::Window> {
        unsafe { MacOverlayWindow::create(screen.id, frame, self.publisher.clone()) }
    }
}
