//! Status bar (menu bar) item with dropdown menu.
//!
//! - Show on secondary screens (checkbox)
//! - Quit

use crate::model::constants::APP_DISPLAY_NAME;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, Sel, YES};

// NSControlStateValueOn / Off
const STATE_ON: i64 = 1;
const STATE_OFF: i64 = 0;

/// The installed status item. Removed from the menu bar on drop.
pub struct StatusBar {
    item: id,
    secondary_item: id,
}

impl StatusBar {
    /// Install the status item with its menu. Menu actions are sent to
    /// `target`, which must respond to `toggle_action` and `quit_action`.
    ///
    /// # Safety
    /// Main thread only, after NSApplication is initialised.
    pub unsafe fn install(
        target: id,
        toggle_action: Sel,
        quit_action: Sel,
        show_secondary: bool,
    ) -> Self {
        let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
        // NSVariableStatusItemLength = -1.0
        let item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
        let _: id = msg_send![item, retain];

        let button: id = msg_send![item, button];
        if button != nil {
            let symbol = nsstring("rectangle.topthird.inset.filled");
            let description = nsstring(APP_DISPLAY_NAME);
            let icon: id = msg_send![
                get_class("NSImage"),
                imageWithSystemSymbolName: &*symbol,
                accessibilityDescription: &*description
            ];
            if icon != nil {
                // Template so it adapts to light/dark mode
                let _: () = msg_send![icon, setTemplate: YES];
                let _: () = msg_send![button, setImage: icon];
            } else {
                let title = nsstring("Notch");
                let _: () = msg_send![button, setTitle: &*title];
            }
        }

        let menu: id = msg_send![get_class("NSMenu"), new];

        let secondary_item = menu_item("Show on Secondary Screens", toggle_action, target);
        let _: () = msg_send![menu, addItem: secondary_item];

        let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
        let _: () = msg_send![menu, addItem: separator];

        let quit_item = menu_item(&format!("Quit {APP_DISPLAY_NAME}"), quit_action, target);
        let _: () = msg_send![menu, addItem: quit_item];
        let _: () = msg_send![quit_item, release];

        let _: () = msg_send![item, setMenu: menu];
        let _: () = msg_send![menu, release];

        let bar = Self {
            item,
            secondary_item,
        };
        bar.set_secondary_checked(show_secondary);
        bar
    }

    /// Reflect the secondary-screen setting in the checkbox.
    pub fn set_secondary_checked(&self, checked: bool) {
        let state = if checked { STATE_ON } else { STATE_OFF };
        unsafe {
            let _: () = msg_send![self.secondary_item, setState: state];
        }
    }
}

impl Drop for StatusBar {
    fn drop(&mut self) {
        unsafe {
            let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
            let _: () = msg_send![status_bar, removeStatusItem: self.item];
            let _: () = msg_send![self.secondary_item, release];
            let _: () = msg_send![self.item, release];
        }
    }
}

/// Create a retained menu item sending `action` to `target`.
unsafe fn menu_item(title: &str, action: Sel, target: id) -> id {
    let title = nsstring(title);
    let key = nsstring("");
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: &*title,
        action: action,
        keyEquivalent: &*key
    ];
    let _: () = msg_send![item, setTarget: target];
    item
}
