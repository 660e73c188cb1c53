//! NSNotificationCenter observers turned into typed events.

use tracing::debug;

use crate::events::{AppEvent, EventPublisher};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, RcBlock};

const SCREEN_PARAMETERS_CHANGED: &str = "NSApplicationDidChangeScreenParametersNotification";
const USER_DEFAULTS_CHANGED: &str = "NSUserDefaultsDidChangeNotification";

/// Block-based observers registered with the default center. Removed on
/// drop.
pub struct SystemObservers {
    tokens: Vec<id>,
}

impl SystemObservers {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Drop for SystemObservers {
    fn drop(&mut self) {
        unsafe {
            let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
            for token in self.tokens.drain(..) {
                let _: () = msg_send![center, removeObserver: token];
                let _: () = msg_send![token, release];
            }
        }
    }
}

/// Publish `ScreensChanged` on display reconfiguration and
/// `SettingsChanged` whenever any user default changes.
///
/// # Safety
/// Main thread only.
pub unsafe fn install_system_observers(publisher: &EventPublisher) -> SystemObservers {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let observe = |name: &str, event: AppEvent| -> id {
        let publisher = publisher.clone();
        let block = RcBlock::new(move |_note: id| {
            publisher.publish(event);
        });
        let ns_name = nsstring(name);
        // queue: nil delivers on the posting thread, which is main for both
        let token: id = msg_send![
            center,
            addObserverForName: &*ns_name,
            object: nil,
            queue: nil,
            usingBlock: &*block
        ];
        if token != nil {
            let _: id = msg_send![token, retain];
        }
        debug!(notification = name, "observer installed");
        token
    };

    let tokens = vec![
        observe(SCREEN_PARAMETERS_CHANGED, AppEvent::ScreensChanged),
        observe(USER_DEFAULTS_CHANGED, AppEvent::SettingsChanged),
    ]
    .into_iter()
    .filter(|t| *t != nil)
    .collect();

    SystemObservers { tokens }
}
