//! One overlay per eligible screen.
//!
//! The controller owns the view model, the surface and both pointer
//! subscriptions. Subscription closures and the state observer only hold
//! weak references, so a sample that races with teardown finds nothing to
//! act on and is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::{OverlaySurface, OverlayWindow};
use crate::animation::Clock;
use crate::content::{ContentView, NotchModule};
use crate::geometry::{Point, Rect};
use crate::model::{ExpansionState, NotchViewModel};
use crate::shape::NotchOutline;
use crate::topology::{DisplayId, ScreenDescriptor};
use crate::tracker::{MonitorToken, MouseTracker, PointerHandler, PointerMonitors, PointerSource};

pub struct OverlayController<W: OverlayWindow> {
    display: DisplayId,
    screen_frame: Rect,
    view_model: Rc<RefCell<NotchViewModel>>,
    surface: Rc<RefCell<OverlaySurface<W>>>,
    clock: Rc<dyn Clock>,
    subscriptions: Vec<MonitorToken>,
}

impl<W: OverlayWindow + 'static> OverlayController<W> {
    /// Build a controller for `screen`, show its window collapsed and start
    /// listening for global and local pointer movement.
    pub fn new(
        screen: &ScreenDescriptor,
        window: W,
        clock: Rc<dyn Clock>,
        monitors: &mut dyn PointerMonitors,
    ) -> Self {
        let view_model = Rc::new(RefCell::new(NotchViewModel::new()));
        let surface = Rc::new(RefCell::new(OverlaySurface::new(window, screen.frame)));
        surface.borrow_mut().present_initial();

        let weak_surface = Rc::downgrade(&surface);
        let observer_clock = Rc::clone(&clock);
        view_model
            .borrow_mut()
            .subscribe(Box::new(move |state: ExpansionState| {
                let Some(surface) = weak_surface.upgrade() else {
                    return;
                };
                match surface.try_borrow_mut() {
                    Ok(mut surface) => surface.transition_to(state, observer_clock.now()),
                    Err(_) => trace!(%state, "surface busy; transition not animated"),
                };
            }));

        let tracker = MouseTracker::new(screen.frame);
        let display_id = screen.id;
        let subscriptions = [PointerSource::Global, PointerSource::Local]
            .into_iter()
            .map(|source| {
                let handler = sample_handler(
                    display_id,
                    tracker,
                    Rc::downgrade(&view_model),
                    Rc::downgrade(&surface),
                );
                monitors.install(source, handler)
            })
            .collect();

        debug!(display = %display_id, "overlay controller created");

        Self {
            display: display_id,
            screen_frame: screen.frame,
            view_model,
            surface,
            clock,
            subscriptions,
        }
    }
}

impl<W: OverlayWindow> OverlayController<W> {
    pub fn display(&self) -> DisplayId {
        self.display
    }

    pub fn screen_frame(&self) -> Rect {
        self.screen_frame
    }

    pub fn state(&self) -> ExpansionState {
        self.view_model.borrow().state()
    }

    pub fn is_suppressed(&self) -> bool {
        self.view_model.borrow().is_suppressed()
    }

    /// Freeze or release pointer-driven transitions. Idempotent.
    pub fn set_suppressed(&self, suppressed: bool) {
        self.view_model.borrow_mut().set_suppressed(suppressed);
    }

    /// Handle for hosted content.
    pub fn handle(&self) -> NotchHandle {
        NotchHandle {
            view_model: Rc::downgrade(&self.view_model),
        }
    }

    pub fn select_module(&self, module: NotchModule) -> bool {
        self.surface.borrow_mut().select_module(module)
    }

    /// Advance animations to the clock's current time.
    pub fn tick(&self) -> bool {
        let now = self.clock.now();
        self.surface.borrow_mut().tick(now)
    }

    pub fn is_animating(&self) -> bool {
        self.surface.borrow().is_animating()
    }

    /// Frame the window is at right now, mid-animation included.
    pub fn current_frame(&self) -> Rect {
        self.surface.borrow().frame_at(self.clock.now())
    }

    /// Frame the window settles on for the current state.
    pub fn target_frame(&self) -> Rect {
        self.surface.borrow().target_frame()
    }

    pub fn current_outline(&self) -> NotchOutline {
        self.surface.borrow().outline_at(self.clock.now())
    }

    pub fn target_outline(&self) -> NotchOutline {
        self.surface.borrow().target_outline()
    }

    pub fn content(&self) -> ContentView {
        self.surface.borrow().content()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn with_window<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(self.surface.borrow().window())
    }

    /// Tear down: remove both pointer subscriptions, then close the window.
    pub fn destroy(mut self, monitors: &mut dyn PointerMonitors) {
        for token in self.subscriptions.drain(..) {
            if !monitors.remove(token) {
                warn!(display = %self.display, ?token, "pointer subscription already gone");
            }
        }
        self.surface.borrow_mut().close();
        debug!(display = %self.display, "overlay controller destroyed");
    }
}

impl<W: OverlayWindow> Drop for OverlayController<W> {
    fn drop(&mut self) {
        if !self.subscriptions.is_empty() {
            warn!(
                display = %self.display,
                count = self.subscriptions.len(),
                "overlay controller dropped without destroy; pointer subscriptions leaked"
            );
        }
    }
}

/// Samples delivered while the surface is mid-update (AppKit can call back
/// from inside `setFrame:display:`) are dropped before they reach the view
/// model, so state and surface never disagree.
fn sample_handler<W: OverlayWindow + 'static>(
    display_id: DisplayId,
    tracker: MouseTracker,
    view_model: Weak<RefCell<NotchViewModel>>,
    surface: Weak<RefCell<OverlaySurface<W>>>,
) -> PointerHandler {
    Rc::new(move |p: Point| {
        let (Some(rc), Some(surface)) = (view_model.upgrade(), surface.upgrade()) else {
            debug!(display = %display_id, "pointer sample for destroyed overlay dropped");
            return;
        };
        if surface.try_borrow_mut().is_err() {
            trace!(display = %display_id, "pointer sample during surface update dropped");
            return;
        }
        let Ok(mut vm) = rc.try_borrow_mut() else {
            trace!(display = %display_id, "re-entrant pointer sample dropped");
            return;
        };
        tracker.handle_sample(&mut vm, p);
    })
}

/// What hosted content gets to see of its overlay: the current state and
/// the suppression hook.
///
/// A handle outlives its controller harmlessly; once the controller is gone
/// reads return `None` and writes are ignored.
#[derive(Clone)]
pub struct NotchHandle {
    view_model: Weak<RefCell<NotchViewModel>>,
}

impl NotchHandle {
    pub fn state(&self) -> Option<ExpansionState> {
        self.view_model.upgrade().map(|vm| vm.borrow().state())
    }

    /// Set or clear the suppression flag. Whoever sets it must clear it.
    /// Returns `false` if the overlay no longer exists.
    pub fn set_suppressed(&self, suppressed: bool) -> bool {
        match self.view_model.upgrade() {
            Some(vm) => {
                vm.borrow_mut().set_suppressed(suppressed);
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.view_model.strong_count() > 0
    }
}
