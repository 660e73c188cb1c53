//! Fakes for driving the overlay pipeline without AppKit.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use dynamic_notch::animation::{Clock, ManualClock};
use dynamic_notch::content::ContentView;
use dynamic_notch::controller::OverlayWindow;
use dynamic_notch::error::{NotchError, Result};
use dynamic_notch::geometry::{Point, Rect};
use dynamic_notch::shape::NotchOutline;
use dynamic_notch::storage::MemorySettingsStore;
use dynamic_notch::topology::{DisplayId, DisplayPlatform, ScreenDescriptor, TopologyManager};
use dynamic_notch::tracker::{MonitorToken, PointerHandler, PointerMonitors, PointerSource};

pub const BUILTIN: Rect = Rect::new(0.0, 0.0, 1512.0, 982.0);
pub const EXTERNAL: Rect = Rect::new(1512.0, 0.0, 2560.0, 1440.0);

pub fn builtin() -> ScreenDescriptor {
    ScreenDescriptor::new(DisplayId(1), BUILTIN, true)
}

pub fn external() -> ScreenDescriptor {
    ScreenDescriptor::new(DisplayId(2), EXTERNAL, false)
}

// ============================================================================
// Monitors
// ============================================================================

#[derive(Default)]
pub struct Registry {
    pub live: BTreeMap<MonitorToken, (PointerSource, PointerHandler)>,
    pub installed_total: usize,
}

#[derive(Default, Clone)]
pub struct FakeMonitors {
    pub registry: Rc<RefCell<Registry>>,
    next: Rc<RefCell<u64>>,
}

impl FakeMonitors {
    /// Deliver a sample to every live subscription of `source`.
    pub fn emit(&self, source: PointerSource, p: Point) {
        let handlers: Vec<PointerHandler> = self
            .registry
            .borrow()
            .live
            .values()
            .filter(|(s, _)| *s == source)
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for h in handlers {
            h(p);
        }
    }

    pub fn live_count(&self) -> usize {
        self.registry.borrow().live.len()
    }

    pub fn live_of(&self, source: PointerSource) -> usize {
        self.registry
            .borrow()
            .live
            .values()
            .filter(|(s, _)| *s == source)
            .count()
    }
}

impl PointerMonitors for FakeMonitors {
    fn install(&mut self, source: PointerSource, handler: PointerHandler) -> MonitorToken {
        let mut next = self.next.borrow_mut();
        let token = MonitorToken(*next);
        *next += 1;
        let mut reg = self.registry.borrow_mut();
        reg.live.insert(token, (source, handler));
        reg.installed_total += 1;
        token
    }

    fn remove(&mut self, token: MonitorToken) -> bool {
        self.registry.borrow_mut().live.remove(&token).is_some()
    }

    fn active_count(&self) -> usize {
        self.live_count()
    }
}

// ============================================================================
// Windows
// ============================================================================

#[derive(Default)]
pub struct WindowLog {
    pub frames: Vec<Rect>,
    pub outlines: Vec<NotchOutline>,
    pub contents: Vec<ContentView>,
    pub ordered_front: usize,
    pub closed: usize,
    /// Live pointer subscriptions (across all screens) when `close` ran.
    pub live_subscriptions_at_close: Option<usize>,
    /// Called after every recorded frame, like an AppKit callback fired from
    /// inside `setFrame:display:`.
    pub on_set_frame: Option<Rc<dyn Fn()>>,
}

pub struct FakeWindow {
    pub display: DisplayId,
    pub log: Rc<RefCell<WindowLog>>,
    registry: Rc<RefCell<Registry>>,
}

impl FakeWindow {
    pub fn last_frame(&self) -> Option<Rect> {
        self.log.borrow().frames.last().copied()
    }
}

impl OverlayWindow for FakeWindow {
    fn set_frame(&mut self, frame: Rect) {
        let hook = {
            let mut log = self.log.borrow_mut();
            log.frames.push(frame);
            log.on_set_frame.clone()
        };
        if let Some(hook) = hook {
            hook();
        }
    }

    fn set_outline(&mut self, outline: NotchOutline) {
        self.log.borrow_mut().outlines.push(outline);
    }

    fn set_content(&mut self, content: ContentView) {
        self.log.borrow_mut().contents.push(content);
    }

    fn order_front(&mut self) {
        self.log.borrow_mut().ordered_front += 1;
    }

    fn close(&mut self) {
        let live = self.registry.borrow().live.len();
        let mut log = self.log.borrow_mut();
        log.closed += 1;
        log.live_subscriptions_at_close = Some(live);
    }
}

// ============================================================================
// Platform
// ============================================================================

pub struct FakePlatform {
    pub screens: Vec<ScreenDescriptor>,
    pub failing: HashSet<DisplayId>,
    /// Every window ever created, in creation order.
    pub windows: Vec<(DisplayId, Rect, Rc<RefCell<WindowLog>>)>,
    registry: Rc<RefCell<Registry>>,
}

impl FakePlatform {
    pub fn new(screens: Vec<ScreenDescriptor>, monitors: &FakeMonitors) -> Self {
        Self {
            screens,
            failing: HashSet::new(),
            windows: Vec::new(),
            registry: Rc::clone(&monitors.registry),
        }
    }

    pub fn logs_for(&self, display: DisplayId) -> Vec<Rc<RefCell<WindowLog>>> {
        self.windows
            .iter()
            .filter(|(d, _, _)| *d == display)
            .map(|(_, _, log)| Rc::clone(log))
            .collect()
    }
}

impl DisplayPlatform for FakePlatform {
    type Window = FakeWindow;

    fn screens(&self) -> Vec<ScreenDescriptor> {
        self.screens.clone()
    }

    fn create_window(&mut self, screen: &ScreenDescriptor, frame: Rect) -> Result<FakeWindow> {
        if self.failing.contains(&screen.id) {
            return Err(NotchError::WindowCreation(screen.id));
        }
        let log = Rc::new(RefCell::new(WindowLog::default()));
        self.windows.push((screen.id, frame, Rc::clone(&log)));
        Ok(FakeWindow {
            display: screen.id,
            log,
            registry: Rc::clone(&self.registry),
        })
    }
}

// ============================================================================
// Harness
// ============================================================================

pub type FakeManager = TopologyManager<FakePlatform, FakeMonitors, MemorySettingsStore>;

pub struct Harness {
    pub manager: FakeManager,
    pub monitors: FakeMonitors,
    pub clock: Rc<ManualClock>,
}

impl Harness {
    pub fn new(screens: Vec<ScreenDescriptor>) -> Self {
        Self::with_store(screens, MemorySettingsStore::new())
    }

    pub fn with_store(screens: Vec<ScreenDescriptor>, store: MemorySettingsStore) -> Self {
        let monitors = FakeMonitors::default();
        let platform = FakePlatform::new(screens, &monitors);
        let clock = Rc::new(ManualClock::new());
        let dyn_clock: Rc<dyn Clock> = clock.clone();
        let manager = TopologyManager::new(platform, monitors.clone(), store, dyn_clock);
        Self {
            manager,
            monitors,
            clock,
        }
    }

    /// Move the pointer as seen from another application.
    pub fn move_global(&self, x: f64, y: f64) {
        self.monitors.emit(PointerSource::Global, Point::new(x, y));
    }

    /// Move the pointer over one of our own windows.
    pub fn move_local(&self, x: f64, y: f64) {
        self.monitors.emit(PointerSource::Local, Point::new(x, y));
    }

    /// Advance the clock and run one UI tick.
    pub fn advance(&mut self, dt: f64) {
        self.clock.advance(dt);
        self.manager.tick();
    }
}

pub fn approx_rect(a: Rect, b: Rect) -> bool {
    (a.origin.x - b.origin.x).abs() < 1e-6
        && (a.origin.y - b.origin.y).abs() < 1e-6
        && (a.size.width - b.size.width).abs() < 1e-6
        && (a.size.height - b.size.height).abs() < 1e-6
}
