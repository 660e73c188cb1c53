//! Owner of every overlay controller.
//!
//! Any topology-affecting event tears everything down and rebuilds from a
//! fresh screen enumeration. There is no incremental diffing.

use std::rc::Rc;

use tracing::{debug, info, warn};

use super::{eligible_screens, DisplayId, DisplayPlatform};
use crate::animation::Clock;
use crate::content::NotchModule;
use crate::controller::{NotchHandle, OverlayController};
use crate::error::Result;
use crate::geometry::window_frame;
use crate::model::constants::PREF_SHOW_SECONDARY_SCREEN_NOTCH;
use crate::model::{ExpansionState, NotchSettings};
use crate::storage::SettingsStore;
use crate::tracker::PointerMonitors;

pub struct TopologyManager<P, M, S>
where
    P: DisplayPlatform,
    M: PointerMonitors,
    S: SettingsStore,
{
    platform: P,
    monitors: M,
    settings: S,
    clock: Rc<dyn Clock>,
    controllers: Vec<OverlayController<P::Window>>,
    applied: Option<NotchSettings>,
    rebuilds: u64,
}

impl<P, M, S> TopologyManager<P, M, S>
where
    P: DisplayPlatform,
    M: PointerMonitors,
    S: SettingsStore,
{
    /// Create an empty manager. Nothing is shown until `rebuild` runs.
    pub fn new(platform: P, monitors: M, settings: S, clock: Rc<dyn Clock>) -> Self {
        Self {
            platform,
            monitors,
            settings,
            clock,
            controllers: Vec::new(),
            applied: None,
            rebuilds: 0,
        }
    }

    /// Destroy every controller, re-enumerate screens and create one
    /// controller per eligible screen. Returns the new controller count.
    ///
    /// A screen whose window cannot be created is skipped.
    pub fn rebuild(&mut self) -> usize {
        self.destroy_all();

        let settings = NotchSettings::load(&self.settings);
        let screens = self.platform.screens();
        let eligible = eligible_screens(&screens, &settings);

        for screen in &eligible {
            let frame = window_frame(&screen.frame, ExpansionState::Collapsed);
            match self.platform.create_window(screen, frame) {
                Ok(window) => {
                    let controller = OverlayController::new(
                        screen,
                        window,
                        Rc::clone(&self.clock),
                        &mut self.monitors,
                    );
                    self.controllers.push(controller);
                }
                Err(err) => warn!(display = %screen.id, %err, "skipping screen"),
            }
        }

        self.applied = Some(settings);
        self.rebuilds += 1;
        info!(
            screens = screens.len(),
            eligible = eligible.len(),
            controllers = self.controllers.len(),
            show_secondary = settings.show_secondary_screen_notch,
            "topology rebuilt"
        );
        self.controllers.len()
    }

    /// Display configuration changed.
    pub fn on_screens_changed(&mut self) -> usize {
        debug!("screen parameters changed");
        self.rebuild()
    }

    /// Some persisted setting changed. Rebuilds only when the effective
    /// settings differ from those applied at the last rebuild. Returns
    /// whether a rebuild happened.
    pub fn on_settings_changed(&mut self) -> bool {
        let current = NotchSettings::load(&self.settings);
        if self.applied == Some(current) {
            debug!("settings changed but overlay settings unchanged");
            return false;
        }
        self.rebuild();
        true
    }

    /// Flip the secondary-screen setting, persist it and rebuild. Returns
    /// the new value.
    pub fn toggle_secondary_screens(&mut self) -> Result<bool> {
        let current = NotchSettings::load(&self.settings).show_secondary_screen_notch;
        let next = !current;
        self.settings
            .set_bool(PREF_SHOW_SECONDARY_SCREEN_NOTCH, next)?;
        info!(show_secondary = next, "secondary screen overlays toggled");
        self.rebuild();
        Ok(next)
    }

    /// Set the suppression flag of the overlay on `display_id`. Returns `false`
    /// if no overlay is bound to that display.
    pub fn set_suppressed(&mut self, display_id: DisplayId, suppressed: bool) -> bool {
        match self.controller(display_id) {
            Some(c) => {
                c.set_suppressed(suppressed);
                true
            }
            None => {
                debug!(display = %display_id, suppressed, "no overlay for display");
                false
            }
        }
    }

    pub fn select_module(&mut self, display: DisplayId, module: NotchModule) -> bool {
        match self.controller(display) {
            Some(c) => c.select_module(module),
            None => false,
        }
    }

    /// Advance every overlay's animations. Returns `true` while any is still
    /// in flight.
    pub fn tick(&mut self) -> bool {
        self.controllers
            .iter()
            .fold(false, |animating, c| c.tick() || animating)
    }

    /// Destroy every controller. Used on quit.
    pub fn shutdown(&mut self) {
        self.destroy_all();
        self.applied = None;
    }

    pub fn controller(&self, display: DisplayId) -> Option<&OverlayController<P::Window>> {
        self.controllers.iter().find(|c| c.display() == display)
    }

    pub fn controllers(&self) -> &[OverlayController<P::Window>] {
        &self.controllers
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    pub fn handle(&self, display: DisplayId) -> Option<NotchHandle> {
        self.controller(display).map(|c| c.handle())
    }

    /// Settings in effect since the last rebuild.
    pub fn applied_settings(&self) -> Option<NotchSettings> {
        self.applied
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn monitors(&self) -> &M {
        &self.monitors
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut S {
        &mut self.settings
    }

    fn destroy_all(&mut self) {
        if self.controllers.is_empty() {
            return;
        }
        debug!(count = self.controllers.len(), "destroying overlay controllers");
        for controller in self.controllers.drain(..) {
            controller.destroy(&mut self.monitors);
        }
    }
}

impl<P, M, S> Drop for TopologyManager<P, M, S>
where
    P: DisplayPlatform,
    M: PointerMonitors,
    S: SettingsStore,
{
    fn drop(&mut self) {
        self.destroy_all();
    }
}
