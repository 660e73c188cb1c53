//! Rebuild, settings and event routing across screen configurations.

mod common;

use std::rc::Rc;

use common::{builtin, external, FakeMonitors, FakePlatform, Harness, BUILTIN, EXTERNAL};
use dynamic_notch::animation::{Clock, ManualClock};
use dynamic_notch::content::{ContentLayout, NotchModule};
use dynamic_notch::error::Result;
use dynamic_notch::geometry::{window_frame, Point};
use dynamic_notch::handlers::dispatch_events;
use dynamic_notch::model::constants::PREF_SHOW_SECONDARY_SCREEN_NOTCH;
use dynamic_notch::storage::{MemorySettingsStore, SettingsStore};
use dynamic_notch::tracker::PointerHandler;
use dynamic_notch::{
    AppEvent, DisplayId, EventBus, ExpansionState, NotchError, ScreenDescriptor, TopologyManager,
};
use pretty_assertions::assert_eq;

fn displays(h: &Harness) -> Vec<u32> {
    h.manager.controllers().iter().map(|c| c.display().0).collect()
}

fn store_with_secondary(show: bool) -> MemorySettingsStore {
    let mut store = MemorySettingsStore::new();
    store.set_bool(PREF_SHOW_SECONDARY_SCREEN_NOTCH, show).unwrap();
    store
}

/// Settings store whose writes always fail, like a defaults database that
/// cannot be flushed.
struct ReadOnlyStore;

impl SettingsStore for ReadOnlyStore {
    fn bool_value(&self, _key: &str) -> Option<bool> {
        None
    }

    fn set_bool(&mut self, key: &str, _value: bool) -> Result<()> {
        Err(NotchError::Settings {
            key: key.to_owned(),
            reason: "read-only".to_owned(),
        })
    }
}

// === Rebuild ===

#[test]
fn one_overlay_per_screen_by_default() {
    let mut h = Harness::new(vec![builtin(), external()]);
    assert_eq!(h.manager.rebuild(), 2);
    assert_eq!(displays(&h), vec![1, 2]);
    assert_eq!(h.monitors.live_count(), 4);
    assert_eq!(h.manager.rebuild_count(), 1);
}

#[test]
fn secondary_screens_hidden_when_disabled() {
    let mut h = Harness::with_store(vec![builtin(), external()], store_with_secondary(false));
    assert_eq!(h.manager.rebuild(), 1);
    assert_eq!(displays(&h), vec![1]);
    assert_eq!(h.monitors.live_count(), 2);
}

#[test]
fn windows_are_created_collapsed_on_their_screen() {
    let mut h = Harness::new(vec![builtin(), external()]);
    h.manager.rebuild();
    let created: Vec<_> = h
        .manager
        .platform()
        .windows
        .iter()
        .map(|(id, frame, _)| (id.0, *frame))
        .collect();
    assert_eq!(
        created,
        vec![
            (1, window_frame(&BUILTIN, ExpansionState::Collapsed)),
            (2, window_frame(&EXTERNAL, ExpansionState::Collapsed)),
        ]
    );
}

#[test]
fn rebuild_replaces_every_controller() {
    let mut h = Harness::new(vec![builtin(), external()]);
    h.manager.rebuild();
    h.move_global(756.0, 960.0);
    assert_eq!(
        h.manager.controller(DisplayId(1)).unwrap().state(),
        ExpansionState::Expanded
    );

    assert_eq!(h.manager.on_screens_changed(), 2);
    assert_eq!(h.manager.rebuild_count(), 2);
    // fresh controllers start collapsed
    assert_eq!(
        h.manager.controller(DisplayId(1)).unwrap().state(),
        ExpansionState::Collapsed
    );

    let platform = h.manager.platform();
    assert_eq!(platform.windows.len(), 4);
    for (_, _, log) in &platform.windows[..2] {
        assert_eq!(log.borrow().closed, 1);
    }
    for (_, _, log) in &platform.windows[2..] {
        assert_eq!(log.borrow().closed, 0);
    }
}

#[test]
fn repeated_rebuilds_do_not_leak_subscriptions() {
    let mut h = Harness::new(vec![builtin(), external()]);
    for _ in 0..5 {
        h.manager.rebuild();
        assert_eq!(h.monitors.live_count(), 4);
    }
    assert_eq!(h.monitors.registry.borrow().installed_total, 20);
}

#[test]
fn subscriptions_removed_before_window_closes() {
    let mut h = Harness::new(vec![builtin()]);
    h.manager.rebuild();
    h.manager.shutdown();

    let log = Rc::clone(&h.manager.platform().windows[0].2);
    assert_eq!(log.borrow().closed, 1);
    assert_eq!(log.borrow().live_subscriptions_at_close, Some(0));
    assert_eq!(h.monitors.live_count(), 0);
    assert_eq!(h.manager.controller_count(), 0);
}

#[test]
fn screen_added_and_removed() {
    let mut h = Harness::new(vec![builtin()]);
    h.manager.rebuild();
    assert_eq!(displays(&h), vec![1]);

    h.manager.platform_mut().screens.push(external());
    h.manager.on_screens_changed();
    assert_eq!(displays(&h), vec![1, 2]);

    h.manager.platform_mut().screens.remove(0);
    h.manager.on_screens_changed();
    // the remaining screen takes over as primary
    assert_eq!(displays(&h), vec![2]);
    assert_eq!(h.monitors.live_count(), 2);
}

#[test]
fn no_screens_means_no_overlays() {
    let mut h = Harness::new(Vec::new());
    assert_eq!(h.manager.rebuild(), 0);
    assert_eq!(h.monitors.live_count(), 0);
    assert_eq!(h.manager.rebuild_count(), 1);
}

#[test]
fn duplicate_display_ids_get_one_overlay() {
    let twin = ScreenDescriptor::new(DisplayId(1), BUILTIN, false);
    let mut h = Harness::new(vec![builtin(), twin]);
    assert_eq!(h.manager.rebuild(), 1);
}

#[test]
fn window_creation_failure_skips_screen() {
    let mut h = Harness::new(vec![builtin(), external()]);
    h.manager.platform_mut().failing.insert(DisplayId(2));
    assert_eq!(h.manager.rebuild(), 1);
    assert_eq!(displays(&h), vec![1]);
    assert_eq!(h.monitors.live_count(), 2);
}

#[test]
fn stale_handlers_are_harmless_after_rebuild() {
    let mut h = Harness::new(vec![builtin()]);
    h.manager.rebuild();
    let stale: Vec<PointerHandler> = h
        .monitors
        .registry
        .borrow()
        .live
        .values()
        .map(|(_, handler)| Rc::clone(handler))
        .collect();

    h.manager.rebuild();
    for handler in &stale {
        handler(Point::new(756.0, 960.0));
    }
    assert_eq!(
        h.manager.controller(DisplayId(1)).unwrap().state(),
        ExpansionState::Collapsed
    );
}

#[test]
fn dropping_manager_tears_everything_down() {
    let h = {
        let mut h = Harness::new(vec![builtin(), external()]);
        h.manager.rebuild();
        h
    };
    let monitors = h.monitors.clone();
    drop(h);
    assert_eq!(monitors.live_count(), 0);
}

// === Settings ===

#[test]
fn unrelated_settings_change_is_ignored() {
    let mut h = Harness::new(vec![builtin(), external()]);
    h.manager.rebuild();
    h.manager.settings_mut().set_bool("launchAtLogin", true).unwrap();

    assert!(!h.manager.on_settings_changed());
    assert_eq!(h.manager.rebuild_count(), 1);
}

#[test]
fn secondary_setting_change_rebuilds() {
    let mut h = Harness::new(vec![builtin(), external()]);
    h.manager.rebuild();
    h.manager
        .settings_mut()
        .set_bool(PREF_SHOW_SECONDARY_SCREEN_NOTCH, false)
        .unwrap();

    assert!(h.manager.on_settings_changed());
    assert_eq!(displays(&h), vec![1]);
    assert_eq!(
        h.manager.applied_settings().map(|s| s.show_secondary_screen_notch),
        Some(false)
    );
}

#[test]
fn toggle_flips_persists_and_rebuilds() {
    let mut h = Harness::new(vec![builtin(), external()]);
    h.manager.rebuild();

    assert!(!h.manager.toggle_secondary_screens().unwrap());
    assert_eq!(
        h.manager.settings().bool_value(PREF_SHOW_SECONDARY_SCREEN_NOTCH),
        Some(false)
    );
    assert_eq!(displays(&h), vec![1]);

    assert!(h.manager.toggle_secondary_screens().unwrap());
    assert_eq!(displays(&h), vec![1, 2]);
    assert_eq!(h.manager.rebuild_count(), 3);
}

#[test]
fn failed_toggle_keeps_current_overlays() {
    let monitors = FakeMonitors::default();
    let platform = FakePlatform::new(vec![builtin(), external()], &monitors);
    let clock: Rc<dyn Clock> = Rc::new(ManualClock::new());
    let mut manager = TopologyManager::new(platform, monitors.clone(), ReadOnlyStore, clock);
    manager.rebuild();

    let err = manager.toggle_secondary_screens().unwrap_err();
    assert!(
        matches!(&err, NotchError::Settings { key, .. } if key == PREF_SHOW_SECONDARY_SCREEN_NOTCH),
        "{err}"
    );
    assert_eq!(manager.rebuild_count(), 1);
    assert_eq!(manager.controller_count(), 2);

    // the dispatcher logs the failure and carries on
    let bus = EventBus::new();
    bus.publisher().publish(AppEvent::ToggleSecondaryScreens);
    assert_eq!(dispatch_events(&bus, &mut manager), 1);
    assert_eq!(manager.rebuild_count(), 1);
    assert_eq!(monitors.live_count(), 4);
}

// === Logging ===

#[test]
fn lifecycle_logging_with_display_fields() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut h = Harness::new(vec![builtin()]);
        h.manager.rebuild();
        let stale: Vec<PointerHandler> = h
            .monitors
            .registry
            .borrow()
            .live
            .values()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        assert!(!h.manager.set_suppressed(DisplayId(9), true));
        h.manager.rebuild();
        for handler in &stale {
            handler(Point::new(756.0, 960.0));
        }
        h.manager.shutdown();
        assert_eq!(h.monitors.live_count(), 0);
    });
}

// === Event routing ===

#[test]
fn dispatch_routes_modal_events_to_one_overlay() {
    let mut h = Harness::new(vec![builtin(), external()]);
    h.manager.rebuild();
    let bus = EventBus::new();
    let publisher = bus.publisher();

    publisher.publish(AppEvent::ModalOpened(DisplayId(1)));
    assert_eq!(dispatch_events(&bus, &mut h.manager), 1);
    assert!(h.manager.controller(DisplayId(1)).unwrap().is_suppressed());
    assert!(!h.manager.controller(DisplayId(2)).unwrap().is_suppressed());

    h.move_global(756.0, 960.0);
    assert_eq!(
        h.manager.controller(DisplayId(1)).unwrap().state(),
        ExpansionState::Collapsed
    );

    publisher.publish(AppEvent::ModalClosed(DisplayId(1)));
    dispatch_events(&bus, &mut h.manager);
    h.move_global(756.0, 960.0);
    assert_eq!(
        h.manager.controller(DisplayId(1)).unwrap().state(),
        ExpansionState::Expanded
    );
}

#[test]
fn dispatch_handles_events_in_order() {
    let mut h = Harness::new(vec![builtin(), external()]);
    h.manager.rebuild();
    let bus = EventBus::new();
    let publisher = bus.publisher();

    publisher.publish(AppEvent::ToggleSecondaryScreens);
    publisher.publish(AppEvent::SettingsChanged);
    publisher.publish(AppEvent::ScreensChanged);
    assert_eq!(dispatch_events(&bus, &mut h.manager), 3);

    // toggle rebuilt once, the settings event saw nothing new, the screen
    // event rebuilt again
    assert_eq!(h.manager.rebuild_count(), 3);
    assert_eq!(displays(&h), vec![1]);
    assert_eq!(dispatch_events(&bus, &mut h.manager), 0);
}

#[test]
fn dispatch_module_selection() {
    let mut h = Harness::new(vec![builtin()]);
    h.manager.rebuild();
    h.move_global(756.0, 960.0);

    let bus = EventBus::new();
    bus.publisher()
        .publish(AppEvent::ModuleSelected(DisplayId(1), NotchModule::Music));
    dispatch_events(&bus, &mut h.manager);

    assert_eq!(
        h.manager.controller(DisplayId(1)).unwrap().content().layout,
        ContentLayout::Full(NotchModule::Music)
    );
}

#[test]
fn events_for_unknown_display_are_ignored() {
    let mut h = Harness::new(vec![builtin()]);
    h.manager.rebuild();
    let bus = EventBus::new();
    bus.publisher().publish(AppEvent::ModalOpened(DisplayId(42)));
    assert_eq!(dispatch_events(&bus, &mut h.manager), 1);
    assert!(!h.manager.controller(DisplayId(1)).unwrap().is_suppressed());
    assert_eq!(h.manager.rebuild_count(), 1);
}
