use std::fmt;

use tracing::trace;

use crate::model::constants::CONTENT_REVEAL_DELAY;
use crate::model::ExpansionState;

/// Widgets selectable from the expanded panel's tab row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotchModule {
    #[default]
    Shortcuts,
    Pomodoro,
    Music,
}

impl NotchModule {
    pub const ALL: [NotchModule; 3] = [
        NotchModule::Shortcuts,
        NotchModule::Pomodoro,
        NotchModule::Music,
    ];

    pub fn title(self) -> &'static str {
        match self {
            NotchModule::Shortcuts => "Shortcuts",
            NotchModule::Pomodoro => "Pomodoro",
            NotchModule::Music => "Music",
        }
    }

    /// SF Symbol shown on the tab.
    pub fn symbol_name(self) -> &'static str {
        match self {
            NotchModule::Shortcuts => "app.badge",
            NotchModule::Pomodoro => "brain.head.profile",
            NotchModule::Music => "music.note",
        }
    }

    /// Tab at position `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            NotchModule::Shortcuts => 0,
            NotchModule::Pomodoro => 1,
            NotchModule::Music => 2,
        }
    }
}

impl fmt::Display for NotchModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLayout {
    /// Single time row inside the collapsed pill.
    Compact,
    /// Header row plus module tabs, with `NotchModule` selected.
    Full(NotchModule),
}

/// What the overlay view should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentView {
    pub layout: ContentLayout,
    pub visible: bool,
}

/// Tracks layout, selected module and the delayed reveal after expansion.
#[derive(Debug, Clone)]
pub struct ContentPresenter {
    layout: ContentLayout,
    visible: bool,
    reveal_at: Option<f64>,
    selected: NotchModule,
}

impl ContentPresenter {
    pub fn new() -> Self {
        Self {
            layout: ContentLayout::Compact,
            visible: true,
            reveal_at: None,
            selected: NotchModule::default(),
        }
    }

    pub fn view(&self) -> ContentView {
        ContentView {
            layout: self.layout,
            visible: self.visible,
        }
    }

    pub fn selected(&self) -> NotchModule {
        self.selected
    }

    /// Switch layout for `state`. Expanded content stays hidden until the
    /// frame animation has finished; compact content shows at once.
    pub fn apply_state(&mut self, state: ExpansionState, now: f64) {
        match state {
            ExpansionState::Expanded => {
                self.layout = ContentLayout::Full(self.selected);
                self.visible = false;
                self.reveal_at = Some(now + CONTENT_REVEAL_DELAY);
            }
            ExpansionState::Collapsed => {
                self.layout = ContentLayout::Compact;
                self.visible = true;
                self.reveal_at = None;
            }
        }
    }

    /// Select a module. Takes effect in the full layout immediately and is
    /// remembered across collapse.
    pub fn select(&mut self, module: NotchModule) -> bool {
        if self.selected == module {
            return false;
        }
        self.selected = module;
        if let ContentLayout::Full(_) = self.layout {
            self.layout = ContentLayout::Full(module);
        }
        true
    }

    /// Reveal pending content once its delay has elapsed. Returns `true` if
    /// the view changed.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.reveal_at {
            Some(at) if now >= at => {
                trace!("content revealed");
                self.visible = true;
                self.reveal_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_reveal_pending(&self) -> bool {
        self.reveal_at.is_some()
    }
}

impl Default for ContentPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_compact_and_visible() {
        let p = ContentPresenter::new();
        assert_eq!(
            p.view(),
            ContentView {
                layout: ContentLayout::Compact,
                visible: true
            }
        );
    }

    #[test]
    fn expansion_reveals_after_delay() {
        let mut p = ContentPresenter::new();
        p.apply_state(ExpansionState::Expanded, 1.0);
        assert_eq!(p.view().layout, ContentLayout::Full(NotchModule::Shortcuts));
        assert!(!p.view().visible);

        assert!(!p.tick(1.1));
        assert!(!p.view().visible);
        assert!(p.tick(1.0 + CONTENT_REVEAL_DELAY));
        assert!(p.view().visible);
        assert!(!p.tick(5.0));
    }

    #[test]
    fn collapse_cancels_pending_reveal() {
        let mut p = ContentPresenter::new();
        p.apply_state(ExpansionState::Expanded, 0.0);
        p.apply_state(ExpansionState::Collapsed, 0.1);
        assert!(!p.is_reveal_pending());
        assert_eq!(p.view().layout, ContentLayout::Compact);
        assert!(p.view().visible);
        assert!(!p.tick(1.0));
    }

    #[test]
    fn selection_survives_collapse() {
        let mut p = ContentPresenter::new();
        p.apply_state(ExpansionState::Expanded, 0.0);
        assert!(p.select(NotchModule::Music));
        assert_eq!(p.view().layout, ContentLayout::Full(NotchModule::Music));
        assert!(!p.select(NotchModule::Music));

        p.apply_state(ExpansionState::Collapsed, 1.0);
        p.apply_state(ExpansionState::Expanded, 2.0);
        assert_eq!(p.view().layout, ContentLayout::Full(NotchModule::Music));
    }

    #[test]
    fn selecting_while_collapsed_keeps_compact_layout() {
        let mut p = ContentPresenter::new();
        p.select(NotchModule::Pomodoro);
        assert_eq!(p.view().layout, ContentLayout::Compact);
        assert_eq!(p.selected(), NotchModule::Pomodoro);
    }

    #[test]
    fn module_indices_round_trip() {
        for m in NotchModule::ALL {
            assert_eq!(NotchModule::from_index(m.index()), Some(m));
        }
        assert_eq!(NotchModule::from_index(3), None);
    }
}
