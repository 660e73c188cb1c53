use std::collections::HashSet;
use std::fmt;

use crate::controller::OverlayWindow;
use crate::error::Result;
use crate::geometry::Rect;
use crate::model::NotchSettings;

/// Platform identifier of a physical display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayId(pub u32);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One attached display as reported by the platform.
///
/// Only valid until the next topology change; never keep one across a
/// rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenDescriptor {
    pub id: DisplayId,
    /// Full frame in global screen coordinates.
    pub frame: Rect,
    /// The screen carrying the menu bar.
    pub is_primary: bool,
}

impl ScreenDescriptor {
    pub fn new(id: DisplayId, frame: Rect, is_primary: bool) -> Self {
        Self {
            id,
            frame,
            is_primary,
        }
    }
}

/// Screen enumeration and window creation.
pub trait DisplayPlatform {
    type Window: OverlayWindow + 'static;

    /// Currently attached screens, in platform order.
    fn screens(&self) -> Vec<ScreenDescriptor>;

    /// Create an overlay window on `screen` at `frame`. The window is not
    /// shown until the controller orders it front.
    fn create_window(&mut self, screen: &ScreenDescriptor, frame: Rect) -> Result<Self::Window>;
}

/// Screens that get an overlay under `settings`.
///
/// The primary screen always qualifies; if no screen is flagged primary the
/// first one is. Other screens qualify only when secondary overlays are
/// enabled. A display id reported twice is kept once.
pub fn eligible_screens(
    screens: &[ScreenDescriptor],
    settings: &NotchSettings,
) -> Vec<ScreenDescriptor> {
    let primary_index = screens.iter().position(|s| s.is_primary).unwrap_or(0);
    let mut seen = HashSet::new();

    screens
        .iter()
        .enumerate()
        .filter(|(i, _)| *i == primary_index || settings.show_secondary_screen_notch)
        .filter(|(_, s)| seen.insert(s.id))
        .map(|(i, s)| ScreenDescriptor {
            is_primary: i == primary_index,
            ..*s
        })
        .collect()
}
