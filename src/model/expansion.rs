//! The two discrete layouts of a notch overlay.

use std::fmt;

use super::constants::*;
use crate::geometry::Size;

/// Expansion state of one overlay. Starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpansionState {
    pub fn is_expanded(self) -> bool {
        self == ExpansionState::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            ExpansionState::Collapsed => ExpansionState::Expanded,
            ExpansionState::Expanded => ExpansionState::Collapsed,
        }
    }

    /// On-screen size of the overlay window in this state.
    pub fn window_size(self) -> Size {
        match self {
            ExpansionState::Collapsed => Size::new(COLLAPSED_WIDTH, COLLAPSED_HEIGHT),
            ExpansionState::Expanded => Size::new(EXPANDED_WIDTH, EXPANDED_HEIGHT),
        }
    }
}

impl From<bool> for ExpansionState {
    fn from(expanded: bool) -> Self {
        if expanded {
            ExpansionState::Expanded
        } else {
            ExpansionState::Collapsed
        }
    }
}

impl fmt::Display for ExpansionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionState::Collapsed => f.write_str("collapsed"),
            ExpansionState::Expanded => f.write_str("expanded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_collapsed() {
        assert_eq!(ExpansionState::default(), ExpansionState::Collapsed);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(ExpansionState::Collapsed.toggled(), ExpansionState::Expanded);
        assert_eq!(ExpansionState::Expanded.toggled(), ExpansionState::Collapsed);
    }

    #[test]
    fn window_sizes_match_layouts() {
        assert_eq!(ExpansionState::Collapsed.window_size(), Size::new(200.0, 38.0));
        assert_eq!(ExpansionState::Expanded.window_size(), Size::new(700.0, 250.0));
    }

    #[test]
    fn from_bool() {
        assert_eq!(ExpansionState::from(true), ExpansionState::Expanded);
        assert_eq!(ExpansionState::from(false), ExpansionState::Collapsed);
    }
}
