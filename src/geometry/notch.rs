//! Hit rectangles and window frames derived from a screen frame.
//!
//! Nothing here is stored: callers recompute whenever the screen frame may
//! have changed.

use super::{Point, Rect, Size};
use crate::model::constants::*;
use crate::model::ExpansionState;

/// Hit-test regions for one screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerGeometry {
    /// Entering this strip while collapsed expands the overlay.
    pub trigger_rect: Rect,
    /// Leaving this region while expanded collapses the overlay. Includes
    /// the top tolerance band.
    pub expanded_rect: Rect,
    /// State the geometry was computed for.
    pub state: ExpansionState,
}

impl TriggerGeometry {
    /// State the pointer at `p` asks for, or `None` if it asks for nothing.
    ///
    /// Collapsed → Expanded only when `p` is inside the trigger strip;
    /// Expanded → Collapsed only when `p` is outside the padded expanded
    /// region. At most one transition is produced per evaluation.
    pub fn requested_transition(&self, p: Point) -> Option<ExpansionState> {
        match self.state {
            ExpansionState::Expanded if !self.expanded_rect.contains(p) => {
                Some(ExpansionState::Collapsed)
            }
            ExpansionState::Collapsed if self.trigger_rect.contains(p) => {
                Some(ExpansionState::Expanded)
            }
            _ => None,
        }
    }
}

/// Compute the trigger and expanded hit rectangles for `screen_frame`.
///
/// Both rectangles are horizontally centred on the screen. The trigger strip
/// is the top `TRIGGER_HEIGHT` points of the screen; the expanded region is
/// the expanded window area extended `EXPANDED_TOP_TOLERANCE` points above
/// the top edge.
pub fn compute_rects(screen_frame: &Rect, state: ExpansionState) -> TriggerGeometry {
    let mid_x = screen_frame.mid_x();
    let top = screen_frame.max_y();

    let trigger_rect = Rect::top_centered(mid_x, top, Size::new(COLLAPSED_WIDTH, TRIGGER_HEIGHT));

    let expanded_rect = Rect::new(
        mid_x - EXPANDED_WIDTH / 2.0,
        top - EXPANDED_HEIGHT,
        EXPANDED_WIDTH,
        EXPANDED_HEIGHT + EXPANDED_TOP_TOLERANCE,
    );

    TriggerGeometry {
        trigger_rect,
        expanded_rect,
        state,
    }
}

/// On-screen rectangle of the overlay window for `state`: top-anchored and
/// horizontally centred on the screen.
pub fn window_frame(screen_frame: &Rect, state: ExpansionState) -> Rect {
    Rect::top_centered(screen_frame.mid_x(), screen_frame.max_y(), state.window_size())
}
