//! Placement of the expanded panel's rows, in the overlay view's local
//! coordinates (origin top-left, y down).

use super::NotchModule;
use crate::geometry::Rect;

/// Horizontal inset of the panel content.
pub const PANEL_PADDING: f64 = 24.0;
/// Height of the header row (title and date).
pub const HEADER_HEIGHT: f64 = 36.0;
/// Height of the module tab row below the header.
pub const TAB_ROW_HEIGHT: f64 = 28.0;

/// Rectangle of the tab for `module` inside a panel `panel_width` wide.
pub fn tab_rect(module: NotchModule, panel_width: f64) -> Rect {
    let inner = (panel_width - 2.0 * PANEL_PADDING).max(0.0);
    let tab_width = inner / NotchModule::ALL.len() as f64;
    Rect::new(
        PANEL_PADDING + tab_width * module.index() as f64,
        HEADER_HEIGHT,
        tab_width,
        TAB_ROW_HEIGHT,
    )
}

/// Tab under the local point (`x`, `y`), if any.
pub fn tab_at(x: f64, y: f64, panel_width: f64) -> Option<NotchModule> {
    NotchModule::ALL.into_iter().find(|m| {
        let r = tab_rect(*m, panel_width);
        x >= r.min_x() && x < r.max_x() && y >= r.min_y() && y < r.max_y()
    })
}

/// Area below the tab row where the selected module draws.
pub fn body_rect(panel_width: f64, panel_height: f64) -> Rect {
    let top = HEADER_HEIGHT + TAB_ROW_HEIGHT;
    Rect::new(
        PANEL_PADDING,
        top,
        (panel_width - 2.0 * PANEL_PADDING).max(0.0),
        (panel_height - top - PANEL_PADDING / 2.0).max(0.0),
    )
}
