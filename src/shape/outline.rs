//! The overlay outline: square top corners, rounded bottom corners.
//!
//! Paths are expressed in view-local coordinates with the origin at the
//! top-left and y growing downwards, which is what the flipped overlay view
//! draws in.

use crate::animation::Interpolate;
use crate::geometry::{Point, Size};
use crate::lerp;
use crate::model::constants::CORNER_RADIUS;
use crate::model::ExpansionState;

/// One segment of an outline path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc around `center`, swept from `start_deg` to `end_deg`.
    /// Angles are measured in the y-down local space, so 90° points down.
    Arc {
        center: Point,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
    },
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchOutline {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl NotchOutline {
    pub fn new(width: f64, height: f64, corner_radius: f64) -> Self {
        Self {
            width,
            height,
            corner_radius,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height, CORNER_RADIUS)
    }

    /// Outline matching the window size for `state`.
    pub fn for_state(state: ExpansionState) -> Self {
        Self::from_size(state.window_size())
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Corner radius actually drawn: never more than half the width or the
    /// full height, never negative.
    pub fn effective_radius(&self) -> f64 {
        self.corner_radius
            .min(self.width / 2.0)
            .min(self.height)
            .max(0.0)
    }

    /// Build the closed path, clockwise on screen starting at the top-left.
    pub fn path(&self) -> Vec<PathElement> {
        let w = self.width.max(0.0);
        let h = self.height.max(0.0);
        let r = self.effective_radius();

        vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::LineTo(Point::new(w, 0.0)),
            PathElement::LineTo(Point::new(w, h - r)),
            PathElement::Arc {
                center: Point::new(w - r, h - r),
                radius: r,
                start_deg: 0.0,
                end_deg: 90.0,
            },
            PathElement::LineTo(Point::new(r, h)),
            PathElement::Arc {
                center: Point::new(r, h - r),
                radius: r,
                start_deg: 90.0,
                end_deg: 180.0,
            },
            PathElement::Close,
        ]
    }
}

impl Interpolate for NotchOutline {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        NotchOutline {
            width: lerp(self.width, to.width, t),
            height: lerp(self.height, to.height, t),
            corner_radius: lerp(self.corner_radius, to.corner_radius, t),
        }
    }
}
