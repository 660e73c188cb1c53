//! Drives the outline in step with the window frame animation.
//!
//! The renderer only knows the last committed outline and where it is
//! headed. It never looks at the view model.

use super::NotchOutline;
use crate::animation::{AnimatedValue, Easing};
use crate::model::constants::TRANSITION_DURATION;

#[derive(Debug, Clone)]
pub struct ShapeRenderer {
    outline: AnimatedValue<NotchOutline>,
}

impl ShapeRenderer {
    pub fn new(initial: NotchOutline) -> Self {
        Self {
            outline: AnimatedValue::new(initial),
        }
    }

    /// Interpolate towards `target`, starting from whatever is on screen at
    /// `now`.
    pub fn retarget(&mut self, target: NotchOutline, now: f64) {
        self.outline
            .animate_to(target, now, TRANSITION_DURATION, Easing::EaseInEaseOut);
    }

    pub fn set_immediately(&mut self, outline: NotchOutline) {
        self.outline.set_immediately(outline);
    }

    /// Outline to draw at `now`.
    pub fn outline_at(&self, now: f64) -> NotchOutline {
        self.outline.value_at(now)
    }

    /// Outline the renderer will settle on.
    pub fn target(&self) -> NotchOutline {
        self.outline.target()
    }

    pub fn is_animating(&self) -> bool {
        self.outline.is_animating()
    }

    /// Commit the outline for `now` and return it.
    pub fn tick(&mut self, now: f64) -> NotchOutline {
        self.outline.tick(now)
    }
}
