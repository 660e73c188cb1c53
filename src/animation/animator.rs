//! "Animate property from A to B over D with easing E", stepped by whatever
//! timer the platform provides.
//!
//! Starting a new animation always begins from the value the property has
//! at that instant, so reversing mid-flight never jumps and never waits for
//! the previous animation to finish.

use super::Easing;
use crate::geometry::Rect;
use crate::lerp;

/// Values that can be blended linearly.
pub trait Interpolate: Copy {
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        lerp(*self, *to, t)
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self.lerp(to, t)
    }
}

/// One running animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation<T> {
    pub from: T,
    pub to: T,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl<T: Interpolate> Animation<T> {
    /// Linear progress in [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> T {
        let t = self.easing.apply(self.progress(now));
        self.from.interpolate(&self.to, t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// A property that is either at rest or animating towards a target.
#[derive(Debug, Clone)]
pub struct AnimatedValue<T> {
    value: T,
    animation: Option<Animation<T>>,
}

impl<T: Interpolate> AnimatedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            animation: None,
        }
    }

    /// Jump to `value`, cancelling any running animation.
    pub fn set_immediately(&mut self, value: T) {
        self.value = value;
        self.animation = None;
    }

    /// Start animating to `target`, superseding any running animation.
    pub fn animate_to(&mut self, target: T, now: f64, duration: f64, easing: Easing) {
        let from = self.value_at(now);
        self.animation = Some(Animation {
            from,
            to: target,
            start: now,
            duration,
            easing,
        });
        self.value = from;
    }

    /// Value at `now` without committing anything.
    pub fn value_at(&self, now: f64) -> T {
        match &self.animation {
            Some(anim) => anim.value_at(now),
            None => self.value,
        }
    }

    /// Where the property will settle.
    pub fn target(&self) -> T {
        match &self.animation {
            Some(anim) => anim.to,
            None => self.value,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&Animation<T>> {
        self.animation.as_ref()
    }

    /// Advance to `now`: commit the current value and drop a finished
    /// animation. Returns the committed value.
    pub fn tick(&mut self, now: f64) -> T {
        if let Some(anim) = self.animation {
            self.value = anim.value_at(now);
            if anim.is_finished(now) {
                self.value = anim.to;
                self.animation = None;
            }
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn linear_animation_progresses() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(10.0, 1.0, 2.0, Easing::Linear);
        assert!(approx_eq(v.value_at(1.0), 0.0));
        assert!(approx_eq(v.value_at(2.0), 5.0));
        assert!(approx_eq(v.value_at(3.0), 10.0));
        assert!(approx_eq(v.value_at(9.0), 10.0));
    }

    #[test]
    fn tick_settles_and_clears_animation() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(4.0, 0.0, 1.0, Easing::EaseInEaseOut);
        assert!(v.is_animating());
        v.tick(0.5);
        assert!(v.is_animating());
        assert_eq!(v.tick(1.0), 4.0);
        assert!(!v.is_animating());
    }

    #[test]
    fn retarget_starts_from_interpolated_value() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(10.0, 0.0, 1.0, Easing::Linear);
        v.animate_to(0.0, 0.4, 1.0, Easing::Linear);

        let anim = v.animation().copied().unwrap();
        assert!(approx_eq(anim.from, 4.0));
        assert!(approx_eq(anim.to, 0.0));
        assert!(approx_eq(v.value_at(0.4), 4.0));
        assert!(approx_eq(v.value_at(1.4), 0.0));
    }

    #[test]
    fn target_reports_final_value() {
        let mut v = AnimatedValue::new(1.0);
        assert_eq!(v.target(), 1.0);
        v.animate_to(3.0, 0.0, 1.0, Easing::Linear);
        assert_eq!(v.target(), 3.0);
    }

    #[test]
    fn set_immediately_cancels() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(10.0, 0.0, 1.0, Easing::Linear);
        v.set_immediately(7.0);
        assert!(!v.is_animating());
        assert_eq!(v.value_at(0.5), 7.0);
    }

    #[test]
    fn zero_duration_completes_at_once() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(2.0, 5.0, 0.0, Easing::EaseInEaseOut);
        assert_eq!(v.value_at(5.0), 2.0);
        assert_eq!(v.tick(5.0), 2.0);
        assert!(!v.is_animating());
    }

    #[test]
    fn rect_animation_interpolates_all_components() {
        let mut v = AnimatedValue::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        v.animate_to(Rect::new(10.0, 10.0, 20.0, 30.0), 0.0, 1.0, Easing::Linear);
        assert_eq!(v.value_at(0.5), Rect::new(5.0, 5.0, 15.0, 20.0));
    }
}
