//! Animated presentation of one overlay window.

use crate::animation::{AnimatedValue, Easing};
use crate::content::{ContentPresenter, ContentView, NotchModule};
use crate::geometry::{window_frame, Rect};
use crate::model::constants::TRANSITION_DURATION;
use crate::model::ExpansionState;
use crate::shape::{NotchOutline, ShapeRenderer};

use super::OverlayWindow;

pub struct OverlaySurface<W: OverlayWindow> {
    window: W,
    screen_frame: Rect,
    frame: AnimatedValue<Rect>,
    shape: ShapeRenderer,
    content: ContentPresenter,
}

impl<W: OverlayWindow> OverlaySurface<W> {
    pub fn new(window: W, screen_frame: Rect) -> Self {
        let state = ExpansionState::Collapsed;
        Self {
            window,
            screen_frame,
            frame: AnimatedValue::new(window_frame(&screen_frame, state)),
            shape: ShapeRenderer::new(NotchOutline::for_state(state)),
            content: ContentPresenter::new(),
        }
    }

    /// Put the window at its collapsed position and show it, without
    /// animating.
    pub fn present_initial(&mut self) {
        let frame = window_frame(&self.screen_frame, ExpansionState::Collapsed);
        let outline = NotchOutline::for_state(ExpansionState::Collapsed);
        self.frame.set_immediately(frame);
        self.shape.set_immediately(outline);

        self.window.set_frame(frame);
        self.window.set_outline(outline);
        self.window.set_content(self.content.view());
        self.window.order_front();
    }

    /// Start animating towards the layout for `state`, from wherever the
    /// frame and outline are at `now`.
    pub fn transition_to(&mut self, state: ExpansionState, now: f64) {
        let target = window_frame(&self.screen_frame, state);
        self.frame
            .animate_to(target, now, TRANSITION_DURATION, Easing::EaseInEaseOut);
        self.shape.retarget(NotchOutline::for_state(state), now);
        self.content.apply_state(state, now);
        self.window.set_content(self.content.view());
    }

    /// Push the frame, outline and content for `now` to the window.
    /// Returns `true` while anything is still in flight.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.frame.is_animating() {
            let frame = self.frame.tick(now);
            self.window.set_frame(frame);
        }
        if self.shape.is_animating() {
            let outline = self.shape.tick(now);
            self.window.set_outline(outline);
        }
        if self.content.tick(now) {
            self.window.set_content(self.content.view());
        }
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.frame.is_animating() || self.shape.is_animating() || self.content.is_reveal_pending()
    }

    pub fn select_module(&mut self, module: NotchModule) -> bool {
        if !self.content.select(module) {
            return false;
        }
        self.window.set_content(self.content.view());
        true
    }

    pub fn frame_at(&self, now: f64) -> Rect {
        self.frame.value_at(now)
    }

    pub fn target_frame(&self) -> Rect {
        self.frame.target()
    }

    pub fn outline_at(&self, now: f64) -> NotchOutline {
        self.shape.outline_at(now)
    }

    pub fn target_outline(&self) -> NotchOutline {
        self.shape.target()
    }

    pub fn content(&self) -> ContentView {
        self.content.view()
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn close(&mut self) {
        self.window.close();
    }
}
