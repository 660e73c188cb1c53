//! Plain geometry types in Cocoa screen coordinates (origin bottom-left,
//! y grows upwards).

use crate::lerp;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Point containment with `NSPointInRect` semantics: the min edges are
    /// inside, the max edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x < self.max_x() && p.y >= self.min_y() && p.y < self.max_y()
    }

    /// True when `other` lies entirely within this rectangle (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Rectangle of `size` whose top edge sits on `top` and whose horizontal
    /// centre is `mid_x`.
    pub fn top_centered(mid_x: f64, top: f64, size: Size) -> Self {
        Rect::new(mid_x - size.width / 2.0, top - size.height, size.width, size.height)
    }

    pub fn lerp(&self, to: &Rect, t: f64) -> Rect {
        Rect::new(
            lerp(self.origin.x, to.origin.x, t),
            lerp(self.origin.y, to.origin.y, t),
            lerp(self.size.width, to.size.width, t),
            lerp(self.size.height, to.size.height, t),
        )
    }
}
