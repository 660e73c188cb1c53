use crate::content::ContentView;
use crate::geometry::Rect;
use crate::shape::NotchOutline;

/// A borderless always-on-top window owned by one controller.
///
/// Implementations only apply what they are told; all animation happens
/// above this trait.
pub trait OverlayWindow {
    /// Move and resize the window, in global screen coordinates.
    fn set_frame(&mut self, frame: Rect);

    /// Replace the clipping outline and redraw.
    fn set_outline(&mut self, outline: NotchOutline);

    /// Replace the hosted content and redraw.
    fn set_content(&mut self, content: ContentView);

    fn order_front(&mut self);

    /// Close the window. Called exactly once, after every pointer
    /// subscription of the owning controller has been removed.
    fn close(&mut self);
}
