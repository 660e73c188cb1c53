//! Pointer subscription seam.

use std::fmt;
use std::rc::Rc;

use crate::geometry::Point;

/// Where a pointer sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Movement while another application is frontmost.
    Global,
    /// Movement delivered to this application's own windows.
    Local,
}

impl fmt::Display for PointerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerSource::Global => f.write_str("global"),
            PointerSource::Local => f.write_str("local"),
        }
    }
}

/// Handle for one installed subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorToken(pub u64);

/// Receives pointer positions in global screen coordinates.
pub type PointerHandler = Rc<dyn Fn(Point)>;

/// Installs and removes mouse-moved subscriptions.
///
/// Every token returned by `install` must eventually be passed to `remove`;
/// an installed subscription keeps firing until then.
pub trait PointerMonitors {
    fn install(&mut self, source: PointerSource, handler: PointerHandler) -> MonitorToken;

    /// Remove a subscription. Returns `false` if the token was unknown.
    fn remove(&mut self, token: MonitorToken) -> bool;

    /// Number of subscriptions currently installed.
    fn active_count(&self) -> usize;
}
