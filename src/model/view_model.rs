//! Per-screen view model.
//!
//! Holds the expansion state and the suppression flag. State changes are
//! pushed synchronously to registered observers in registration order, so
//! every observer sees transitions in the order pointer samples produced
//! them. The view model never touches a window itself.

use tracing::{debug, trace};

use super::ExpansionState;

/// Callback invoked with the new state after every effective change.
pub type StateObserver = Box<dyn FnMut(ExpansionState)>;

/// Identifies a registered observer so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub struct NotchViewModel {
    state: ExpansionState,
    suppressed: bool,
    observers: Vec<(ObserverId, StateObserver)>,
    next_observer: u64,
}

impl NotchViewModel {
    pub fn new() -> Self {
        Self {
            state: ExpansionState::Collapsed,
            suppressed: false,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn state(&self) -> ExpansionState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Set the expansion state.
    ///
    /// Returns `true` and notifies observers only when the state actually
    /// changed; writing the current value again is a no-op.
    pub fn set_state(&mut self, state: ExpansionState) -> bool {
        if self.state == state {
            return false;
        }
        debug!(from = %self.state, to = %state, "notch state change");
        self.state = state;
        for (_, observer) in self.observers.iter_mut() {
            observer(state);
        }
        true
    }

    /// True while a modal surface holds pointer-driven transitions frozen.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Freeze or release pointer-driven transitions.
    ///
    /// The flag has no timeout: whoever sets it must clear it.
    pub fn set_suppressed(&mut self, suppressed: bool) {
        if self.suppressed != suppressed {
            trace!(suppressed, "notch suppression flag");
        }
        self.suppressed = suppressed;
    }

    pub fn subscribe(&mut self, observer: StateObserver) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for NotchViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotchViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotchViewModel")
            .field("state", &self.state)
            .field("suppressed", &self.suppressed)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_collapsed_and_unsuppressed() {
        let vm = NotchViewModel::new();
        assert_eq!(vm.state(), ExpansionState::Collapsed);
        assert!(!vm.is_suppressed());
    }

    #[test]
    fn observers_called_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut vm = NotchViewModel::new();
        let l1 = log.clone();
        vm.subscribe(Box::new(move |s| l1.borrow_mut().push(("first", s))));
        let l2 = log.clone();
        vm.subscribe(Box::new(move |s| l2.borrow_mut().push(("second", s))));

        assert!(vm.set_state(ExpansionState::Expanded));
        assert_eq!(
            *log.borrow(),
            vec![
                ("first", ExpansionState::Expanded),
                ("second", ExpansionState::Expanded)
            ]
        );
    }

    #[test]
    fn same_state_does_not_notify() {
        let hits = Rc::new(RefCell::new(0));
        let mut vm = NotchViewModel::new();
        let h = hits.clone();
        vm.subscribe(Box::new(move |_| *h.borrow_mut() += 1));

        assert!(!vm.set_state(ExpansionState::Collapsed));
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let hits = Rc::new(RefCell::new(0));
        let mut vm = NotchViewModel::new();
        let h = hits.clone();
        let id = vm.subscribe(Box::new(move |_| *h.borrow_mut() += 1));

        assert!(vm.unsubscribe(id));
        assert!(!vm.unsubscribe(id));
        vm.set_state(ExpansionState::Expanded);
        assert_eq!(*hits.borrow(), 0);
        assert_eq!(vm.observer_count(), 0);
    }

    #[test]
    fn suppression_flag_round_trip() {
        let mut vm = NotchViewModel::new();
        vm.set_suppressed(true);
        assert!(vm.is_suppressed());
        vm.set_suppressed(false);
        assert!(!vm.is_suppressed());
    }
}
