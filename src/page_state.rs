//! Pure bookkeeping behind the page-level effects
//!
//! The wasm side supplies the actual timers and listeners; this module
//! owns the rules: a burst of resize events keeps exactly one pending
//! action alive, and the tab's hidden flag maps straight to an animation
//! play state.

/// `animation-play-state` value for a tab visibility flag.
pub fn play_state(hidden: bool) -> &'static str {
    if hidden {
        "paused"
    } else {
        "running"
    }
}

/// Pending-action slot for a debounced burst.
///
/// Arming drops whatever was pending, which cancels it when the handle is
/// a cancel-on-drop timer. However many events a burst delivers, at most
/// one handle is ever live, so the action fires once, after the last arm.
#[derive(Debug)]
pub struct Debouncer<T> {
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Replace the pending handle, cancelling the previous one.
    pub fn arm(&mut self, handle: T) {
        self.pending = Some(handle);
    }

    /// Drop the pending handle without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a cancel-on-drop timer handle.
    struct CancelOnDrop(Rc<Cell<u32>>);

    impl Drop for CancelOnDrop {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_burst_keeps_exactly_one_pending() {
        let cancelled = Rc::new(Cell::new(0));
        let mut debouncer = Debouncer::new();
        for _ in 0..10 {
            debouncer.arm(CancelOnDrop(cancelled.clone()));
        }
        // Nine timers from the burst were cancelled; only the one armed by
        // the last event is still live to fire.
        assert_eq!(cancelled.get(), 9);
        assert!(debouncer.is_armed());
    }

    #[test]
    fn test_cancel_drops_the_pending_handle() {
        let cancelled = Rc::new(Cell::new(0));
        let mut debouncer = Debouncer::new();
        debouncer.arm(CancelOnDrop(cancelled.clone()));
        debouncer.cancel();
        assert_eq!(cancelled.get(), 1);
        assert!(!debouncer.is_armed());
    }

    #[test]
    fn test_play_state_tracks_hidden_flag() {
        assert_eq!(play_state(true), "paused");
        assert_eq!(play_state(false), "running");
    }
}
