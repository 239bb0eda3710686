//! Single-slot pending-request coalescer.
//!
//! Rate-limiting discipline for handlers whose work is asynchronous:
//! overlapping requests collapse to at most one in flight plus one pending
//! (latest wins), instead of queuing every request. The resize-move handler
//! runs behind one of these so a drag produces at most one concurrent
//! redraw-triggering path while never losing the final pointer position.

/// At most one value runs at a time; at most one waits. Offering while a
/// run is in flight replaces the pending value.
#[derive(Debug, Clone)]
pub struct Coalescer<T> {
    in_flight: bool,
    pending: Option<T>,
}

impl<T> Default for Coalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Coalescer<T> {
    pub fn new() -> Self {
        Self {
            in_flight: false,
            pending: None,
        }
    }

    /// Offer a value. `Some` means the caller must run it now (the slot was
    /// free and is now marked in flight); `None` means a run is already in
    /// flight and the value was parked, replacing any previously parked one.
    #[must_use]
    pub fn offer(&mut self, value: T) -> Option<T> {
        if self.in_flight {
            self.pending = Some(value);
            return None;
        }
        self.in_flight = true;
        Some(value)
    }

    /// Report that the in-flight run resolved. `Some` hands back the parked
    /// value; the caller must run it immediately and the slot stays in
    /// flight; `None` frees the slot.
    #[must_use]
    pub fn complete(&mut self) -> Option<T> {
        match self.pending.take() {
            Some(value) => Some(value),
            None => {
                self.in_flight = false;
                None
            }
        }
    }

    /// Drop the parked value, if any. The in-flight marker is left alone:
    /// a run that is still resolving will clear it through [`complete`].
    ///
    /// [`complete`]: Coalescer::complete
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Whether a run is currently in flight.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn first_offer_runs_eagerly() {
        let mut slot = Coalescer::new();
        assert_eq!(slot.offer(1), Some(1));
        assert!(slot.in_flight());
    }

    #[test]
    fn overlapping_offers_coalesce_to_latest() {
        let mut slot = Coalescer::new();
        assert_eq!(slot.offer(1), Some(1));
        for n in 2..=10 {
            assert_eq!(slot.offer(n), None);
        }
        // Exactly one follow-up, carrying the latest value.
        assert_eq!(slot.complete(), Some(10));
        assert!(slot.in_flight());
        assert_eq!(slot.complete(), None);
        assert!(!slot.in_flight());
    }

    #[test]
    fn complete_without_pending_frees_the_slot() {
        let mut slot = Coalescer::new();
        assert_eq!(slot.offer(1), Some(1));
        assert_eq!(slot.complete(), None);
        assert_eq!(slot.offer(2), Some(2));
    }

    #[test]
    fn clear_pending_keeps_in_flight_marker() {
        let mut slot = Coalescer::new();
        assert_eq!(slot.offer(1), Some(1));
        assert_eq!(slot.offer(2), None);
        slot.clear_pending();
        assert!(slot.in_flight());
        assert_eq!(slot.complete(), None);
        assert!(!slot.in_flight());
    }
}
