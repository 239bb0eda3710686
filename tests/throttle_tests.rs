//! Coalescer tests
//!
//! Tests for the single-slot throttle discipline the resize-move handler
//! runs behind: one invocation in flight, one pending, latest wins.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gridview::Coalescer;

#[test]
fn test_idle_offer_fires_eagerly() {
    let mut slot = Coalescer::new();
    assert_eq!(slot.offer("a"), Some("a"));
}

#[test]
fn test_n_overlapping_offers_yield_one_followup_with_latest() {
    let mut slot = Coalescer::new();
    assert_eq!(slot.offer(0), Some(0));

    // N additional events while the first invocation is in flight…
    for n in 1..=25 {
        assert_eq!(slot.offer(n), None, "event {n} must be parked, not run");
    }

    // …resolve to exactly one more invocation, using the latest data.
    assert_eq!(slot.complete(), Some(25));
    assert_eq!(slot.complete(), None, "no third invocation");
}

#[test]
fn test_slot_is_reusable_after_draining() {
    let mut slot = Coalescer::new();
    assert_eq!(slot.offer(1), Some(1));
    assert_eq!(slot.offer(2), None);
    assert_eq!(slot.complete(), Some(2));
    assert_eq!(slot.complete(), None);

    // The next gesture starts a fresh cycle.
    assert_eq!(slot.offer(3), Some(3));
    assert!(slot.in_flight());
}

#[test]
fn test_offers_during_followup_keep_coalescing() {
    let mut slot = Coalescer::new();
    assert_eq!(slot.offer(1), Some(1));
    assert_eq!(slot.offer(2), None);
    assert_eq!(slot.complete(), Some(2));

    // The follow-up is now in flight; more events park again.
    assert_eq!(slot.offer(3), None);
    assert_eq!(slot.offer(4), None);
    assert_eq!(slot.complete(), Some(4));
    assert_eq!(slot.complete(), None);
}

#[test]
fn test_clear_pending_drops_parked_value_only() {
    let mut slot = Coalescer::new();
    assert_eq!(slot.offer(1), Some(1));
    assert_eq!(slot.offer(2), None);

    // Session released: the parked move must not land…
    slot.clear_pending();
    assert_eq!(slot.complete(), None);

    // …and the slot is free again afterwards.
    assert_eq!(slot.offer(5), Some(5));
}
