use super::*;

// =============================================================
// Debouncer
// =============================================================

#[test]
fn single_trigger_fires_once() {
    let mut d = Debouncer::new();
    let t = d.arm();
    assert!(d.fire(t));
    assert!(!d.fire(t));
}

#[test]
fn burst_only_fires_last_ticket() {
    let mut d = Debouncer::new();
    let tickets: Vec<u64> = (0..10).map(|_| d.arm()).collect();
    let fired = tickets.iter().filter(|t| d.fire(**t)).count();
    assert_eq!(fired, 1);
}

#[test]
fn stale_ticket_after_rearm_is_dropped() {
    let mut d = Debouncer::new();
    let first = d.arm();
    let second = d.arm();
    assert!(!d.fire(first));
    assert!(d.fire(second));
}

#[test]
fn separate_quiet_windows_each_fire() {
    let mut d = Debouncer::new();
    let a = d.arm();
    assert!(d.fire(a));
    let b = d.arm();
    assert!(d.fire(b));
}

// =============================================================
// Throttle
// =============================================================

#[test]
fn throttle_allows_first_call() {
    let mut t = Throttle::new(16);
    assert!(t.allow(1000.0));
}

#[test]
fn throttle_blocks_within_interval() {
    let mut t = Throttle::new(16);
    assert!(t.allow(0.0));
    assert!(!t.allow(5.0));
    assert!(!t.allow(15.9));
    assert!(t.allow(16.0));
}

#[test]
fn throttle_measures_from_last_pass() {
    let mut t = Throttle::new(100);
    assert!(t.allow(0.0));
    assert!(!t.allow(90.0));
    assert!(t.allow(100.0));
    assert!(!t.allow(150.0));
    assert!(t.allow(200.0));
}
