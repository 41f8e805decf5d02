// Host-side tests for deadline timers.

use heart_core::*;

#[test]
fn fires_in_deadline_order_not_schedule_order() {
    let mut t = Timeline::new();
    t.schedule(0.0, 0.5, "late");
    t.schedule(0.0, 0.1, "early");
    t.schedule(0.0, 0.3, "middle");

    let mut out = Vec::new();
    t.poll(0.05, &mut out);
    assert!(out.is_empty());

    t.poll(1.0, &mut out);
    assert_eq!(out, vec!["early", "middle", "late"]);
    assert_eq!(t.pending_len(), 0);
}

#[test]
fn fires_once_regardless_of_poll_count() {
    let mut t = Timeline::new();
    t.schedule(1.0, 0.25, 1u8);
    let mut out = Vec::new();
    for i in 0..10 {
        t.poll(1.0 + i as f64 * 0.1, &mut out);
    }
    assert_eq!(out, vec![1]);
}

#[test]
fn cancelled_timer_never_fires() {
    let mut t = Timeline::new();
    let a = t.schedule(0.0, 0.2, 'a').unwrap();
    t.schedule(0.0, 0.2, 'b');
    assert!(t.cancel(a));
    assert!(!t.cancel(a));
    let mut out = Vec::new();
    t.poll(1.0, &mut out);
    assert_eq!(out, vec!['b']);
}

#[test]
fn dispose_clears_and_blocks_scheduling() {
    let mut t = Timeline::new();
    t.schedule(0.0, 0.1, 1);
    t.dispose();
    assert!(t.is_disposed());
    assert_eq!(t.pending_len(), 0);
    assert_eq!(t.schedule(0.0, 0.1, 2), None);
    let mut out = Vec::new();
    t.poll(10.0, &mut out);
    assert!(out.is_empty());
}
