// Host-side tests for the virtual timer clock.

use site_web::core::timers::{ManualTimers, Timers};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn timeouts_fire_in_due_order() {
    let timers = ManualTimers::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for (delay, tag) in [(300, "c"), (100, "a"), (200, "b")] {
        let log = log.clone();
        timers.set_timeout(delay, Box::new(move || log.borrow_mut().push(tag)));
    }
    timers.advance(150);
    assert_eq!(*log.borrow(), vec!["a"]);
    timers.advance(1000);
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    assert_eq!(timers.active(), 0);
}

#[test]
fn same_instant_timeouts_fire_in_registration_order() {
    let timers = ManualTimers::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let log = log.clone();
        timers.set_timeout(50, Box::new(move || log.borrow_mut().push(tag)));
    }
    timers.advance(50);
    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn interval_repeats_until_cleared() {
    let timers = ManualTimers::new();
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let id = timers
        .set_interval(16, Box::new(move || c.set(c.get() + 1)))
        .expect("interval id");
    timers.advance(16 * 10);
    assert_eq!(count.get(), 10);

    timers.clear_interval(id);
    timers.advance(1000);
    assert_eq!(count.get(), 10);
    assert_eq!(timers.active(), 0);
}

#[test]
fn timeout_scheduled_from_callback_uses_callback_time() {
    let timers = Rc::new(ManualTimers::new());
    let fired_at = Rc::new(Cell::new(0u64));
    let t = timers.clone();
    let f = fired_at.clone();
    timers.set_timeout(
        100,
        Box::new(move || {
            let t2 = t.clone();
            t.set_timeout(50, Box::new(move || f.set(t2.now_ms())));
        }),
    );
    timers.advance(1000);
    assert_eq!(fired_at.get(), 150);
    assert_eq!(timers.now_ms(), 1000);
}
