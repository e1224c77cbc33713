// Host-side tests for the stat counter animation.

use site_web::constants::COUNTER_DURATION_MS;
use site_web::core::counter::{
    count_when_visible, display, parse_target, start_counter, CounterAnimation, CounterTick,
    StatOutcome, StatView,
};
use site_web::core::timers::ManualTimers;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn parse_target_accepts_plain_numbers() {
    assert_eq!(parse_target("150"), Some(150));
    assert_eq!(parse_target("150+"), Some(150));
    assert_eq!(parse_target(" 42+ "), Some(42));
    assert_eq!(parse_target("0"), Some(0));
}

#[test]
fn parse_target_rejects_everything_else() {
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("+"), None);
    assert_eq!(parse_target("24/7"), None);
    assert_eq!(parse_target("∞"), None);
    assert_eq!(parse_target("1.5k"), None);
    assert_eq!(parse_target("-3"), None);
}

#[test]
fn animation_reaches_target_exactly_and_stays() {
    let mut anim = CounterAnimation::new(150, 2000);
    let mut last = 0;
    let mut ticks = 0;
    loop {
        ticks += 1;
        match anim.tick() {
            CounterTick::Running(v) => {
                assert!(v >= last, "value went backwards: {last} -> {v}");
                assert!(v < 150);
                last = v;
            }
            CounterTick::Finished(v) => {
                assert_eq!(v, 150);
                break;
            }
        }
        assert!(ticks < 1000, "counter never finished");
    }
    // 2000ms / 16ms ≈ 125 ticks.
    assert!((124..=127).contains(&ticks), "took {ticks} ticks");
    assert!(anim.is_done());
    assert_eq!(anim.tick(), CounterTick::Finished(150));
}

#[test]
fn zero_duration_finishes_on_first_tick() {
    let mut anim = CounterAnimation::new(7, 0);
    assert_eq!(anim.tick(), CounterTick::Finished(7));
}

#[test]
fn zero_target_finishes_immediately() {
    let mut anim = CounterAnimation::new(0, 2000);
    assert_eq!(anim.tick(), CounterTick::Finished(0));
}

#[test]
fn interval_renders_non_decreasing_values_and_is_cleared() {
    let timers = Rc::new(ManualTimers::new());
    let shown = Rc::new(RefCell::new(Vec::<String>::new()));
    let s = shown.clone();
    start_counter(timers.clone(), CounterAnimation::new(150, 2000), move |v| {
        s.borrow_mut().push(v.to_owned())
    });
    assert_eq!(timers.active(), 1);

    timers.advance(5_000);
    let values: Vec<String> = shown.borrow().clone();
    assert_eq!(values.last().map(String::as_str), Some("150+"));
    assert_eq!(timers.active(), 0, "interval must be cleared at target");
    assert!(values.iter().all(|t| t.ends_with('+')));

    let numbers: Vec<u64> = values
        .iter()
        .map(|t| t.trim_end_matches('+').parse().unwrap())
        .collect();
    assert!(numbers.windows(2).all(|w| w[0] <= w[1]));

    timers.advance(5_000);
    assert_eq!(shown.borrow().len(), values.len(), "no renders after clearing");
}

#[test]
fn display_appends_plus() {
    assert_eq!(display(0), "0+");
    assert_eq!(display(150), "150+");
}

struct FakeStat {
    counted: Cell<bool>,
    text: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
}

impl FakeStat {
    fn with_text(text: Option<&str>) -> Rc<Self> {
        Rc::new(Self {
            counted: Cell::new(false),
            text: RefCell::new(text.map(str::to_owned)),
            writes: RefCell::new(Vec::new()),
        })
    }
}

impl StatView for FakeStat {
    fn is_counted(&self) -> bool {
        self.counted.get()
    }
    fn mark_counted(&self) {
        self.counted.set(true);
    }
    fn number_text(&self) -> Option<String> {
        self.text.borrow().clone()
    }
    fn set_number_text(&self, text: &str) {
        *self.text.borrow_mut() = Some(text.to_owned());
        self.writes.borrow_mut().push(text.to_owned());
    }
}

#[test]
fn stat_waits_until_visible() {
    let timers = Rc::new(ManualTimers::new());
    let stat = FakeStat::with_text(Some("150+"));
    let outcome = count_when_visible(&timers, stat.clone(), false, COUNTER_DURATION_MS);
    assert_eq!(outcome, StatOutcome::Hidden);
    assert!(!outcome.is_settled());
    assert!(!stat.counted.get());
    assert_eq!(timers.active(), 0);
}

#[test]
fn stat_counts_once_across_reentries() {
    let timers = Rc::new(ManualTimers::new());
    let stat = FakeStat::with_text(Some("150+"));

    let first = count_when_visible(&timers, stat.clone(), true, COUNTER_DURATION_MS);
    assert_eq!(first, StatOutcome::Started(150));
    assert!(stat.counted.get());
    assert_eq!(stat.writes.borrow()[0], "0+");
    assert_eq!(timers.active(), 1);

    // Leave and re-enter mid-animation.
    timers.advance(500);
    count_when_visible(&timers, stat.clone(), false, COUNTER_DURATION_MS);
    let again = count_when_visible(&timers, stat.clone(), true, COUNTER_DURATION_MS);
    assert_eq!(again, StatOutcome::AlreadyCounted);
    assert_eq!(timers.active(), 1, "no second interval");

    timers.advance(u64::from(COUNTER_DURATION_MS) * 2);
    assert_eq!(timers.active(), 0);
    assert_eq!(stat.text.borrow().as_deref(), Some("150+"));
    assert_eq!(stat.writes.borrow().iter().filter(|w| *w == "0+").count(), 1);

    // Re-entry after the animation finished does not restart it either.
    let after = count_when_visible(&timers, stat.clone(), true, COUNTER_DURATION_MS);
    assert_eq!(after, StatOutcome::AlreadyCounted);
    assert_eq!(timers.active(), 0);
}

#[test]
fn non_numeric_stat_is_left_untouched() {
    let timers = Rc::new(ManualTimers::new());
    let stat = FakeStat::with_text(Some("24/7"));
    let outcome = count_when_visible(&timers, stat.clone(), true, COUNTER_DURATION_MS);
    assert_eq!(outcome, StatOutcome::Skipped);
    assert!(outcome.is_settled());
    assert!(stat.counted.get());
    assert!(stat.writes.borrow().is_empty());
    assert_eq!(stat.text.borrow().as_deref(), Some("24/7"));
    assert_eq!(timers.active(), 0);
}

#[test]
fn stat_without_number_slot_settles() {
    let timers = Rc::new(ManualTimers::new());
    let stat = FakeStat::with_text(None);
    let outcome = count_when_visible(&timers, stat.clone(), true, COUNTER_DURATION_MS);
    assert_eq!(outcome, StatOutcome::Skipped);
    assert!(stat.writes.borrow().is_empty());
}
