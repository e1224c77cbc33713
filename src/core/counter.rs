//! Stat counter animation: 0 → target on a fixed interval, exactly once.

use crate::constants::COUNTER_INTERVAL_MS;
use crate::core::timers::{TimerId, Timers};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Parse a stat's text (`"150+"`, `"150"`) into an animation target.
///
/// Only a plain non-negative integer, optionally followed by `+`, animates.
/// Anything else (`"24/7"`, `"∞"`) is left untouched by the caller.
pub fn parse_target(text: &str) -> Option<u64> {
    let digits = text.trim().replace('+', "");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[inline]
pub fn display(value: u64) -> String {
    format!("{value}+")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTick {
    Running(u64),
    Finished(u64),
}

impl CounterTick {
    pub fn value(self) -> u64 {
        match self {
            Self::Running(v) | Self::Finished(v) => v,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    total: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(COUNTER_INTERVAL_MS);
        let increment = if ticks > 0.0 {
            target as f64 / ticks
        } else {
            f64::INFINITY
        };
        Self {
            target,
            increment,
            total: 0.0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// One interval tick. Once the running total reaches the target the value
    /// snaps to it and every later call keeps returning `Finished(target)`.
    pub fn tick(&mut self) -> CounterTick {
        if self.done {
            return CounterTick::Finished(self.target);
        }
        self.total += self.increment;
        if self.total >= self.target as f64 {
            self.done = true;
            CounterTick::Finished(self.target)
        } else {
            CounterTick::Running(self.total.floor() as u64)
        }
    }
}

/// Drive `anim` on a [`COUNTER_INTERVAL_MS`] interval, rendering each value,
/// and clear the interval on the tick that reaches the target.
pub fn start_counter<T>(timers: Rc<T>, anim: CounterAnimation, render: impl FnMut(&str) + 'static)
where
    T: Timers + ?Sized + 'static,
{
    let id: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
    let anim = Rc::new(RefCell::new(anim));
    let mut render = render;
    let timers_for_tick = Rc::downgrade(&timers);
    let id_for_tick = id.clone();
    let assigned = timers.set_interval(
        COUNTER_INTERVAL_MS,
        Box::new(move || {
            let tick = anim.borrow_mut().tick();
            render(&display(tick.value()));
            if let CounterTick::Finished(_) = tick {
                if let (Some(t), Some(handle)) = (timers_for_tick.upgrade(), id_for_tick.get()) {
                    t.clear_interval(handle);
                }
            }
        }),
    );
    id.set(assigned);
}

/// DOM surface of one stat item.
pub trait StatView {
    /// The one-way "counted" flag.
    fn is_counted(&self) -> bool;
    fn mark_counted(&self);
    /// Current number text; `None` when the item has no number slot.
    fn number_text(&self) -> Option<String>;
    fn set_number_text(&self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatOutcome {
    /// Not intersecting; keep watching.
    Hidden,
    /// Already counted on an earlier entry.
    AlreadyCounted,
    /// Counted, but the text is not a plain number and was left as is.
    Skipped,
    Started(u64),
}

impl StatOutcome {
    /// Whether the item needs no further visibility reports.
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Handle one visibility report for a stat item.
///
/// The first visible report marks the item counted, resets the text to `0+`
/// and starts the counter. Every later report is a no-op.
pub fn count_when_visible<T, V>(
    timers: &Rc<T>,
    view: Rc<V>,
    visible: bool,
    duration_ms: u32,
) -> StatOutcome
where
    T: Timers + ?Sized + 'static,
    V: StatView + ?Sized + 'static,
{
    if !visible {
        return StatOutcome::Hidden;
    }
    if view.is_counted() {
        return StatOutcome::AlreadyCounted;
    }
    view.mark_counted();
    let Some(target) = view.number_text().as_deref().and_then(parse_target) else {
        return StatOutcome::Skipped;
    };
    view.set_number_text(&display(0));
    start_counter(
        timers.clone(),
        CounterAnimation::new(target, duration_ms),
        move |text| view.set_number_text(text),
    );
    StatOutcome::Started(target)
}
