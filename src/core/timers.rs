//! Delay timers, kept separate from frame scheduling.
//!
//! Typing, counters, form delays and cleanup timeouts pace themselves and do
//! not follow rendering cadence. [`ManualTimers`] is a virtual clock for
//! host-side tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

pub trait Timers {
    /// Run `callback` once after `delay_ms`.
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);

    /// Run `callback` every `period_ms` until cleared.
    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Option<TimerId>;

    fn clear_interval(&self, id: TimerId);
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat {
        period_ms: u64,
        callback: Rc<RefCell<dyn FnMut()>>,
    },
}

struct Entry {
    id: TimerId,
    due_ms: u64,
    task: Task,
}

/// Deterministic timer queue driven by [`ManualTimers::advance`].
///
/// Timers due at the same instant fire in registration order.
#[derive(Default)]
pub struct ManualTimers {
    now_ms: Cell<u64>,
    next_id: Cell<i32>,
    entries: RefCell<Vec<Entry>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Timers still registered (pending timeouts plus live intervals).
    pub fn active(&self) -> usize {
        self.entries.borrow().len()
    }

    fn alloc_id(&self) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        TimerId(id)
    }

    /// Move the clock forward, firing everything that falls due on the way.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.now_ms.get() + delta_ms;
        while let Some(entry) = self.pop_due(target) {
            self.now_ms.set(entry.due_ms);
            match entry.task {
                Task::Once(cb) => cb(),
                Task::Repeat {
                    period_ms,
                    callback,
                } => {
                    // Re-register before running so the callback can clear itself.
                    self.entries.borrow_mut().push(Entry {
                        id: entry.id,
                        due_ms: entry.due_ms + period_ms.max(1),
                        task: Task::Repeat {
                            period_ms,
                            callback: callback.clone(),
                        },
                    });
                    (&mut *callback.borrow_mut())();
                }
            }
        }
        self.now_ms.set(target);
    }

    fn pop_due(&self, target: u64) -> Option<Entry> {
        let mut entries = self.entries.borrow_mut();
        let idx = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= target)
            .min_by_key(|(i, e)| (e.due_ms, *i))
            .map(|(i, _)| i)?;
        Some(entries.remove(idx))
    }
}

impl Timers for ManualTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let id = self.alloc_id();
        self.entries.borrow_mut().push(Entry {
            id,
            due_ms: self.now_ms.get() + u64::from(delay_ms),
            task: Task::Once(callback),
        });
    }

    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Option<TimerId> {
        let id = self.alloc_id();
        let period_ms = u64::from(period_ms);
        let callback: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(callback));
        self.entries.borrow_mut().push(Entry {
            id,
            due_ms: self.now_ms.get() + period_ms.max(1),
            task: Task::Repeat {
                period_ms,
                callback,
            },
        });
        Some(id)
    }

    fn clear_interval(&self, id: TimerId) {
        self.entries.borrow_mut().retain(|e| e.id != id);
    }
}

impl std::fmt::Debug for ManualTimers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualTimers")
            .field("now_ms", &self.now_ms.get())
            .field("active", &self.active())
            .finish()
    }
}
