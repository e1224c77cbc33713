//! Typing text loop.
//!
//! A timer-paced state machine over a fixed phrase list:
//! typing → pause at full → deleting → pause at empty → next phrase.

use crate::constants::{DELETE_CHAR_MS, PAUSE_AT_EMPTY_MS, PAUSE_AT_FULL_MS, TYPE_CHAR_MS};
use crate::core::scheduler::LoopHandle;
use crate::core::timers::Timers;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    pub char_index: usize,
    pub is_deleting: bool,
}

/// Text to display after a step and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingMachine {
    phrases: Vec<String>,
    state: TypingState,
}

impl TypingMachine {
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Self {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            state: TypingState::default(),
        }
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Advance one character. `None` only for an empty phrase list.
    pub fn step(&mut self) -> Option<TypingStep> {
        let phrase = self.phrases.get(self.state.phrase_index)?;
        let len = phrase.chars().count();
        let st = &mut self.state;

        let mut delay_ms = if st.is_deleting {
            st.char_index = st.char_index.saturating_sub(1);
            DELETE_CHAR_MS
        } else {
            st.char_index = (st.char_index + 1).min(len);
            TYPE_CHAR_MS
        };
        let text: String = phrase.chars().take(st.char_index).collect();

        if !st.is_deleting && st.char_index == len {
            st.is_deleting = true;
            delay_ms = PAUSE_AT_FULL_MS;
        } else if st.is_deleting && st.char_index == 0 {
            st.is_deleting = false;
            st.phrase_index = (st.phrase_index + 1) % self.phrases.len();
            delay_ms = PAUSE_AT_EMPTY_MS;
        }

        Some(TypingStep { text, delay_ms })
    }
}

/// Start the self-rescheduling loop: the first step runs after `start_delay_ms`,
/// every later step after the delay the previous one asked for.
///
/// Runs until `handle` is stopped.
pub fn start_typing<T>(
    timers: Rc<T>,
    machine: TypingMachine,
    start_delay_ms: u32,
    handle: LoopHandle,
    render: impl FnMut(&str) + 'static,
) where
    T: Timers + ?Sized + 'static,
{
    let machine = Rc::new(RefCell::new(machine));
    let render: Rc<RefCell<dyn FnMut(&str)>> = Rc::new(RefCell::new(render));
    schedule_step(timers, machine, render, handle, start_delay_ms);
}

fn schedule_step<T>(
    timers: Rc<T>,
    machine: Rc<RefCell<TypingMachine>>,
    render: Rc<RefCell<dyn FnMut(&str)>>,
    handle: LoopHandle,
    delay_ms: u32,
) where
    T: Timers + ?Sized + 'static,
{
    let next = timers.clone();
    timers.set_timeout(
        delay_ms,
        Box::new(move || {
            if handle.is_stopped() {
                return;
            }
            let Some(step) = machine.borrow_mut().step() else {
                return;
            };
            (&mut *render.borrow_mut())(&step.text);
            schedule_step(next, machine, render, handle, step.delay_ms);
        }),
    );
}
