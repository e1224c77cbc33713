//! Contact form submission simulator.
//!
//! Nothing is transmitted: submit shows "sending", then "sent", then resets.

use crate::constants::{
    FORM_RESET_DELAY_MS, FORM_SENDING_LABEL, FORM_SENT_BACKGROUND, FORM_SENT_DELAY_MS,
    FORM_SENT_LABEL,
};
use crate::core::timers::Timers;
use std::cell::Cell;
use std::rc::Rc;

/// DOM surface the simulator drives.
pub trait FormView {
    fn submit_label(&self) -> String;
    fn set_submit_label(&self, label: &str);
    fn set_submit_disabled(&self, disabled: bool);
    /// `None` clears the inline background.
    fn set_submit_background(&self, background: Option<&str>);
    fn reset_fields(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Default)]
pub struct FormSimulator {
    phase: Cell<FormPhase>,
}

impl FormSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    /// Begin a simulated submission. Returns `false` (and does nothing) if one
    /// is already in flight.
    pub fn submit<T, V>(self: &Rc<Self>, timers: &Rc<T>, view: Rc<V>) -> bool
    where
        T: Timers + ?Sized + 'static,
        V: FormView + ?Sized + 'static,
    {
        if self.phase.get() != FormPhase::Idle {
            return false;
        }
        let original_label = view.submit_label();
        view.set_submit_label(FORM_SENDING_LABEL);
        view.set_submit_disabled(true);
        self.phase.set(FormPhase::Sending);

        let sim = self.clone();
        let timers_inner = timers.clone();
        timers.set_timeout(
            FORM_SENT_DELAY_MS,
            Box::new(move || {
                view.set_submit_label(FORM_SENT_LABEL);
                view.set_submit_background(Some(FORM_SENT_BACKGROUND));
                sim.phase.set(FormPhase::Sent);

                timers_inner.set_timeout(
                    FORM_RESET_DELAY_MS,
                    Box::new(move || {
                        view.reset_fields();
                        view.set_submit_label(&original_label);
                        view.set_submit_disabled(false);
                        view.set_submit_background(None);
                        sim.phase.set(FormPhase::Idle);
                    }),
                );
            }),
        );
        true
    }
}
