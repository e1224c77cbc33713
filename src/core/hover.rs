//! Edge-triggered state used by the hover classifier and navbar reactor.

use crate::core::pointer::PointerState;

/// Two-state latch that reports only real transitions.
///
/// `set` returns `Some(new_state)` when the state changed and `None` when the
/// requested state was already current, so callers touch the DOM only on an
/// edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeToggle {
    on: bool,
}

impl EdgeToggle {
    pub fn new(on: bool) -> Self {
        Self { on }
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    #[inline]
    pub fn set(&mut self, on: bool) -> Option<bool> {
        if self.on == on {
            return None;
        }
        self.on = on;
        Some(on)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovering,
}

/// Cursor hover classifier: {idle, hovering}.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverClassifier {
    latch: EdgeToggle,
}

impl HoverClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        if self.latch.is_on() {
            HoverState::Hovering
        } else {
            HoverState::Idle
        }
    }

    /// Feed whether the pointer target matched the interactive set.
    ///
    /// Returns the new state on a transition, `None` if nothing changed.
    pub fn evaluate(&mut self, over_interactive: bool) -> Option<HoverState> {
        self.latch.set(over_interactive).map(|on| {
            if on {
                HoverState::Hovering
            } else {
                HoverState::Idle
            }
        })
    }

    /// Classify from the tracker's latest sample.
    #[inline]
    pub fn classify(&mut self, pointer: &PointerState) -> Option<HoverState> {
        self.evaluate(pointer.is_over_interactive)
    }
}
