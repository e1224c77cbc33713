//! One-way reveal: once an element has been activated it stays active.

/// Activation flag of one revealable element.
pub trait RevealTarget {
    fn is_active(&self) -> bool;
    fn activate(&self);
}

/// Handle one visibility report. Returns `true` once the target is active,
/// after which the caller can stop watching it.
///
/// Leaving the viewport never deactivates.
pub fn reveal_when_visible<R: RevealTarget + ?Sized>(target: &R, visible: bool) -> bool {
    if target.is_active() {
        return true;
    }
    if visible {
        target.activate();
        return true;
    }
    false
}
