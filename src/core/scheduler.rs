//! Frame scheduling primitives.
//!
//! Every continuous effect runs through a [`FrameScheduler`]: in the browser
//! that is `requestAnimationFrame`, on the host it is [`ManualFrames`], which
//! lets tests step an arbitrary number of synthetic frames.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One-shot callback queued for the next frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// "Run this once before the next repaint."
///
/// There is no cancellation: a continuous effect keeps itself alive by
/// re-registering from inside its own callback and stops by declining to.
pub trait FrameScheduler {
    fn schedule(&self, callback: FrameCallback);
}

/// Pending flag for one effect group (hover, parallax, each scroll reactor).
///
/// A flood of input events collapses into at most one scheduled callback per
/// gate per frame. The flag is set by the triggering event and cleared at the
/// start of the frame callback.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller won the right to schedule a frame.
    #[inline]
    pub fn try_arm(&self) -> bool {
        !self.pending.replace(true)
    }

    #[inline]
    pub fn release(&self) {
        self.pending.set(false);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Run `work` on the next frame unless this gate already has a frame queued.
///
/// Returns whether a new frame callback was scheduled.
pub fn throttled<S>(scheduler: &S, gate: &Rc<FrameGate>, work: impl FnOnce() + 'static) -> bool
where
    S: FrameScheduler + ?Sized,
{
    if !gate.try_arm() {
        return false;
    }
    let gate = gate.clone();
    scheduler.schedule(Box::new(move || {
        gate.release();
        work();
    }));
    true
}

/// Stop hook for perpetual loops.
///
/// Production never stops the cursor or typing loops; tests do.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Re-arm `step` every frame until `handle` is stopped.
pub fn run_every_frame<S>(scheduler: Rc<S>, handle: LoopHandle, step: impl FnMut() + 'static)
where
    S: FrameScheduler + ?Sized + 'static,
{
    let step: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(step));
    arm_frame(scheduler, handle, step);
}

fn arm_frame<S>(scheduler: Rc<S>, handle: LoopHandle, step: Rc<RefCell<dyn FnMut()>>)
where
    S: FrameScheduler + ?Sized + 'static,
{
    let next = scheduler.clone();
    scheduler.schedule(Box::new(move || {
        if handle.is_stopped() {
            return;
        }
        (&mut *step.borrow_mut())();
        arm_frame(next, handle, step);
    }));
}

/// Host-side frame source: callbacks queue up until [`ManualFrames::run_frame`].
#[derive(Default)]
pub struct ManualFrames {
    queue: RefCell<Vec<FrameCallback>>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the callbacks registered before this frame started.
    ///
    /// Callbacks scheduled while the frame runs land in the next frame.
    /// Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let count = due.len();
        for cb in due {
            cb();
        }
        count
    }

    pub fn run_frames(&self, n: usize) {
        for _ in 0..n {
            self.run_frame();
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl FrameScheduler for ManualFrames {
    fn schedule(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push(callback);
    }
}

impl std::fmt::Debug for ManualFrames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualFrames")
            .field("pending", &self.pending())
            .finish()
    }
}
