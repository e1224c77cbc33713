//! Platform-free effect logic shared by the web wiring and host-side tests.

pub mod cart;
pub mod counter;
pub mod cursor;
pub mod form;
pub mod hover;
pub mod konami;
pub mod parallax;
pub mod pointer;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod selectors;
pub mod tilt;
pub mod timers;
pub mod typing;

pub use scheduler::{FrameGate, FrameScheduler, LoopHandle, ManualFrames};
pub use timers::{ManualTimers, TimerId, Timers};
