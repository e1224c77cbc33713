use crate::core::timers::{TimerId, Timers};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout`/`setInterval`-backed [`Timers`].
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowTimers;

#[inline]
fn clamp_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

impl Timers for WindowTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let Some(w) = web::window() else {
            return;
        };
        let js = Closure::once_into_js(move || callback());
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            js.unchecked_ref(),
            clamp_ms(delay_ms),
        );
    }

    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Option<TimerId> {
        let w = web::window()?;
        let closure = Closure::wrap(callback);
        let id = w
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                clamp_ms(period_ms),
            )
            .ok()?;
        // The interval may clear itself from inside the callback, so the
        // closure cannot be dropped at that point.
        closure.forget();
        Some(TimerId(id))
    }

    fn clear_interval(&self, id: TimerId) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(id.0);
        }
    }
}

/// Fire-and-forget timeout on the window clock.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    WindowTimers.set_timeout(delay_ms, Box::new(f));
}
