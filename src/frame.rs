use crate::core::scheduler::{FrameCallback, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed [`FrameScheduler`].
///
/// Each callback is wrapped in a one-shot closure that frees itself after it
/// runs, so re-arming every frame does not leak.
#[derive(Clone, Copy, Debug, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn schedule(&self, callback: FrameCallback) {
        let Some(w) = web::window() else {
            return;
        };
        let js = Closure::once_into_js(move || callback());
        if let Err(e) = w.request_animation_frame(js.unchecked_ref()) {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
