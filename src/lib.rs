//! Interaction effects for the storefront site.
//!
//! `core` and `constants` are platform-free and build everywhere; the DOM
//! wiring below them only builds for `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod cart;
#[cfg(target_arch = "wasm32")]
mod cursor;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod form;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod reveal;
#[cfg(target_arch = "wasm32")]
mod tilt;
#[cfg(target_arch = "wasm32")]
mod timers;
#[cfg(target_arch = "wasm32")]
mod typing;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::cart::Cart;
    use crate::core::hover::HoverClassifier;
    use crate::core::pointer::PointerTracker;
    use crate::core::scheduler::FrameGate;
    use crate::core::selectors::FLOATING_CARD;
    use crate::frame::RafScheduler;
    use crate::timers::WindowTimers;
    use crate::{cart, cursor, dom, events, form, page, reveal, tilt, typing};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("site-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let (width, height) = dom::viewport_size();
        log::info!("[init] viewport {}x{}", width, height);

        let frames = Rc::new(RafScheduler);
        let timers = Rc::new(WindowTimers);
        let pointer = Rc::new(RefCell::new(PointerTracker::new(width as f32, height as f32)));

        // Frame-driven effects
        let cursor_visuals = cursor::init_custom_cursor(&document, &pointer, frames.clone());
        events::wire_input_handlers(events::InputWiring {
            document: document.clone(),
            frames: frames.clone(),
            pointer: pointer.clone(),
            cursor: cursor_visuals,
            hover: Rc::new(RefCell::new(HoverClassifier::new())),
            hover_gate: Rc::new(FrameGate::new()),
            parallax_gate: Rc::new(FrameGate::new()),
            last_target: Rc::new(RefCell::new(None)),
            parallax_layers: Rc::new(dom::query_all(&document, FLOATING_CARD)),
        });
        events::wire_scroll_reactors(&document, frames.clone());

        // Per-element controllers
        tilt::wire_product_lift(&document);
        let tilted = tilt::init_tilt(&document);
        let revealed = reveal::init_reveal(&document);
        let stats = reveal::init_stat_counters(&document, timers.clone());
        log::info!(
            "[init] tilt={} reveal={} stats={}",
            tilted,
            revealed,
            stats
        );

        // Timer-driven effects
        _ = typing::init_typing(&document, timers.clone());
        form::wire_contact_form(&document, timers.clone());

        let cart_store = Rc::new(RefCell::new(Cart::new()));
        let buy_buttons = cart::wire_cart_buttons(&document, cart_store);
        log::info!("[init] buy buttons={}", buy_buttons);

        page::wire_nav_menu(&document);
        page::wire_smooth_anchors(&document);
        page::wire_loader(&document);
        page::play_entrance(&document);
        events::wire_konami(&document);

        Ok(())
    }
}
