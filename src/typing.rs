use crate::constants::{TYPING_PHRASES, TYPING_START_DELAY_MS};
use crate::core::scheduler::LoopHandle;
use crate::core::selectors::TYPING_TEXT;
use crate::core::typing::{start_typing, TypingMachine};
use crate::dom;
use crate::timers::WindowTimers;
use std::rc::Rc;
use web_sys as web;

/// Start the hero typing loop if the page has a `.typing-text` slot.
pub fn init_typing(document: &web::Document, timers: Rc<WindowTimers>) -> Option<LoopHandle> {
    let Some(slot) = dom::query(document, TYPING_TEXT) else {
        log::warn!("[typing] no {} element, typing loop disabled", TYPING_TEXT);
        return None;
    };
    let handle = LoopHandle::new();
    start_typing(
        timers,
        TypingMachine::new(TYPING_PHRASES),
        TYPING_START_DELAY_MS,
        handle.clone(),
        move |text| slot.set_text_content(Some(text)),
    );
    Some(handle)
}
