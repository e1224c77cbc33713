use crate::core::hover::HoverClassifier;
use crate::core::parallax::{layer_offset, translate_css};
use crate::core::pointer::PointerTracker;
use crate::core::scheduler::{throttled, FrameGate};
use crate::core::selectors::Capability;
use crate::cursor::{self, CursorVisuals};
use crate::dom;
use crate::frame::RafScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub frames: Rc<RafScheduler>,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub cursor: Option<CursorVisuals>,
    pub hover: Rc<RefCell<HoverClassifier>>,
    pub hover_gate: Rc<FrameGate>,
    pub parallax_gate: Rc<FrameGate>,
    /// Target of the most recent pointer-move, classified on the next frame.
    pub last_target: Rc<RefCell<Option<web::EventTarget>>>,
    pub parallax_layers: Rc<Vec<web::Element>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_resize(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.document.clone().unchecked_into();

    dom::listen(&target, "mousemove", move |ev: web::MouseEvent| {
        w.pointer
            .borrow_mut()
            .on_move(ev.client_x() as f32, ev.client_y() as f32);
        *w.last_target.borrow_mut() = ev.target();

        classify_hover_next_frame(&w);
        if !w.parallax_layers.is_empty() {
            parallax_next_frame(&w);
        }
    });
}

fn classify_hover_next_frame(w: &InputWiring) {
    let pointer = w.pointer.clone();
    let hover = w.hover.clone();
    let last_target = w.last_target.clone();
    let visuals = w.cursor.clone();
    throttled(&*w.frames, &w.hover_gate, move || {
        let selector = Capability::Interactive.selector_list();
        let over = dom::closest_from_target(last_target.borrow().clone(), &selector).is_some();
        pointer.borrow_mut().set_over_interactive(over);
        if let Some(state) = hover.borrow_mut().classify(pointer.borrow().state()) {
            if let Some(v) = &visuals {
                v.apply_hover(state);
            }
        }
    });
}

fn parallax_next_frame(w: &InputWiring) {
    let pointer = w.pointer.clone();
    let layers = w.parallax_layers.clone();
    throttled(&*w.frames, &w.parallax_gate, move || {
        let fraction = pointer.borrow().viewport_fraction();
        for (i, layer) in layers.iter().enumerate() {
            dom::set_style(layer, "transform", &translate_css(layer_offset(fraction, i)));
        }
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.document.clone().unchecked_into();

    dom::listen(&target, "mousedown", move |ev: web::MouseEvent| {
        if let Some(v) = &w.cursor {
            v.set_pressed(true);
        }
        cursor::spawn_ripple(&w.document, ev.client_x(), ev.client_y());
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.document.clone().unchecked_into();

    dom::listen(&target, "mouseup", move |_ev: web::MouseEvent| {
        if let Some(v) = &w.cursor {
            v.set_pressed(false);
        }
    });
}

fn wire_resize(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let pointer = w.pointer.clone();
    dom::listen(&window, "resize", move |_ev: web::Event| {
        let (width, height) = dom::viewport_size();
        pointer.borrow_mut().resize(width as f32, height as f32);
    });
}
