use crate::constants::PRODUCT_CARD_LIFT_PX;
use crate::core::selectors::{Capability, PRODUCT_CARD, TILT_GLARE};
use crate::core::tilt::{compute_tilt, Bounds, TiltState};
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// Lift product cards on enter, clear on leave.
pub fn wire_product_lift(document: &web::Document) {
    for card in dom::query_all(document, PRODUCT_CARD) {
        let lifted = format!("translateY({}px)", PRODUCT_CARD_LIFT_PX);
        let enter_card = card.clone();
        dom::listen(&card, "mouseenter", move |_ev: web::MouseEvent| {
            dom::set_style(&enter_card, "transform", &lifted);
        });
        let leave_card = card.clone();
        dom::listen(&card, "mouseleave", move |_ev: web::MouseEvent| {
            dom::set_style(&leave_card, "transform", "");
        });
    }
}

fn ensure_glare(document: &web::Document, el: &web::Element) -> Option<web::Element> {
    if let Some(existing) = dom::query_in(el, TILT_GLARE) {
        return Some(existing);
    }
    let glare = document.create_element("div").ok()?;
    glare.set_class_name("tilt-glare");
    _ = el.append_child(&glare);
    Some(glare)
}

fn apply(el: &web::Element, glare: Option<&web::Element>, tilt: &TiltState) {
    dom::set_style(el, "transform", &tilt.transform_css());
    if let Some(g) = glare {
        if !tilt.is_neutral() {
            dom::set_style(g, "background", &tilt.glare_background_css());
        }
        dom::set_style(g, "opacity", &tilt.glare_opacity.to_string());
    }
}

/// Attach tilt + glare to every tilt-capable element. Returns how many were wired.
pub fn init_tilt(document: &web::Document) -> usize {
    let elements = dom::query_all(document, &Capability::Tilt.selector_list());
    for el in &elements {
        let glare = ensure_glare(document, el);

        let move_el = el.clone();
        let move_glare = glare.clone();
        dom::listen(el, "mousemove", move |ev: web::MouseEvent| {
            let rect = move_el.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left() as f32,
                top: rect.top() as f32,
                width: rect.width() as f32,
                height: rect.height() as f32,
            };
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            apply(&move_el, move_glare.as_ref(), &compute_tilt(bounds, pointer));
        });

        let leave_el = el.clone();
        dom::listen(el, "mouseleave", move |_ev: web::MouseEvent| {
            apply(&leave_el, glare.as_ref(), &TiltState::NEUTRAL);
        });
    }
    elements.len()
}
