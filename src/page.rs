use crate::constants::{
    BODY_FADE_DELAY_MS, HERO_FADE_DELAY_MS, LOADER_HIDE_DELAY_MS, RAINBOW_DURATION_MS,
};
use crate::core::selectors::{ANCHOR_LINK, HAMBURGER, HERO_CONTENT, LOADER, NAV_LINK, NAV_MENU};
use crate::dom;
use crate::timers::after;
use web_sys as web;

const RAINBOW_STYLE_ID: &str = "rainbow-keyframes";
const RAINBOW_KEYFRAMES: &str = "@keyframes rainbow { \
     0% { filter: hue-rotate(0deg); } \
     100% { filter: hue-rotate(360deg); } }";

#[inline]
fn set_active(el: &web::Element, active: bool) {
    let cl = el.class_list();
    if active {
        _ = cl.add_1("active");
    } else {
        _ = cl.remove_1("active");
    }
}

/// Hamburger toggles the mobile menu; any nav link closes it.
pub fn wire_nav_menu(document: &web::Document) {
    let (Some(hamburger), Some(menu)) = (dom::query(document, HAMBURGER), dom::query(document, NAV_MENU))
    else {
        log::warn!("[nav] hamburger or menu missing, mobile menu disabled");
        return;
    };

    let (h, m) = (hamburger.clone(), menu.clone());
    dom::add_click_listener(&hamburger, move |_ev| {
        _ = m.class_list().toggle("active");
        _ = h.class_list().toggle("active");
    });

    for link in dom::query_all(document, NAV_LINK) {
        let (h, m) = (hamburger.clone(), menu.clone());
        dom::add_click_listener(&link, move |_ev| {
            set_active(&m, false);
            set_active(&h, false);
        });
    }
}

/// In-page anchors scroll smoothly instead of jumping.
pub fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_LINK) {
        let doc = document.clone();
        let a = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            // A bare "#" or a malformed id is not a valid selector; ignore it.
            let Some(target) = dom::query(&doc, &href) else {
                return;
            };
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}

/// Fade the body and hero content in after load.
pub fn play_entrance(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("opacity", "0");
        after(BODY_FADE_DELAY_MS, move || {
            _ = body.style().set_property("transition", "opacity 0.5s ease");
            _ = body.style().set_property("opacity", "1");
        });
    }
    if let Some(hero) = dom::query(document, HERO_CONTENT) {
        dom::set_style(&hero, "opacity", "0");
        after(HERO_FADE_DELAY_MS, move || {
            dom::set_style(&hero, "transition", "opacity 1s ease");
            dom::set_style(&hero, "opacity", "1");
        });
    }
}

fn fade_out_loader(document: &web::Document) {
    let Some(loader) = dom::query(document, LOADER) else {
        return;
    };
    dom::set_style(&loader, "opacity", "0");
    after(LOADER_HIDE_DELAY_MS, move || dom::set_style(&loader, "display", "none"));
}

/// Fade the loader out once every asset has loaded.
pub fn wire_loader(document: &web::Document) {
    if document.ready_state() == "complete" {
        fade_out_loader(document);
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    dom::listen(&window, "load", move |_ev: web::Event| fade_out_loader(&doc));
}

fn ensure_rainbow_keyframes(document: &web::Document) {
    if document.get_element_by_id(RAINBOW_STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(RAINBOW_STYLE_ID);
    style.set_text_content(Some(RAINBOW_KEYFRAMES));
    _ = head.append_child(&style);
}

/// Hue-rotate the whole page for a few seconds.
pub fn play_rainbow(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    ensure_rainbow_keyframes(document);
    _ = body.style().set_property("animation", "rainbow 2s linear infinite");
    after(RAINBOW_DURATION_MS, move || {
        _ = body.style().set_property("animation", "");
    });
}

