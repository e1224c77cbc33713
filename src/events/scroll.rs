use crate::core::scheduler::{throttled, FrameGate};
use crate::core::scroll::{progress_width_css, scroll_progress, NavbarReactor};
use crate::core::selectors::{NAVBAR, SCROLL_PROGRESS};
use crate::dom;
use crate::frame::RafScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const PROGRESS_BAR_STYLE: &str = "position: fixed; top: 0; left: 0; height: 3px; \
     background: linear-gradient(90deg, #6366f1, #8b5cf6, #ec4899); \
     z-index: 9999; transition: width 0.1s ease;";

/// Navbar toggle and progress bar, each behind its own frame gate.
pub fn wire_scroll_reactors(document: &web::Document, frames: Rc<RafScheduler>) {
    let Some(window) = web::window() else {
        return;
    };
    let navbar = dom::query(document, NAVBAR);
    if navbar.is_none() {
        log::warn!("[scroll] no {} element, navbar style disabled", NAVBAR);
    }
    let reactor = Rc::new(RefCell::new(NavbarReactor::new()));
    let nav_gate = Rc::new(FrameGate::new());
    let progress_gate = Rc::new(FrameGate::new());
    let doc = document.clone();

    dom::listen(&window, "scroll", move |_ev: web::Event| {
        if let Some(nav) = navbar.clone() {
            let reactor = reactor.clone();
            throttled(&*frames, &nav_gate, move || {
                let y = web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                if let Some(scrolled) = reactor.borrow_mut().update(y) {
                    let cl = nav.class_list();
                    if scrolled {
                        _ = cl.add_1("scrolled");
                    } else {
                        _ = cl.remove_1("scrolled");
                    }
                }
            });
        }

        let doc = doc.clone();
        throttled(&*frames, &progress_gate, move || update_scroll_progress(&doc));
    });
}

fn update_scroll_progress(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let scroll_top = web::window()
        .and_then(|w| w.page_y_offset().ok())
        .filter(|y| *y > 0.0)
        .unwrap_or_else(|| f64::from(root.scroll_top()));
    let percent = scroll_progress(
        scroll_top,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    if let Some(bar) = progress_bar(document) {
        dom::set_style(&bar, "width", &progress_width_css(percent));
    }
}

/// The progress bar, created on first use.
fn progress_bar(document: &web::Document) -> Option<web::Element> {
    if let Some(bar) = dom::query(document, SCROLL_PROGRESS) {
        return Some(bar);
    }
    let body = document.body()?;
    let bar = document.create_element("div").ok()?;
    bar.set_class_name("scroll-progress");
    _ = bar.set_attribute("style", PROGRESS_BAR_STYLE);
    _ = body.append_child(&bar);
    Some(bar)
}
