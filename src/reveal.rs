use crate::constants::{COUNTER_DURATION_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, STATS_THRESHOLD};
use crate::core::counter::{count_when_visible, StatOutcome, StatView};
use crate::core::reveal::{reveal_when_visible, RevealTarget};
use crate::core::selectors::{Capability, STAT_ITEM, STAT_NUMBER};
use crate::dom;
use crate::timers::WindowTimers;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

fn observe_all(
    elements: &[web::Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_report: impl FnMut(&web::Element, bool) -> bool + 'static,
) -> Option<web::IntersectionObserver> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                // `true` means the element has settled for good.
                if on_report(&target, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    let observer =
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    callback.forget();
    for el in elements {
        observer.observe(el);
    }
    Some(observer)
}

struct RevealClass<'a>(&'a web::Element);

impl RevealTarget for RevealClass<'_> {
    fn is_active(&self) -> bool {
        self.0.class_list().contains("active")
    }

    fn activate(&self) {
        _ = self.0.class_list().add_1("active");
    }
}

/// One-way reveal: `reveal` up front, `active` once seen, never removed.
pub fn init_reveal(document: &web::Document) -> usize {
    let elements = dom::query_all(document, &Capability::Reveal.selector_list());
    for el in &elements {
        _ = el.class_list().add_1("reveal");
    }
    observe_all(&elements, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |el, visible| {
        reveal_when_visible(&RevealClass(el), visible)
    });
    elements.len()
}

struct StatElement {
    item: web::Element,
    number: Option<web::Element>,
}

impl StatView for StatElement {
    fn is_counted(&self) -> bool {
        self.item.class_list().contains("counted")
    }

    fn mark_counted(&self) {
        _ = self.item.class_list().add_1("counted");
    }

    fn number_text(&self) -> Option<String> {
        self.number.as_ref()?.text_content()
    }

    fn set_number_text(&self, text: &str) {
        if let Some(n) = &self.number {
            n.set_text_content(Some(text));
        }
    }
}

/// Count each stat up once, the first time it is half visible.
pub fn init_stat_counters(document: &web::Document, timers: Rc<WindowTimers>) -> usize {
    let stats = dom::query_all(document, STAT_ITEM);
    observe_all(&stats, STATS_THRESHOLD, None, move |stat, visible| {
        let view = Rc::new(StatElement {
            item: stat.clone(),
            number: dom::query_in(stat, STAT_NUMBER),
        });
        let outcome = count_when_visible(&timers, view, visible, COUNTER_DURATION_MS);
        if outcome == StatOutcome::Skipped {
            log::debug!("[stats] stat text is not a plain number, left as is");
        }
        outcome.is_settled()
    });
    stats.len()
}
