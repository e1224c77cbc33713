use crate::core::form::{FormSimulator, FormView};
use crate::core::selectors::{CONTACT_FORM, SUBMIT_BUTTON};
use crate::dom;
use crate::timers::WindowTimers;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ContactFormView {
    form: web::HtmlFormElement,
    button: Option<web::HtmlButtonElement>,
}

impl FormView for ContactFormView {
    fn submit_label(&self) -> String {
        self.button
            .as_ref()
            .and_then(|b| b.text_content())
            .unwrap_or_default()
    }

    fn set_submit_label(&self, label: &str) {
        if let Some(b) = &self.button {
            b.set_text_content(Some(label));
        }
    }

    fn set_submit_disabled(&self, disabled: bool) {
        if let Some(b) = &self.button {
            b.set_disabled(disabled);
        }
    }

    fn set_submit_background(&self, background: Option<&str>) {
        if let Some(b) = &self.button {
            _ = b.style().set_property("background", background.unwrap_or(""));
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

fn log_submission(form: &web::HtmlFormElement) {
    let Ok(data) = web::FormData::new_with_form(form) else {
        return;
    };
    match js_sys::Object::from_entries(&data) {
        Ok(fields) => log::info!("[form] submitted: {:?}", fields),
        Err(_) => log::info!("[form] submitted"),
    }
}

/// Intercept the contact form and play the send → sent → reset sequence.
pub fn wire_contact_form(document: &web::Document, timers: Rc<WindowTimers>) {
    let Some(form) = dom::query(document, CONTACT_FORM)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("[form] no {} element, submission simulator disabled", CONTACT_FORM);
        return;
    };
    let button = form
        .query_selector(SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let view = Rc::new(ContactFormView {
        form: form.clone(),
        button,
    });
    let sim = Rc::new(FormSimulator::new());

    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if sim.submit(&timers, view.clone()) {
            log_submission(&view.form);
        } else {
            log::debug!("[form] submission already in flight, ignored");
        }
    });
}
