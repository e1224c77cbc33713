use crate::core::konami::KonamiDetector;
use crate::dom;
use crate::page;
use web_sys as web;

/// Konami code easter egg: the full sequence plays the rainbow effect.
pub fn wire_konami(document: &web::Document) {
    let doc = document.clone();
    let mut detector = KonamiDetector::new();
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        if detector.push(&ev.key()) {
            log::info!("[keys] konami code entered");
            page::play_rainbow(&doc);
        }
    });
}
