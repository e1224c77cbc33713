use crate::core::cart::{added_message, parse_price, Cart};
use crate::core::selectors::{BUY_BUTTON, PRODUCT_CARD, PRODUCT_NAME, PRODUCT_PRICE};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn product_of(button: &web::Element) -> Option<(String, f64)> {
    let card = button.closest(PRODUCT_CARD).ok().flatten()?;
    let name = dom::query_in(&card, PRODUCT_NAME)?.text_content()?;
    let price = dom::query_in(&card, PRODUCT_PRICE)
        .and_then(|p| p.text_content())
        .map(|t| parse_price(&t))
        .unwrap_or(f64::NAN);
    Some((name, price))
}

/// Wire every buy button to the shared in-memory cart.
pub fn wire_cart_buttons(document: &web::Document, cart: Rc<RefCell<Cart>>) -> usize {
    let buttons = dom::query_all(document, BUY_BUTTON);
    for button in &buttons {
        let cart = cart.clone();
        let btn = button.clone();
        dom::add_click_listener(button, move |_ev| {
            let Some((name, price)) = product_of(&btn) else {
                log::warn!("[cart] buy button outside a complete product card");
                return;
            };
            let count = cart.borrow_mut().add(name.clone(), price);
            if let Some(w) = web::window() {
                _ = w.alert_with_message(&added_message(&name));
            }
            log::info!("[cart] now has {} items", count);
        });
    }
    buttons.len()
}
