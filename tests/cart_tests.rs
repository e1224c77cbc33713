// Host-side tests for the in-memory cart.

use site_web::core::cart::{added_message, parse_price, Cart, CartItem};

#[test]
fn identical_items_are_not_merged() {
    let mut cart = Cart::new();
    assert!(cart.is_empty());
    assert_eq!(cart.add("Widget", 9.99), 1);
    assert_eq!(cart.add("Widget", 9.99), 2);
    assert_eq!(cart.len(), 2);
    let expected = CartItem {
        name: "Widget".into(),
        price: 9.99,
    };
    assert_eq!(cart.items(), &[expected.clone(), expected]);
}

#[test]
fn insertion_order_is_kept() {
    let mut cart = Cart::new();
    cart.add("Suite", 199.0);
    cart.add("Plugin", 19.0);
    cart.add("Suite", 199.0);
    let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Suite", "Plugin", "Suite"]);
}

#[test]
fn price_text_parses_like_a_lenient_float() {
    assert_eq!(parse_price("$49.99"), 49.99);
    assert_eq!(parse_price(" $199 "), 199.0);
    assert_eq!(parse_price("$29.99/mo"), 29.99);
    assert_eq!(parse_price("1,299"), 1.0);
    assert_eq!(parse_price("49.99.1"), 49.99);
    assert_eq!(parse_price("$1.2.3"), 1.2);
    assert_eq!(parse_price("1e3"), 1000.0);
    assert_eq!(parse_price("2e"), 2.0);
    assert_eq!(parse_price(".5"), 0.5);
    assert_eq!(parse_price("-3.5 off"), -3.5);
}

#[test]
fn unparseable_price_is_nan() {
    assert!(parse_price("Free").is_nan());
    assert!(parse_price("").is_nan());
    assert!(parse_price("$").is_nan());
    assert!(parse_price("inf").is_nan());
    assert!(parse_price("e5").is_nan());
}

#[test]
fn nan_price_is_still_added() {
    let mut cart = Cart::new();
    cart.add("Mystery", parse_price("TBD"));
    assert_eq!(cart.len(), 1);
    assert!(cart.items()[0].price.is_nan());
}

#[test]
fn notification_names_the_product() {
    assert_eq!(
        added_message("Pro Suite"),
        "Pro Suite has been added to your cart!"
    );
}
