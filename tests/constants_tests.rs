// Host-side tests for tuning constants and the selector table.

use site_web::constants::*;
use site_web::core::selectors::Capability;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(TYPE_CHAR_MS > DELETE_CHAR_MS);
    assert!(PAUSE_AT_FULL_MS > PAUSE_AT_EMPTY_MS);
    assert!(COUNTER_INTERVAL_MS > 0);
    assert!(COUNTER_DURATION_MS > COUNTER_INTERVAL_MS);
    assert!(FORM_SENT_DELAY_MS > 0 && FORM_RESET_DELAY_MS > 0);
    assert_eq!(RAINBOW_DURATION_MS, 5000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_are_within_reasonable_bounds() {
    assert!(FOLLOWER_SMOOTHING > 0.0 && FOLLOWER_SMOOTHING <= 1.0);
    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG <= 45.0);
    assert!(TILT_LIFT_SCALE >= 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(STATS_THRESHOLD > REVEAL_THRESHOLD);
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
}

#[test]
fn phrase_list_is_non_empty_and_distinct() {
    assert_eq!(TYPING_PHRASES.len(), 5);
    for (i, a) in TYPING_PHRASES.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &TYPING_PHRASES[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn selector_sets_match_the_page_contract() {
    assert_eq!(
        Capability::Interactive.selector_list(),
        ".btn, .nav-link, .product-card, .social-link, .skill-category, .feature, .buy-btn"
    );
    assert_eq!(
        Capability::Tilt.selector_list(),
        ".project-card, .skill-category, .language-badge, .floating-card, .product-card, .feature"
    );
    assert_eq!(
        Capability::Reveal.selector_list(),
        ".skill-category, .product-card, .stat-item, .about-content, .contact-content, .feature"
    );
}

#[test]
fn every_selector_is_a_plain_class() {
    for cap in Capability::ALL {
        for sel in cap.selectors() {
            let name = sel.strip_prefix('.').expect("class selector");
            assert!(!name.is_empty() && !name.contains([' ', ',', '.']));
        }
    }
}
