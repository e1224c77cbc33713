//! Capability → selector table.
//!
//! Every place that needs to find "interactive", "tilt" or "reveal" elements
//! goes through [`Capability`] instead of carrying its own selector string.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Elements that switch the custom cursor into its hover state.
    Interactive,
    /// Elements that get the 3D tilt + glare treatment.
    Tilt,
    /// Elements revealed once when scrolled into view.
    Reveal,
}

const INTERACTIVE: &[&str] = &[
    ".btn",
    ".nav-link",
    ".product-card",
    ".social-link",
    ".skill-category",
    ".feature",
    ".buy-btn",
];

const TILT: &[&str] = &[
    ".project-card",
    ".skill-category",
    ".language-badge",
    ".floating-card",
    ".product-card",
    ".feature",
];

const REVEAL: &[&str] = &[
    ".skill-category",
    ".product-card",
    ".stat-item",
    ".about-content",
    ".contact-content",
    ".feature",
];

impl Capability {
    pub const ALL: [Capability; 3] = [Self::Interactive, Self::Tilt, Self::Reveal];

    #[inline]
    pub fn selectors(self) -> &'static [&'static str] {
        match self {
            Self::Interactive => INTERACTIVE,
            Self::Tilt => TILT,
            Self::Reveal => REVEAL,
        }
    }

    /// Comma-joined group selector, as accepted by `querySelectorAll`/`closest`.
    pub fn selector_list(self) -> String {
        self.selectors().join(", ")
    }
}

// Fixture selectors consumed by the page wiring.
pub const HAMBURGER: &str = ".hamburger";
pub const NAV_MENU: &str = ".nav-menu";
pub const NAV_LINK: &str = ".nav-link";
pub const NAVBAR: &str = ".navbar";
pub const TYPING_TEXT: &str = ".typing-text";
pub const CONTACT_FORM: &str = ".contact-form";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const HERO_CONTENT: &str = ".hero-content";
pub const LOADER: &str = ".loader";
pub const PRODUCT_CARD: &str = ".product-card";
pub const PRODUCT_NAME: &str = "h3";
pub const PRODUCT_PRICE: &str = ".price";
pub const BUY_BUTTON: &str = ".buy-btn";
pub const FLOATING_CARD: &str = ".floating-card";
pub const STAT_ITEM: &str = ".stat-item";
pub const STAT_NUMBER: &str = ".stat-number";
pub const ANCHOR_LINK: &str = "a[href^=\"#\"]";
pub const SCROLL_PROGRESS: &str = ".scroll-progress";
pub const TILT_GLARE: &str = ".tilt-glare";
