use crate::constants::NAVBAR_SCROLL_THRESHOLD_PX;
use crate::core::hover::EdgeToggle;

/// Scroll progress in percent.
///
/// A page no taller than the viewport reports 0 instead of NaN/Infinity.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn progress_width_css(percent: f64) -> String {
    format!("{percent}%")
}

/// Navbar "scrolled" style, toggled only when crossing the threshold.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavbarReactor {
    scrolled: EdgeToggle,
}

impl NavbarReactor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.is_on()
    }

    /// `Some(true)` → add the class, `Some(false)` → remove it.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        self.scrolled.set(scroll_y > NAVBAR_SCROLL_THRESHOLD_PX)
    }
}
