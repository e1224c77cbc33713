/// Interaction tuning constants.
///
/// These constants express intended behavior (timings, clamp limits,
/// breakpoints) and keep magic numbers out of the effect code.

// Cursor
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // at or below this width the custom cursor is off
pub const FOLLOWER_SMOOTHING: f32 = 0.3; // fraction of the remaining gap closed per frame
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// Tilt
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_LIFT_SCALE: f32 = 1.02;
pub const TILT_GLARE_ALPHA: f32 = 0.3;
pub const TILT_GLARE_FADE_PCT: f32 = 60.0;

// Parallax
pub const PARALLAX_SPEED_STEP: f32 = 0.5; // per-layer speed increment
pub const PARALLAX_AMPLITUDE_PX: f32 = 20.0;

// Product cards
pub const PRODUCT_CARD_LIFT_PX: f32 = -10.0;

// Scroll
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const STATS_THRESHOLD: f64 = 0.5;

// Typing loop (milliseconds)
pub const TYPING_START_DELAY_MS: u32 = 1000;
pub const TYPE_CHAR_MS: u32 = 150;
pub const DELETE_CHAR_MS: u32 = 50;
pub const PAUSE_AT_FULL_MS: u32 = 2000;
pub const PAUSE_AT_EMPTY_MS: u32 = 500;

pub const TYPING_PHRASES: [&str; 5] = [
    "Premium Applications",
    "Digital Solutions",
    "Software Excellence",
    "Tech Innovation",
    "Quality Products",
];

// Counters
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_INTERVAL_MS: u32 = 16; // ~60Hz

// Contact form simulation
pub const FORM_SENT_DELAY_MS: u32 = 1500;
pub const FORM_RESET_DELAY_MS: u32 = 3000;
pub const FORM_SENDING_LABEL: &str = "Sending...";
pub const FORM_SENT_LABEL: &str = "Message Sent! ✓";
pub const FORM_SENT_BACKGROUND: &str = "linear-gradient(135deg, #10b981 0%, #059669 100%)";

// Page entrance and easter egg
pub const BODY_FADE_DELAY_MS: u32 = 100;
pub const HERO_FADE_DELAY_MS: u32 = 300;
pub const LOADER_HIDE_DELAY_MS: u32 = 500;
pub const RAINBOW_DURATION_MS: u32 = 5000;
