//! Fixed layout and timing constants shared across the page.

/// Height of the fixed header, subtracted from every smooth-scroll target.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll offset past which the header switches to its compact style.
pub const STICKY_THRESHOLD_PX: f64 = 100.0;

/// How far above a section its highlight band starts.
pub const SECTION_BAND_LEAD_PX: f64 = 150.0;

/// Hero translation per scrolled pixel.
pub const PARALLAX_SPEED: f64 = 0.5;

/// The custom cursor is only built above this viewport width.
pub const CURSOR_MIN_VIEWPORT_PX: f64 = 968.0;

/// Delay before the contact form resets after a successful submission.
pub const FORM_RESET_DELAY_MS: u32 = 3_000;

/// Rough time for the smooth scroll to settle before focusing the name field.
/// Scroll animations expose no completion event, so this is an approximation.
pub const SCROLL_FOCUS_DELAY_MS: u32 = 800;

/// Delay before the body fades in on load.
pub const LOAD_FADE_DELAY_MS: u32 = 100;
