/// Brand rendered at `/`.
pub const DEFAULT_BRAND: &str = "sonicwave";

/// Static-site form backends match submissions to a form by this name.
pub const FORM_NAME: &str = "contact-form";

pub const REQUEST_TIMEOUT_MS: u32 = 30_000;
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Scroll distance (px) after which the navbar switches to its solid style.
pub const NAV_SCROLL_OFFSET: f64 = 10.0;

#[cfg(debug_assertions)]
pub fn get_intake_url() -> &'static str {
    "http://localhost:8888/"  // Local form backend dev server
}

#[cfg(not(debug_assertions))]
pub fn get_intake_url() -> &'static str {
    "/"  // Production form handler lives on the site root
}
