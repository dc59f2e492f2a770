use log::Level;

pub const BRAND_NAME: &str = "Amita Makeover";
pub const ARTIST_NAME: &str = "Amita Kushwah";
pub const CONTACT_EMAIL: &str = "amita.kushwah@makeupstudio.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+1 (555) 123-4567";
pub const CONTACT_PHONE: &str = "+15551234567";
pub const WHATSAPP_NUMBER: &str = "15551234567";
pub const WHATSAPP_GREETING: &str = "Hi Amita, I'd like to book a makeup consultation.";
pub const INSTAGRAM_URL: &str = "https://instagram.com/amitamakeover";

// localStorage key for the dark/light preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// A section counts as active once `scrollY` plus this offset falls inside it.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;
/// Fraction of the viewport height a section must cross before it animates in.
pub const VISIBILITY_BAND: f64 = 0.8;
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

pub const CURSOR_EASING: f64 = 0.25;
pub const TRAIL_EVERY_NTH_MOVE: u32 = 3;
pub const TRAIL_LIFETIME_MS: u32 = 1200;

pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;
pub const WELCOME_OVERLAY_MS: u32 = 2000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
