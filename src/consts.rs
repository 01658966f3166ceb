//! Shared constants for the portfolio crate.

// ── Classes ─────────────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_CLICKED: &str = "clicked";
pub const CLASS_MOVING: &str = "moving";
pub const CLASS_NOTIFICATION: &str = "notification";
pub const CLASS_NOTIFICATION_CLOSE: &str = "notification-close";

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_NAVBAR: &str = ".navbar";
pub const SEL_NAV_TOGGLE: &str = ".nav-toggle";
pub const SEL_NAV_MENU: &str = ".nav-menu";
pub const SEL_NAV_LINK: &str = ".nav-link";
pub const SEL_SECTION: &str = ".section";
pub const SEL_ANIMATED: &str = ".animate-slide-up, .animate-fade-in, .animate-scale-up";
pub const SEL_SKILL_BAR: &str = ".skill-progress";
pub const SEL_FILTER_BUTTON: &str = ".filter-btn";
pub const SEL_PROJECT_CARD: &str = ".project-card";
pub const SEL_COUNTER: &str = ".stat-number[data-count]";
pub const SEL_ANCHOR: &str = "a[href^=\"#\"]";

pub const ID_PHOTO: &str = "floatingPhoto";
pub const ID_CONTACT_FORM: &str = "contactForm";
pub const ID_CONFIG: &str = "portfolio-config";

// ── Filter ──────────────────────────────────────────────────────

/// Filter value that matches every project card.
pub const FILTER_ALL: &str = "all";

// ── Defaults ────────────────────────────────────────────────────

/// Default section ids, in page order.
pub const DEFAULT_SECTIONS: [&str; 5] = ["hero", "about", "skills", "projects", "contact"];

pub const DEFAULT_SECTION_THRESHOLD: f64 = 0.3;
pub const DEFAULT_ANIMATED_THRESHOLD: f64 = 0.1;
pub const DEFAULT_SKILL_THRESHOLD: f64 = 0.5;
pub const DEFAULT_COUNTER_THRESHOLD: f64 = 0.5;

pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
pub const DEFAULT_PARALLAX_THROTTLE_MS: u32 = 16;
pub const DEFAULT_SKILL_FILL_DELAY_MS: u32 = 200;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;
pub const DEFAULT_COUNTER_TICK_MS: u32 = 16;
pub const DEFAULT_PHOTO_MOVE_MS: u32 = 800;
pub const DEFAULT_NOTIFICATION_MS: u32 = 5000;
pub const DEFAULT_NOTIFICATION_FADE_MS: u32 = 300;

/// Navbar gains `scrolled` once `scrollY` exceeds this many pixels.
pub const DEFAULT_NAVBAR_SCROLL_OFFSET: f64 = 50.0;

/// Parallax drift is only enabled on viewports wider than this.
pub const DEFAULT_PARALLAX_MIN_WIDTH: f64 = 768.0;

/// Pointer offset from viewport center → photo offset in pixels.
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.005;

/// Page file assumed when the URL path ends in `/`.
pub const DEFAULT_PAGE_FILE: &str = "index.html";

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully!";
