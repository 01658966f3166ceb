//! What the host found in the markup at startup.
//!
//! The host reads element presence and `data-*` attributes once; the core
//! works from this snapshot and addresses elements by index.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

/// Element presence and raw `data-*` values, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSnapshot {
    pub has_navbar: bool,
    pub has_nav_toggle: bool,
    pub has_nav_menu: bool,
    pub has_photo: bool,
    pub has_contact_form: bool,
    /// `data-section` of each `.nav-link`.
    pub nav_links: Vec<Option<String>>,
    /// `id` of each `.section`.
    pub sections: Vec<String>,
    pub animated_count: usize,
    /// `data-width` of each `.skill-progress`.
    pub skill_widths: Vec<Option<String>>,
    /// `data-count` of each `.stat-number[data-count]`.
    pub counters: Vec<Option<String>>,
    /// `data-filter` of each `.filter-btn`.
    pub filter_buttons: Vec<Option<String>>,
    /// `data-category` of each `.project-card`.
    pub project_categories: Vec<Option<String>>,
    /// `location.pathname`.
    pub pathname: String,
    pub viewport_width: f64,
    pub scroll_y: f64,
}

/// Parse an integer the way `parseInt(s, 10)` does, defaulting to 0.
///
/// Leading whitespace and one sign are accepted, then as many digits as
/// follow; trailing junk is ignored (`"150+"` is 150).
#[must_use]
pub fn parse_leading_int(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    match (seen, negative) {
        (false, _) => 0,
        (true, true) => -value,
        (true, false) => value,
    }
}

/// Parse a skill width percentage, clamped to `0..=100`, defaulting to 0.
#[must_use]
pub fn parse_percent(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().trim_end_matches('%').parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.min(100.0),
        _ => 0.0,
    }
}

/// Render a percentage for a CSS `width`, without a trailing `.0`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value}%")
    }
}

/// The page file for a URL path: its last segment, or `index.html`.
#[must_use]
pub fn page_file(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => crate::consts::DEFAULT_PAGE_FILE,
    }
}
