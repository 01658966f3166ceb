#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// parse_leading_int
// =============================================================

#[test]
fn leading_int_plain() {
    assert_eq!(parse_leading_int(Some("150")), 150);
}

#[test]
fn leading_int_ignores_trailing_junk() {
    assert_eq!(parse_leading_int(Some("150+")), 150);
    assert_eq!(parse_leading_int(Some("12.9")), 12);
}

#[test]
fn leading_int_accepts_sign_and_whitespace() {
    assert_eq!(parse_leading_int(Some("  -42")), -42);
    assert_eq!(parse_leading_int(Some("+7")), 7);
}

#[test]
fn leading_int_defaults_to_zero() {
    assert_eq!(parse_leading_int(None), 0);
    assert_eq!(parse_leading_int(Some("")), 0);
    assert_eq!(parse_leading_int(Some("abc")), 0);
    assert_eq!(parse_leading_int(Some("-")), 0);
}

#[test]
fn leading_int_saturates() {
    assert_eq!(parse_leading_int(Some("99999999999999999999999")), i64::MAX);
}

// =============================================================
// parse_percent / format_percent
// =============================================================

#[test]
fn percent_parses_number() {
    assert_eq!(parse_percent(Some("80")), 80.0);
    assert_eq!(parse_percent(Some("72.5")), 72.5);
    assert_eq!(parse_percent(Some(" 65% ")), 65.0);
}

#[test]
fn percent_defaults_and_clamps() {
    assert_eq!(parse_percent(None), 0.0);
    assert_eq!(parse_percent(Some("wide")), 0.0);
    assert_eq!(parse_percent(Some("-5")), 0.0);
    assert_eq!(parse_percent(Some("140")), 100.0);
    assert_eq!(parse_percent(Some("NaN")), 0.0);
}

#[test]
fn percent_formats_without_trailing_zero() {
    assert_eq!(format_percent(80.0), "80%");
    assert_eq!(format_percent(0.0), "0%");
    assert_eq!(format_percent(72.5), "72.5%");
}

// =============================================================
// page_file
// =============================================================

#[test]
fn page_file_takes_last_segment() {
    assert_eq!(page_file("/portfolio/about.html"), "about.html");
    assert_eq!(page_file("projects.html"), "projects.html");
}

#[test]
fn page_file_defaults_to_index() {
    assert_eq!(page_file("/"), "index.html");
    assert_eq!(page_file(""), "index.html");
    assert_eq!(page_file("/portfolio/"), "index.html");
}
