#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn blank_input_is_default() {
    assert_eq!(SiteConfig::from_json("  ").ok(), Some(SiteConfig::default()));
}

#[test]
fn defaults_match_page_behavior() {
    let config = SiteConfig::default();
    assert_eq!(config.photo_mode, PhotoMode::Drift);
    assert_eq!(config.sections, vec!["hero", "about", "skills", "projects", "contact"]);
    assert!(config.keyboard_navigation);
    assert_eq!(config.thresholds.sections, 0.3);
    assert_eq!(config.thresholds.animated, 0.1);
    assert_eq!(config.thresholds.skills, 0.5);
    assert_eq!(config.thresholds.counters, 0.5);
    assert_eq!(config.timing.resize_debounce_ms, 250);
    assert_eq!(config.timing.counter_duration_ms, 2000);
    assert_eq!(config.timing.counter_tick_ms, 16);
    assert_eq!(config.timing.notification_ms, 5000);
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn default_photo_positions_cover_every_section() {
    let config = SiteConfig::default();
    for id in &config.sections {
        assert!(config.photo_positions.contains_key(id), "missing position for {id}");
    }
    let hero = &config.photo_positions["hero"];
    assert_eq!(hero.top, "50%");
    assert_eq!(hero.left, "75%");
    assert_eq!(hero.transform, "translate(-50%, -50%)");
}

#[test]
fn partial_object_keeps_other_defaults() {
    let Ok(config) = SiteConfig::from_json(r#"{ "photo_mode": "cycle", "timing": { "resize_debounce_ms": 100 } }"#)
    else {
        panic!("config should parse");
    };
    assert_eq!(config.photo_mode, PhotoMode::Cycle);
    assert_eq!(config.timing.resize_debounce_ms, 100);
    assert_eq!(config.timing.skill_fill_delay_ms, 200);
    assert_eq!(config.sections.len(), 5);
}

#[test]
fn empty_section_list_falls_back_to_defaults() {
    let Ok(config) = SiteConfig::from_json(r#"{ "sections": ["", "  "] }"#) else {
        panic!("config should parse");
    };
    assert_eq!(config.sections.len(), 5);
}

#[test]
fn thresholds_are_clamped_to_unit_range() {
    let Ok(config) = SiteConfig::from_json(r#"{ "thresholds": { "skills": 4.0, "animated": -1.0 } }"#) else {
        panic!("config should parse");
    };
    assert_eq!(config.thresholds.skills, 1.0);
    assert_eq!(config.thresholds.animated, 0.0);
    assert_eq!(config.thresholds.sections, 0.3);
}

#[test]
fn zero_counter_tick_is_raised_to_one() {
    let Ok(config) = SiteConfig::from_json(r#"{ "timing": { "counter_tick_ms": 0 } }"#) else {
        panic!("config should parse");
    };
    assert_eq!(config.timing.counter_tick_ms, 1);
}

#[test]
fn photo_position_transform_is_optional() {
    let Ok(config) = SiteConfig::from_json(r#"{ "photo_positions": { "hero": { "top": "10%", "left": "20%" } } }"#)
    else {
        panic!("config should parse");
    };
    assert_eq!(config.photo_positions["hero"].transform, "translate(-50%, -50%)");
    assert_eq!(config.photo_positions.len(), 1);
}

#[test]
fn invalid_json_is_config_error() {
    assert!(matches!(SiteConfig::from_json("{ nope"), Err(PortfolioError::Config(_))));
    assert!(matches!(SiteConfig::from_json(r#"{ "photo_mode": "spin" }"#), Err(PortfolioError::Config(_))));
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = SiteConfig { log_level: "chatty".into(), ..SiteConfig::default() };
    assert_eq!(config.level(), log::Level::Info);
    let config = SiteConfig { log_level: "debug".into(), ..SiteConfig::default() };
    assert_eq!(config.level(), log::Level::Debug);
}
