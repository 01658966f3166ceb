//! Site configuration, optionally read from an inline JSON block.
//!
//! The page may embed
//!
//! ```html
//! <script type="application/json" id="portfolio-config">{ "photo_mode": "cycle" }</script>
//! ```
//!
//! Every field is defaulted, so an absent block or a partial object is fine.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::consts::*;
use crate::error::PortfolioError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// How the floating photo reacts to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoMode {
    /// Photo stays put and drifts slightly with the pointer.
    #[default]
    Drift,
    /// Clicking the photo cycles it (and the page) through the sections.
    Cycle,
}

/// Absolute placement of the photo for one section (cycle mode).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoPosition {
    pub top: String,
    pub left: String,
    #[serde(default = "default_transform")]
    pub transform: String,
}

impl PhotoPosition {
    fn new(top: &str, left: &str) -> Self {
        Self { top: top.to_owned(), left: left.to_owned(), transform: default_transform() }
    }
}

fn default_transform() -> String {
    "translate(-50%, -50%)".to_owned()
}

/// A page file paired with the photo class applied on that page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagePhotoClass {
    pub page: String,
    pub class: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub sections: f64,
    pub animated: f64,
    pub skills: f64,
    pub counters: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTION_THRESHOLD,
            animated: DEFAULT_ANIMATED_THRESHOLD,
            skills: DEFAULT_SKILL_THRESHOLD,
            counters: DEFAULT_COUNTER_THRESHOLD,
        }
    }
}

/// Timer durations, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub resize_debounce_ms: u32,
    pub parallax_throttle_ms: u32,
    pub skill_fill_delay_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub photo_move_ms: u32,
    pub notification_ms: u32,
    pub notification_fade_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            parallax_throttle_ms: DEFAULT_PARALLAX_THROTTLE_MS,
            skill_fill_delay_ms: DEFAULT_SKILL_FILL_DELAY_MS,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
            photo_move_ms: DEFAULT_PHOTO_MOVE_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            notification_fade_ms: DEFAULT_NOTIFICATION_FADE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub photo_mode: PhotoMode,
    /// Section ids in page order; drives the section index.
    pub sections: Vec<String>,
    pub photo_positions: BTreeMap<String, PhotoPosition>,
    pub page_photo_classes: Vec<PagePhotoClass>,
    pub keyboard_navigation: bool,
    pub thresholds: Thresholds,
    pub timing: Timing,
    pub navbar_scroll_offset: f64,
    pub parallax_min_width: f64,
    pub parallax_factor: f64,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let photo_positions = [
            ("hero", PhotoPosition::new("50%", "75%")),
            ("about", PhotoPosition::new("35%", "15%")),
            ("skills", PhotoPosition::new("25%", "85%")),
            ("projects", PhotoPosition::new("20%", "10%")),
            ("contact", PhotoPosition::new("75%", "85%")),
        ]
        .into_iter()
        .map(|(id, pos)| (id.to_owned(), pos))
        .collect();

        Self {
            photo_mode: PhotoMode::default(),
            sections: DEFAULT_SECTIONS.iter().map(|s| (*s).to_owned()).collect(),
            photo_positions,
            page_photo_classes: Vec::new(),
            keyboard_navigation: true,
            thresholds: Thresholds::default(),
            timing: Timing::default(),
            navbar_scroll_offset: DEFAULT_NAVBAR_SCROLL_OFFSET,
            parallax_min_width: DEFAULT_PARALLAX_MIN_WIDTH,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a config block. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_json::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    /// The configured log level, falling back to `Info` on unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    fn normalize(&mut self) {
        self.sections.retain(|id| !id.trim().is_empty());
        if self.sections.is_empty() {
            self.sections = DEFAULT_SECTIONS.iter().map(|s| (*s).to_owned()).collect();
        }
        let t = &mut self.thresholds;
        for value in [&mut t.sections, &mut t.animated, &mut t.skills, &mut t.counters] {
            *value = value.clamp(0.0, 1.0);
        }
        self.timing.counter_tick_ms = self.timing.counter_tick_ms.max(1);
    }
}
