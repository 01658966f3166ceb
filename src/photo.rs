//! Floating photo behavior for both photo modes.
//!
//! Drift mode nudges the photo toward the pointer on wide viewports. Cycle
//! mode parks it at a per-section preset and moves it on navigation. Each
//! move bumps a generation so only the newest move's timer clears `moving`.
//!
//! Pointer updates are throttled on the leading edge. A move that lands
//! inside the window is held and flushed once the window closes, so the photo
//! settles on the pointer's final position.

use std::collections::BTreeMap;

use crate::config::{PagePhotoClass, PhotoMode, PhotoPosition, SiteConfig};
use crate::consts::{CLASS_CLICKED, CLASS_MOVING};
use crate::effect::{Deferred, Effect, Target};
use crate::snapshot::page_file;
use crate::state::PageState;
use crate::timing::Throttle;

#[cfg(test)]
#[path = "photo_test.rs"]
mod photo_test;

#[derive(Debug, Clone)]
pub struct Photo {
    present: bool,
    mode: PhotoMode,
    positions: BTreeMap<String, PhotoPosition>,
    page_classes: Vec<PagePhotoClass>,
    factor: f64,
    min_width: f64,
    move_ms: u32,
    throttle: Throttle,
    throttle_ms: u32,
    /// Transform held back by the throttle.
    pending: Option<String>,
    flush_scheduled: bool,
    move_generation: u64,
}

impl Photo {
    #[must_use]
    pub fn new(config: &SiteConfig, present: bool) -> Self {
        Self {
            present,
            mode: config.photo_mode,
            positions: config.photo_positions.clone(),
            page_classes: config.page_photo_classes.clone(),
            factor: config.parallax_factor,
            min_width: config.parallax_min_width,
            move_ms: config.timing.photo_move_ms,
            throttle: Throttle::new(config.timing.parallax_throttle_ms),
            throttle_ms: config.timing.parallax_throttle_ms,
            pending: None,
            flush_scheduled: false,
            move_generation: 0,
        }
    }

    #[must_use]
    pub fn present(&self) -> bool {
        self.present
    }

    #[must_use]
    pub fn mode(&self) -> PhotoMode {
        self.mode
    }

    /// Startup effects: page class, then the mode's initial placement.
    pub fn init(&mut self, state: &mut PageState, pathname: &str, first_section: Option<&str>) -> Vec<Effect> {
        if !self.present {
            return Vec::new();
        }
        let mut effects = self.page_class(pathname);
        match self.mode {
            PhotoMode::Drift => {
                state.parallax_enabled = state.viewport_width > self.min_width;
            }
            PhotoMode::Cycle => {
                if let Some(section) = first_section {
                    effects.extend(self.move_to(section));
                }
            }
        }
        effects
    }

    /// Swap in the position class configured for the current page.
    ///
    /// Pages not in the list get the first entry's class.
    #[must_use]
    pub fn page_class(&self, pathname: &str) -> Vec<Effect> {
        if !self.present || self.page_classes.is_empty() {
            return Vec::new();
        }
        let file = page_file(pathname);
        let chosen = self
            .page_classes
            .iter()
            .find(|pc| pc.page == file)
            .or_else(|| self.page_classes.first());
        let mut effects: Vec<Effect> = self
            .page_classes
            .iter()
            .map(|pc| Effect::remove_class(Target::Photo, &pc.class))
            .collect();
        if let Some(pc) = chosen {
            effects.push(Effect::add_class(Target::Photo, &pc.class));
        }
        effects
    }

    /// Park the photo at `section`'s preset (cycle mode only).
    pub fn move_to(&mut self, section: &str) -> Vec<Effect> {
        if !self.present || self.mode != PhotoMode::Cycle {
            return Vec::new();
        }
        let Some(pos) = self.positions.get(section) else {
            return Vec::new();
        };
        self.move_generation += 1;
        vec![
            Effect::style(Target::Photo, "top", pos.top.clone()),
            Effect::style(Target::Photo, "left", pos.left.clone()),
            Effect::style(Target::Photo, "transform", pos.transform.clone()),
            Effect::add_class(Target::Photo, CLASS_MOVING),
            Effect::Schedule {
                delay_ms: self.move_ms,
                task: Deferred::EndPhotoMove { generation: self.move_generation },
            },
        ]
    }

    /// Clear `moving` unless a newer move has started since.
    #[must_use]
    pub fn end_move(&self, generation: u64) -> Vec<Effect> {
        if generation != self.move_generation {
            return Vec::new();
        }
        vec![Effect::remove_class(Target::Photo, CLASS_MOVING)]
    }

    /// Mark the photo as clicked (hides the "click me" hint).
    #[must_use]
    pub fn mark_clicked(&self) -> Vec<Effect> {
        if !self.present || self.mode != PhotoMode::Cycle {
            return Vec::new();
        }
        vec![Effect::add_class(Target::Photo, CLASS_CLICKED)]
    }

    /// Pointer entered the photo (drift mode).
    #[must_use]
    pub fn on_enter(&self) -> Vec<Effect> {
        if !self.present || self.mode != PhotoMode::Drift {
            return Vec::new();
        }
        vec![Effect::style(Target::Photo, "transition", "all 0.3s ease")]
    }

    /// Pointer moved anywhere on the page (drift mode, throttled).
    ///
    /// A throttled move is kept and a single flush is scheduled for it.
    pub fn on_mouse_move(
        &mut self,
        state: &PageState,
        client: (f64, f64),
        viewport: (f64, f64),
        now_ms: f64,
    ) -> Vec<Effect> {
        if !self.present || self.mode != PhotoMode::Drift || !state.parallax_enabled {
            return Vec::new();
        }
        let dx = (client.0 - viewport.0 / 2.0) * self.factor;
        let dy = (client.1 - viewport.1 / 2.0) * self.factor;
        let transform = format!("translate({dx}px, {dy}px)");
        if self.throttle.allow(now_ms) {
            self.pending = None;
            return vec![Effect::style(Target::Photo, "transform", transform)];
        }
        self.pending = Some(transform);
        if self.flush_scheduled {
            return Vec::new();
        }
        self.flush_scheduled = true;
        vec![Effect::Schedule { delay_ms: self.throttle_ms, task: Deferred::FlushParallax }]
    }

    /// Throttle window closed: apply the held-back transform, if any.
    pub fn flush(&mut self, state: &PageState) -> Vec<Effect> {
        self.flush_scheduled = false;
        let Some(transform) = self.pending.take() else {
            return Vec::new();
        };
        if self.mode != PhotoMode::Drift || !state.parallax_enabled {
            return Vec::new();
        }
        vec![Effect::style(Target::Photo, "transform", transform)]
    }

    /// The photo went away before a flush ran.
    pub fn abandon_flush(&mut self) {
        self.flush_scheduled = false;
        self.pending = None;
    }

    /// Debounced resize: re-place (cycle) or re-evaluate parallax (drift).
    pub fn reposition(&mut self, state: &mut PageState) -> Vec<Effect> {
        if !self.present {
            return Vec::new();
        }
        match self.mode {
            PhotoMode::Cycle => {
                let Some(section) = state.section.current().map(str::to_owned) else {
                    return Vec::new();
                };
                self.move_to(&section)
            }
            PhotoMode::Drift => {
                let was_enabled = state.parallax_enabled;
                state.parallax_enabled = state.viewport_width > self.min_width;
                if was_enabled && !state.parallax_enabled {
                    self.pending = None;
                    vec![Effect::style(Target::Photo, "transform", "")]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
