//! Visibility-triggered animation dispatch.
//!
//! DESIGN
//! ======
//! Four element groups are watched, each with its own threshold. An entry
//! counts as visible when it intersects the viewport at or above that
//! threshold. Sections and animated elements are repeatable; skill bars and
//! counters fire once and are then unobserved.
//!
//! Section hits only report the section id here: updating the section index
//! and nav links is the app's job.

use crate::config::{Thresholds, Timing};
use crate::consts::CLASS_VISIBLE;
use crate::effect::{Deferred, Effect, Target};
use crate::snapshot::{format_percent, parse_leading_int, parse_percent};
use crate::tween::CounterTween;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// An observed element group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Watch {
    Sections,
    Animated,
    SkillBars,
    Counters,
}

impl Watch {
    pub const ALL: [Self; 4] = [Self::Sections, Self::Animated, Self::SkillBars, Self::Counters];

    /// One-shot groups stop being observed after their first hit.
    #[must_use]
    pub fn one_shot(self) -> bool {
        matches!(self, Self::SkillBars | Self::Counters)
    }
}

/// One intersection entry, as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub watch: Watch,
    pub index: usize,
    /// Element id (sections only; empty otherwise).
    pub element_id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

/// Result of dispatching one observation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dispatch {
    pub effects: Vec<Effect>,
    /// Set when a section became visible.
    pub section: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    thresholds: Thresholds,
    fill_delay_ms: u32,
    counter_duration_ms: u32,
    counter_tick_ms: u32,
    animated_count: usize,
    skill_widths: Vec<f64>,
    skill_fired: Vec<bool>,
    counter_targets: Vec<i64>,
    counters: Vec<Option<CounterTween>>,
}

impl Reveal {
    #[must_use]
    pub fn new(
        thresholds: Thresholds,
        timing: &Timing,
        animated_count: usize,
        skill_widths: &[Option<String>],
        counters: &[Option<String>],
    ) -> Self {
        Self {
            thresholds,
            fill_delay_ms: timing.skill_fill_delay_ms,
            counter_duration_ms: timing.counter_duration_ms,
            counter_tick_ms: timing.counter_tick_ms,
            animated_count,
            skill_widths: skill_widths.iter().map(|w| parse_percent(w.as_deref())).collect(),
            skill_fired: vec![false; skill_widths.len()],
            counter_targets: counters.iter().map(|c| parse_leading_int(c.as_deref())).collect(),
            counters: vec![None; counters.len()],
        }
    }

    #[must_use]
    pub fn threshold(&self, watch: Watch) -> f64 {
        match watch {
            Watch::Sections => self.thresholds.sections,
            Watch::Animated => self.thresholds.animated,
            Watch::SkillBars => self.thresholds.skills,
            Watch::Counters => self.thresholds.counters,
        }
    }

    /// Resting state before anything is visible.
    #[must_use]
    pub fn init(&self) -> Vec<Effect> {
        let paused = (0..self.animated_count)
            .map(|i| Effect::style(Target::Animated(i), "animation-play-state", "paused"));
        let bars = (0..self.skill_widths.len()).map(|i| Effect::style(Target::SkillBar(i), "width", "0%"));
        let counters = (0..self.counter_targets.len()).map(|i| Effect::SetText {
            target: Target::Counter(i),
            text: "0".to_owned(),
        });
        paused.chain(bars).chain(counters).collect()
    }

    /// Route one intersection entry.
    pub fn observe(&mut self, obs: &Observation) -> Dispatch {
        if !obs.intersecting || obs.ratio < self.threshold(obs.watch) {
            return Dispatch::default();
        }
        match obs.watch {
            Watch::Sections => Dispatch {
                effects: vec![Effect::add_class(Target::Section(obs.element_id.clone()), CLASS_VISIBLE)],
                section: Some(obs.element_id.clone()),
            },
            Watch::Animated => {
                if obs.index >= self.animated_count {
                    return Dispatch::default();
                }
                Dispatch {
                    effects: vec![Effect::style(Target::Animated(obs.index), "animation-play-state", "running")],
                    section: None,
                }
            }
            Watch::SkillBars => Dispatch { effects: self.trigger_skill(obs.index), section: None },
            Watch::Counters => Dispatch { effects: self.trigger_counter(obs.index), section: None },
        }
    }

    fn trigger_skill(&mut self, index: usize) -> Vec<Effect> {
        let Some(fired) = self.skill_fired.get_mut(index) else {
            return Vec::new();
        };
        if *fired {
            return Vec::new();
        }
        *fired = true;
        vec![
            Effect::Schedule { delay_ms: self.fill_delay_ms, task: Deferred::FillSkillBar { index } },
            Effect::Unobserve { target: Target::SkillBar(index) },
        ]
    }

    fn trigger_counter(&mut self, index: usize) -> Vec<Effect> {
        let Some(target) = self.counter_targets.get(index).copied() else {
            return Vec::new();
        };
        let Some(slot) = self.counters.get_mut(index) else {
            return Vec::new();
        };
        if slot.is_some() {
            return Vec::new();
        }
        *slot = Some(CounterTween::new(target, self.counter_duration_ms, self.counter_tick_ms));
        vec![
            Effect::Schedule { delay_ms: self.counter_tick_ms, task: Deferred::CounterTick { index } },
            Effect::Unobserve { target: Target::Counter(index) },
        ]
    }

    /// Delayed half of a skill bar trigger: set its target width.
    #[must_use]
    pub fn fill_skill(&self, index: usize) -> Vec<Effect> {
        match self.skill_widths.get(index) {
            Some(width) => vec![Effect::style(Target::SkillBar(index), "width", format_percent(*width))],
            None => Vec::new(),
        }
    }

    /// One counter tick: show the next value and reschedule until done.
    pub fn counter_tick(&mut self, index: usize) -> Vec<Effect> {
        let Some(Some(tween)) = self.counters.get_mut(index) else {
            return Vec::new();
        };
        if tween.is_done() {
            return Vec::new();
        }
        let value = tween.step();
        let mut effects = vec![Effect::SetText { target: Target::Counter(index), text: value.to_string() }];
        if !tween.is_done() {
            effects.push(Effect::Schedule { delay_ms: self.counter_tick_ms, task: Deferred::CounterTick { index } });
        }
        effects
    }

    /// Stop a counter whose element went away mid-count.
    pub fn abandon_counter(&mut self, index: usize) {
        if let Some(Some(tween)) = self.counters.get_mut(index)
            && !tween.is_done()
        {
            log::debug!("counter {index} abandoned mid-count");
            tween.cancel();
        }
    }

    #[must_use]
    pub fn counter_running(&self, index: usize) -> bool {
        matches!(self.counters.get(index), Some(Some(t)) if !t.is_done())
    }
}
