//! Testable application core: every page event in, effects out.
//!
//! `AppCore` owns the explicit [`PageState`] and the per-feature state
//! machines. The browser host (`dom`) forwards events here and applies what
//! comes back; nothing in this module touches the DOM.

use crate::config::{PhotoMode, SiteConfig};
use crate::contact::{ContactMessage, Notifier, submit};
use crate::effect::{Deferred, Effect, Target};
use crate::filter::ProjectFilter;
use crate::nav::{Nav, SectionKey};
use crate::photo::Photo;
use crate::reveal::{Observation, Reveal};
use crate::snapshot::PageSnapshot;
use crate::state::{NavTrigger, PageState};
use crate::timing::Debouncer;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

pub struct AppCore {
    pub config: SiteConfig,
    pub state: PageState,
    pub nav: Nav,
    pub photo: Photo,
    pub reveal: Reveal,
    pub filter: ProjectFilter,
    pub notifier: Notifier,
    resize: Debouncer,
    has_contact_form: bool,
    pathname: String,
    initial_scroll_y: f64,
}

impl AppCore {
    #[must_use]
    pub fn new(config: SiteConfig, snapshot: PageSnapshot) -> Self {
        let state = PageState::new(present_sections(&config.sections, &snapshot.sections), snapshot.viewport_width);
        let nav = Nav::new(
            snapshot.nav_links,
            snapshot.has_nav_toggle && snapshot.has_nav_menu,
            snapshot.has_navbar,
            config.navbar_scroll_offset,
        );
        let photo = Photo::new(&config, snapshot.has_photo);
        let reveal = Reveal::new(
            config.thresholds,
            &config.timing,
            snapshot.animated_count,
            &snapshot.skill_widths,
            &snapshot.counters,
        );
        let filter = ProjectFilter::new(snapshot.filter_buttons, snapshot.project_categories);
        let notifier = Notifier::new(&config.timing);
        Self {
            config,
            state,
            nav,
            photo,
            reveal,
            filter,
            notifier,
            resize: Debouncer::new(),
            has_contact_form: snapshot.has_contact_form,
            pathname: snapshot.pathname,
            initial_scroll_y: snapshot.scroll_y,
        }
    }

    /// Startup effects, applied once before any event.
    pub fn init(&mut self) -> Vec<Effect> {
        let first = self.state.section.current().map(str::to_owned);
        let mut effects = self.photo.init(&mut self.state, &self.pathname, first.as_deref());
        effects.extend(self.reveal.init());
        effects.extend(self.nav.on_scroll(&mut self.state, self.initial_scroll_y));
        effects.extend(self.nav.highlight(first.as_deref()));
        effects
    }

    // --- Navigation ---

    pub fn on_nav_toggle(&mut self) -> Vec<Effect> {
        self.nav.toggle(&mut self.state)
    }

    /// A `.nav-link` was clicked.
    ///
    /// The menu always closes. Links naming a known section also take over
    /// the scroll and move the section index.
    pub fn on_nav_link(&mut self, index: usize) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(section) = self.nav.link_section(index).map(str::to_owned)
            && let Some(pos) = self.state.section.position(&section)
        {
            effects.push(Effect::PreventDefault);
            self.state.section.set(pos, NavTrigger::NavLink);
            effects.extend(self.navigate_current());
        }
        effects.extend(self.nav.close(&mut self.state));
        effects
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<Effect> {
        self.nav.on_scroll(&mut self.state, scroll_y)
    }

    /// A keydown anywhere in the document.
    ///
    /// `editable` is true when the key went to a text field; section
    /// stepping never steals keys from those.
    pub fn on_key(&mut self, key: &str, editable: bool) -> Vec<Effect> {
        if key == "Escape" {
            return self.nav.escape(&mut self.state);
        }
        if editable || !self.config.keyboard_navigation || self.state.section.is_empty() {
            return Vec::new();
        }
        let Some(step) = SectionKey::from_key(key) else {
            return Vec::new();
        };
        let tracker = &mut self.state.section;
        let last = tracker.len().saturating_sub(1);
        match step {
            SectionKey::Next => tracker.next(NavTrigger::Keyboard),
            SectionKey::Prev => tracker.prev(NavTrigger::Keyboard),
            SectionKey::First => tracker.set(0, NavTrigger::Keyboard),
            SectionKey::Last => tracker.set(last, NavTrigger::Keyboard),
        }
        let mut effects = vec![Effect::PreventDefault];
        effects.extend(self.navigate_current());
        effects
    }

    /// Scroll to the current section, highlight its links, and move the
    /// photo there in cycle mode.
    fn navigate_current(&mut self) -> Vec<Effect> {
        let Some(section) = self.state.section.current().map(str::to_owned) else {
            return Vec::new();
        };
        let mut effects = vec![Effect::ScrollIntoView { target: Target::Section(section.clone()) }];
        effects.extend(self.photo.move_to(&section));
        effects.extend(self.nav.highlight(Some(&section)));
        effects
    }

    // --- Photo ---

    pub fn on_photo_click(&mut self) -> Vec<Effect> {
        if !self.photo.present() || self.photo.mode() != PhotoMode::Cycle {
            return Vec::new();
        }
        let mut effects = self.photo.mark_clicked();
        self.state.section.cycle(NavTrigger::Photo);
        effects.extend(self.navigate_current());
        effects
    }

    pub fn on_photo_enter(&mut self) -> Vec<Effect> {
        self.photo.on_enter()
    }

    pub fn on_mouse_move(&mut self, client: (f64, f64), viewport: (f64, f64), now_ms: f64) -> Vec<Effect> {
        self.photo.on_mouse_move(&self.state, client, viewport, now_ms)
    }

    /// Window resized. Only the last resize of a burst repositions the photo.
    pub fn on_resize(&mut self, viewport_width: f64) -> Vec<Effect> {
        self.state.viewport_width = viewport_width;
        if !self.photo.present() {
            return Vec::new();
        }
        let ticket = self.resize.arm();
        vec![Effect::Schedule {
            delay_ms: self.config.timing.resize_debounce_ms,
            task: Deferred::Reposition { ticket },
        }]
    }

    // --- Visibility ---

    pub fn on_visibility(&mut self, observations: &[Observation]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for obs in observations {
            let dispatch = self.reveal.observe(obs);
            effects.extend(dispatch.effects);
            if let Some(id) = dispatch.section
                && self.state.section.set_by_id(&id, NavTrigger::Observer).is_some()
            {
                effects.extend(self.nav.highlight(Some(&id)));
            }
        }
        effects
    }

    // --- Filter / contact ---

    pub fn on_filter(&mut self, index: usize) -> Vec<Effect> {
        self.filter.click(&mut self.state, index)
    }

    pub fn on_contact_submit(&mut self, message: &ContactMessage) -> Vec<Effect> {
        if !self.has_contact_form {
            return Vec::new();
        }
        submit(&mut self.notifier, message)
    }

    pub fn on_notification_close(&mut self, id: u64) -> Vec<Effect> {
        self.notifier.remove(id)
    }

    // --- Timers ---

    /// A scheduled task came due.
    pub fn on_deferred(&mut self, task: &Deferred) -> Vec<Effect> {
        match *task {
            Deferred::FillSkillBar { index } => self.reveal.fill_skill(index),
            Deferred::CounterTick { index } => self.reveal.counter_tick(index),
            Deferred::EndPhotoMove { generation } => self.photo.end_move(generation),
            Deferred::Reposition { ticket } => {
                if self.resize.fire(ticket) {
                    self.photo.reposition(&mut self.state)
                } else {
                    Vec::new()
                }
            }
            Deferred::FlushParallax => self.photo.flush(&self.state),
            Deferred::FadeNotification { id } => self.notifier.fade(id),
            Deferred::RemoveNotification { id } => self.notifier.remove(id),
        }
    }

    /// A scheduled task's element is gone; drop any state waiting on it.
    pub fn abandon(&mut self, task: &Deferred) {
        match *task {
            Deferred::CounterTick { index } => self.reveal.abandon_counter(index),
            Deferred::FlushParallax => self.photo.abandon_flush(),
            Deferred::FadeNotification { id } | Deferred::RemoveNotification { id } => self.notifier.abandon(id),
            Deferred::FillSkillBar { .. } | Deferred::EndPhotoMove { .. } | Deferred::Reposition { .. } => {}
        }
    }
}

/// Configured section ids that exist on this page, in configured order.
///
/// Navigation only ever targets these; a page without any of them keeps the
/// browser's own link and key handling.
fn present_sections(configured: &[String], on_page: &[String]) -> Vec<String> {
    let present: Vec<String> = configured.iter().filter(|id| on_page.contains(id)).cloned().collect();
    if present.len() < configured.len() {
        log::debug!("{} of {} configured sections found on page", present.len(), configured.len());
    }
    present
}
