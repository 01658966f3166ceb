//! Explicit page state shared by the feature handlers.
//!
//! DESIGN
//! ======
//! Everything the handlers remember between events lives here instead of in
//! globals. The section index is written by several independent triggers
//! with no arbitration: the last writer wins, and the tracker records which
//! trigger that was so the behavior is observable in logs and tests.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Which event last moved the section index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTrigger {
    /// Initial value at startup.
    #[default]
    Startup,
    /// A section scrolled into view.
    Observer,
    /// A nav link was clicked.
    NavLink,
    /// An arrow/page/home/end key was pressed.
    Keyboard,
    /// The floating photo was clicked (cycle mode).
    Photo,
}

/// Index into the configured section list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    ids: Vec<String>,
    index: usize,
    last_trigger: NavTrigger,
}

impl SectionTracker {
    #[must_use]
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids, index: 0, last_trigger: NavTrigger::Startup }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn last_trigger(&self) -> NavTrigger {
        self.last_trigger
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Id of the current section.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.ids.get(self.index).map(String::as_str)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Jump to the section with `id`. Unknown ids leave the index alone.
    pub fn set_by_id(&mut self, id: &str, trigger: NavTrigger) -> Option<usize> {
        let index = self.position(id)?;
        self.set(index, trigger);
        Some(index)
    }

    /// Set the index, clamped to the last section.
    pub fn set(&mut self, index: usize, trigger: NavTrigger) {
        self.index = index.min(self.ids.len().saturating_sub(1));
        self.last_trigger = trigger;
    }

    /// Step forward, stopping at the last section.
    pub fn next(&mut self, trigger: NavTrigger) {
        self.set(self.index.saturating_add(1), trigger);
    }

    /// Step back, stopping at the first section.
    pub fn prev(&mut self, trigger: NavTrigger) {
        self.set(self.index.saturating_sub(1), trigger);
    }

    /// Step forward, wrapping to the first section after the last.
    pub fn cycle(&mut self, trigger: NavTrigger) {
        if self.ids.is_empty() {
            return;
        }
        self.set((self.index + 1) % self.ids.len(), trigger);
    }
}

/// Mutable page state owned by the app core.
#[derive(Debug, Clone)]
pub struct PageState {
    pub section: SectionTracker,
    pub menu_open: bool,
    pub navbar_scrolled: bool,
    pub active_filter: Option<usize>,
    pub parallax_enabled: bool,
    pub viewport_width: f64,
}

impl PageState {
    #[must_use]
    pub fn new(sections: Vec<String>, viewport_width: f64) -> Self {
        Self {
            section: SectionTracker::new(sections),
            menu_open: false,
            navbar_scrolled: false,
            active_filter: None,
            parallax_enabled: false,
            viewport_width,
        }
    }
}
