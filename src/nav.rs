//! Navigation: mobile menu, active link highlighting, navbar scroll state,
//! and keyboard section stepping.

use crate::consts::{CLASS_ACTIVE, CLASS_SCROLLED};
use crate::effect::{Effect, Target};
use crate::state::PageState;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A section-stepping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    Next,
    Prev,
    First,
    Last,
}

impl SectionKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" => Some(Self::Next),
            "ArrowUp" | "PageUp" => Some(Self::Prev),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Nav {
    /// `data-section` per `.nav-link`.
    links: Vec<Option<String>>,
    /// Both `.nav-toggle` and `.nav-menu` exist.
    has_menu: bool,
    has_navbar: bool,
    scroll_offset: f64,
}

impl Nav {
    #[must_use]
    pub fn new(links: Vec<Option<String>>, has_menu: bool, has_navbar: bool, scroll_offset: f64) -> Self {
        Self { links, has_menu, has_navbar, scroll_offset }
    }

    /// `data-section` of the link at `index`.
    #[must_use]
    pub fn link_section(&self, index: usize) -> Option<&str> {
        self.links.get(index).and_then(Option::as_deref)
    }

    /// Flip the mobile menu open/closed.
    pub fn toggle(&self, state: &mut PageState) -> Vec<Effect> {
        if !self.has_menu {
            return Vec::new();
        }
        state.menu_open = !state.menu_open;
        menu_effects(state.menu_open)
    }

    /// Close the menu. Emits the closed state even if it was already closed.
    pub fn close(&self, state: &mut PageState) -> Vec<Effect> {
        if !self.has_menu {
            return Vec::new();
        }
        state.menu_open = false;
        menu_effects(false)
    }

    /// Escape closes an open menu and does nothing otherwise.
    pub fn escape(&self, state: &mut PageState) -> Vec<Effect> {
        if !state.menu_open {
            return Vec::new();
        }
        self.close(state)
    }

    /// Mark the links pointing at `section` active and clear every other link.
    #[must_use]
    pub fn highlight(&self, section: Option<&str>) -> Vec<Effect> {
        let mut effects: Vec<Effect> = (0..self.links.len())
            .map(|i| Effect::remove_class(Target::NavLink(i), CLASS_ACTIVE))
            .collect();
        let Some(section) = section else {
            return effects;
        };
        effects.extend(
            self.links
                .iter()
                .enumerate()
                .filter(|(_, link)| link.as_deref() == Some(section))
                .map(|(i, _)| Effect::add_class(Target::NavLink(i), CLASS_ACTIVE)),
        );
        effects
    }

    /// Sync the navbar `scrolled` class with the scroll offset.
    pub fn on_scroll(&self, state: &mut PageState, scroll_y: f64) -> Vec<Effect> {
        if !self.has_navbar {
            return Vec::new();
        }
        state.navbar_scrolled = scroll_y > self.scroll_offset;
        if state.navbar_scrolled {
            vec![Effect::add_class(Target::Navbar, CLASS_SCROLLED)]
        } else {
            vec![Effect::remove_class(Target::Navbar, CLASS_SCROLLED)]
        }
    }
}

fn menu_effects(open: bool) -> Vec<Effect> {
    let targets = [Target::NavToggle, Target::NavMenu];
    let mut effects: Vec<Effect> = targets
        .into_iter()
        .map(|t| {
            if open {
                Effect::add_class(t, CLASS_ACTIVE)
            } else {
                Effect::remove_class(t, CLASS_ACTIVE)
            }
        })
        .collect();
    effects.push(Effect::style(Target::Body, "overflow", if open { "hidden" } else { "" }));
    effects
}
