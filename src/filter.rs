//! Project card filtering by category.

use crate::consts::{CLASS_ACTIVE, FILTER_ALL};
use crate::effect::{Effect, Target};
use crate::state::PageState;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

#[derive(Debug, Clone)]
pub struct ProjectFilter {
    /// `data-filter` per button.
    buttons: Vec<Option<String>>,
    /// `data-category` per card.
    categories: Vec<Option<String>>,
}

impl ProjectFilter {
    #[must_use]
    pub fn new(buttons: Vec<Option<String>>, categories: Vec<Option<String>>) -> Self {
        Self { buttons, categories }
    }

    /// Inert unless the page has both buttons and cards.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.buttons.is_empty() && !self.categories.is_empty()
    }

    /// Filter value of a button; a button without one acts as `all`.
    #[must_use]
    pub fn filter_value(&self, index: usize) -> &str {
        self.buttons
            .get(index)
            .and_then(Option::as_deref)
            .unwrap_or(FILTER_ALL)
    }

    /// Whether a card is shown under `filter`.
    #[must_use]
    pub fn matches(filter: &str, category: Option<&str>) -> bool {
        filter == FILTER_ALL || category == Some(filter)
    }

    /// Activate button `index` and show/hide cards accordingly.
    pub fn click(&self, state: &mut PageState, index: usize) -> Vec<Effect> {
        if !self.enabled() || index >= self.buttons.len() {
            return Vec::new();
        }
        state.active_filter = Some(index);

        let mut effects: Vec<Effect> = (0..self.buttons.len())
            .map(|i| Effect::remove_class(Target::FilterButton(i), CLASS_ACTIVE))
            .collect();
        effects.push(Effect::add_class(Target::FilterButton(index), CLASS_ACTIVE));

        let filter = self.filter_value(index);
        for (i, category) in self.categories.iter().enumerate() {
            let card = Target::ProjectCard(i);
            if Self::matches(filter, category.as_deref()) {
                effects.push(Effect::style(card.clone(), "display", "block"));
                effects.push(Effect::style(card, "animation", "fadeIn 0.5s ease forwards"));
            } else {
                effects.push(Effect::style(card, "display", "none"));
            }
        }
        effects
    }
}
