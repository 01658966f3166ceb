//! Element lookup for the page's DOM contract.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Window};

use crate::consts::*;
use crate::effect::Target;
use crate::error::PortfolioError;
use crate::reveal::Watch;
use crate::snapshot::PageSnapshot;

/// Every element the features bind to, queried once at startup.
pub struct Page {
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub navbar: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub sections: Vec<Element>,
    pub photo: Option<Element>,
    pub animated: Vec<Element>,
    pub skill_bars: Vec<Element>,
    pub counters: Vec<Element>,
    pub filter_buttons: Vec<Element>,
    pub project_cards: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub anchors: Vec<Element>,
}

impl Page {
    pub fn query(document: &Document) -> Result<Self, PortfolioError> {
        let contact_form = document
            .get_element_by_id(ID_CONTACT_FORM)
            .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned());
        Ok(Self {
            document: document.clone(),
            body: document.body(),
            navbar: document.query_selector(SEL_NAVBAR)?,
            nav_toggle: document.query_selector(SEL_NAV_TOGGLE)?,
            nav_menu: document.query_selector(SEL_NAV_MENU)?,
            nav_links: query_all(document, SEL_NAV_LINK)?,
            sections: query_all(document, SEL_SECTION)?,
            photo: document.get_element_by_id(ID_PHOTO),
            animated: query_all(document, SEL_ANIMATED)?,
            skill_bars: query_all(document, SEL_SKILL_BAR)?,
            counters: query_all(document, SEL_COUNTER)?,
            filter_buttons: query_all(document, SEL_FILTER_BUTTON)?,
            project_cards: query_all(document, SEL_PROJECT_CARD)?,
            contact_form,
            anchors: query_all(document, SEL_ANCHOR)?,
        })
    }

    /// Presence flags and `data-*` values for the core.
    #[must_use]
    pub fn snapshot(&self, window: &Window) -> PageSnapshot {
        PageSnapshot {
            has_navbar: self.navbar.is_some(),
            has_nav_toggle: self.nav_toggle.is_some(),
            has_nav_menu: self.nav_menu.is_some(),
            has_photo: self.photo.is_some(),
            has_contact_form: self.contact_form.is_some(),
            nav_links: data_values(&self.nav_links, "data-section"),
            sections: self.sections.iter().map(Element::id).collect(),
            animated_count: self.animated.len(),
            skill_widths: data_values(&self.skill_bars, "data-width"),
            counters: data_values(&self.counters, "data-count"),
            filter_buttons: data_values(&self.filter_buttons, "data-filter"),
            project_categories: data_values(&self.project_cards, "data-category"),
            pathname: window.location().pathname().unwrap_or_default(),
            viewport_width: viewport(window).0,
            scroll_y: window.scroll_y().unwrap_or_default(),
        }
    }

    /// Resolve a static target. Notifications are tracked by the host.
    #[must_use]
    pub fn element(&self, target: &Target) -> Option<Element> {
        let indexed = |list: &[Element], i: usize| list.get(i).cloned();
        match target {
            Target::Body => self.body.clone().map(Element::from),
            Target::Navbar => self.navbar.clone(),
            Target::NavToggle => self.nav_toggle.clone(),
            Target::NavMenu => self.nav_menu.clone(),
            Target::NavLink(i) => indexed(&self.nav_links, *i),
            Target::Section(id) => self.document.get_element_by_id(id),
            Target::Photo => self.photo.clone(),
            Target::Animated(i) => indexed(&self.animated, *i),
            Target::SkillBar(i) => indexed(&self.skill_bars, *i),
            Target::Counter(i) => indexed(&self.counters, *i),
            Target::FilterButton(i) => indexed(&self.filter_buttons, *i),
            Target::ProjectCard(i) => indexed(&self.project_cards, *i),
            Target::ContactForm => self.contact_form.clone().map(Element::from),
            Target::Notification(_) => None,
        }
    }

    /// Elements observed for a visibility group.
    #[must_use]
    pub fn watched(&self, watch: Watch) -> &[Element] {
        match watch {
            Watch::Sections => &self.sections,
            Watch::Animated => &self.animated,
            Watch::SkillBars => &self.skill_bars,
            Watch::Counters => &self.counters,
        }
    }
}

/// `(innerWidth, innerHeight)` in CSS pixels; 0 when unavailable.
pub fn viewport(window: &Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.map_or(0.0, |v| v.as_f64().unwrap_or_default())
    };
    (read(window.inner_width()), read(window.inner_height()))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PortfolioError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

fn data_values(elements: &[Element], attr: &str) -> Vec<Option<String>> {
    elements.iter().map(|el| el.get_attribute(attr)).collect()
}
