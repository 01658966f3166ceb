//! Browser host: binds the DOM to [`AppCore`].
//!
//! ARCHITECTURE
//! ============
//! The host queries the page once, builds the core from a snapshot, then
//! installs listeners and intersection observers that forward events to the
//! core. Effects coming back are applied here, one at a time; a failing DOM
//! call is logged and the remaining effects still run.
//!
//! Scheduled effects become `spawn_local` futures sleeping on `gloo-timers`.
//! When one wakes, its target element must still be attached or the task is
//! abandoned, so a detached node is never mutated by a stale timer.

mod listen;
mod notify;
mod page;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::app::AppCore;
use crate::config::SiteConfig;
use crate::consts::ID_CONFIG;
use crate::effect::{Deferred, Effect, Target};
use crate::error::{PortfolioError, describe_js};
use crate::reveal::Watch;

use self::notify::NotificationNode;
use self::page::Page;

pub struct Host {
    window: Window,
    page: Page,
    core: RefCell<AppCore>,
    notifications: RefCell<HashMap<u64, NotificationNode>>,
    observers: RefCell<HashMap<Watch, IntersectionObserver>>,
}

/// Entry point: set up logging and config, then mount once the DOM is ready.
pub fn start() -> Result<(), PortfolioError> {
    let window = web_sys::window().ok_or(PortfolioError::NoWindow)?;
    let document = window.document().ok_or(PortfolioError::NoDocument)?;

    let (config, config_err) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.level()) {
        log::debug!("logger already installed: {err}");
    }
    if let Some(err) = config_err {
        log::warn!("{err}; using default config");
    }

    if document.ready_state() == "loading" {
        let mut pending = Some(config);
        let ready_window = window.clone();
        let ready_document = document.clone();
        listen::on(&document, "DOMContentLoaded", move |_| {
            if let Some(config) = pending.take()
                && let Err(err) = mount(&ready_window, &ready_document, config)
            {
                log::error!("portfolio mount failed: {err}");
            }
        })?;
        return Ok(());
    }
    mount(&window, &document, config)
}

fn read_config(document: &Document) -> Result<SiteConfig, PortfolioError> {
    let raw = document
        .get_element_by_id(ID_CONFIG)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&raw)
}

fn mount(window: &Window, document: &Document, config: SiteConfig) -> Result<(), PortfolioError> {
    let page = Page::query(document)?;
    let snapshot = page.snapshot(window);
    let core = AppCore::new(config, snapshot);
    let host = Rc::new(Host {
        window: window.clone(),
        page,
        core: RefCell::new(core),
        notifications: RefCell::new(HashMap::new()),
        observers: RefCell::new(HashMap::new()),
    });

    let effects = host.core.borrow_mut().init();
    host.apply(effects, None);
    listen::install(&host)?;
    log::info!("portfolio initialized");
    Ok(())
}

impl Host {
    /// Run `f` against the core, then apply its effects outside the borrow.
    fn dispatch(self: &Rc<Self>, event: Option<&Event>, f: impl FnOnce(&mut AppCore) -> Vec<Effect>) {
        let effects = {
            let mut core = self.core.borrow_mut();
            f(&mut *core)
        };
        self.apply(effects, event);
    }

    fn apply(self: &Rc<Self>, effects: Vec<Effect>, event: Option<&Event>) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect, event) {
                log::warn!("effect failed: {}", describe_js(&err));
            }
        }
    }

    fn apply_one(self: &Rc<Self>, effect: Effect, event: Option<&Event>) -> Result<(), JsValue> {
        match effect {
            Effect::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            Effect::AddClass { target, class } => {
                if let Some(el) = self.element(&target) {
                    el.class_list().add_1(&class)?;
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.element(&target) {
                    el.class_list().remove_1(&class)?;
                }
            }
            Effect::SetStyle { target, property, value } => {
                if let Some(el) = self.element(&target).and_then(|el| el.dyn_ref::<HtmlElement>().cloned()) {
                    el.style().set_property(property, &value)?;
                }
            }
            Effect::SetText { target, text } => {
                if let Some(el) = self.element(&target) {
                    el.set_text_content(Some(&text));
                }
            }
            Effect::ScrollIntoView { target } => {
                if let Some(el) = self.element(&target) {
                    scroll_to(&el);
                }
            }
            Effect::Unobserve { target } => self.unobserve(&target),
            Effect::Schedule { delay_ms, task } => self.schedule(delay_ms, task),
            Effect::ShowNotification { id, kind, message } => {
                let node = notify::build(self, id, kind, &message)?;
                if let Some(body) = &self.page.body {
                    body.append_child(node.element())?;
                }
                self.notifications.borrow_mut().insert(id, node);
            }
            Effect::RemoveNotification { id } => {
                let node = self.notifications.borrow_mut().remove(&id);
                if let Some(node) = node {
                    node.element().remove();
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &self.page.contact_form {
                    form.reset();
                }
            }
        }
        Ok(())
    }

    fn element(&self, target: &Target) -> Option<Element> {
        match target {
            Target::Notification(id) => self.notifications.borrow().get(id).map(|n| n.element().clone()),
            other => self.page.element(other),
        }
    }

    fn is_connected(&self, target: &Target) -> bool {
        self.element(target).is_some_and(|el| el.is_connected())
    }

    fn unobserve(&self, target: &Target) {
        let watch = match target {
            Target::SkillBar(_) => Watch::SkillBars,
            Target::Counter(_) => Watch::Counters,
            Target::Animated(_) => Watch::Animated,
            _ => Watch::Sections,
        };
        let Some(el) = self.element(target) else {
            return;
        };
        if let Some(observer) = self.observers.borrow().get(&watch) {
            observer.unobserve(&el);
        }
    }

    fn schedule(self: &Rc<Self>, delay_ms: u32, task: Deferred) {
        let host = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(u64::from(delay_ms))).await;
            host.run_deferred(&task);
        });
    }

    fn run_deferred(self: &Rc<Self>, task: &Deferred) {
        if let Some(target) = task.target()
            && !self.is_connected(&target)
        {
            log::debug!("dropping {task:?}: {target:?} is detached");
            self.core.borrow_mut().abandon(task);
            return;
        }
        self.dispatch(None, |core| core.on_deferred(task));
    }
}

fn scroll_to(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
