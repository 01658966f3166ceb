//! Event listeners and intersection observers.
//!
//! Every listener installed here lives as long as the document, so the
//! closures are handed to JS and forgotten.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

use super::page::{Page, viewport};
use super::{Host, scroll_to};
use crate::contact::ContactMessage;
use crate::error::{PortfolioError, describe_js};
use crate::reveal::{Observation, Watch};

/// Attach a page-lifetime listener.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PortfolioError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Wire every feature whose elements are present.
pub fn install(host: &Rc<Host>) -> Result<(), PortfolioError> {
    install_nav(host)?;
    install_photo(host)?;
    install_filter(host)?;
    install_contact(host)?;
    // After the nav links, so a handled link click is seen as prevented.
    install_anchors(host)?;
    install_observers(host)?;
    Ok(())
}

fn install_nav(host: &Rc<Host>) -> Result<(), PortfolioError> {
    if let Some(toggle) = &host.page.nav_toggle {
        let h = Rc::clone(host);
        on(toggle, "click", move |_| h.dispatch(None, |core| core.on_nav_toggle()))?;
    }

    for (index, link) in host.page.nav_links.iter().enumerate() {
        let h = Rc::clone(host);
        on(link, "click", move |e| h.dispatch(Some(&e), |core| core.on_nav_link(index)))?;
    }

    let h = Rc::clone(host);
    on(&host.window, "scroll", move |_| {
        let y = h.window.scroll_y().unwrap_or_default();
        h.dispatch(None, |core| core.on_scroll(y));
    })?;

    let h = Rc::clone(host);
    on(&host.page.document, "keydown", move |e| {
        let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let editable = e.target().is_some_and(|t| is_editable(&t));
        h.dispatch(Some(&e), |core| core.on_key(&key, editable));
    })
}

/// Text inputs keep their arrow and Home/End keys.
fn is_editable(target: &EventTarget) -> bool {
    let Some(el) = target.dyn_ref::<Element>() else {
        return false;
    };
    if matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT") {
        return true;
    }
    el.dyn_ref::<HtmlElement>().is_some_and(HtmlElement::is_content_editable)
}

fn install_photo(host: &Rc<Host>) -> Result<(), PortfolioError> {
    let Some(photo) = &host.page.photo else {
        return Ok(());
    };

    let h = Rc::clone(host);
    on(photo, "click", move |_| h.dispatch(None, |core| core.on_photo_click()))?;

    let h = Rc::clone(host);
    on(photo, "mouseenter", move |_| h.dispatch(None, |core| core.on_photo_enter()))?;

    let h = Rc::clone(host);
    on(&host.page.document, "mousemove", move |e| {
        let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
            return;
        };
        let client = (f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        let view = viewport(&h.window);
        let now = js_sys::Date::now();
        h.dispatch(None, |core| core.on_mouse_move(client, view, now));
    })?;

    let h = Rc::clone(host);
    on(&host.window, "resize", move |_| {
        let width = viewport(&h.window).0;
        h.dispatch(None, |core| core.on_resize(width));
    })
}

fn install_filter(host: &Rc<Host>) -> Result<(), PortfolioError> {
    for (index, button) in host.page.filter_buttons.iter().enumerate() {
        let h = Rc::clone(host);
        on(button, "click", move |_| h.dispatch(None, |core| core.on_filter(index)))?;
    }
    Ok(())
}

fn install_contact(host: &Rc<Host>) -> Result<(), PortfolioError> {
    let Some(form) = &host.page.contact_form else {
        return Ok(());
    };
    let h = Rc::clone(host);
    let form_for_cb = form.clone();
    on(form, "submit", move |e| {
        let message = match read_form(&form_for_cb) {
            Ok(message) => message,
            Err(err) => {
                log::warn!("could not read contact form: {}", describe_js(&err));
                ContactMessage::default()
            }
        };
        h.dispatch(Some(&e), |core| core.on_contact_submit(&message));
    })
}

fn read_form(form: &HtmlFormElement) -> Result<ContactMessage, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut entries = Vec::new();
    if let Some(iter) = js_sys::try_iter(&data)? {
        for entry in iter {
            let pair: js_sys::Array = entry?.dyn_into()?;
            let key = pair.get(0).as_string().unwrap_or_default();
            let value = pair.get(1).as_string().unwrap_or_default();
            entries.push((key, value));
        }
    }
    Ok(ContactMessage::from_entries(entries))
}

/// Smooth scrolling for in-page anchors. A bare `#` and unknown targets are
/// left to the browser.
fn install_anchors(host: &Rc<Host>) -> Result<(), PortfolioError> {
    for anchor in &host.page.anchors {
        let h = Rc::clone(host);
        let link = anchor.clone();
        on(anchor, "click", move |e| {
            if e.default_prevented() {
                return;
            }
            let href = link.get_attribute("href").unwrap_or_default();
            if href == "#" {
                return;
            }
            match h.page.document.query_selector(&href) {
                Ok(Some(target)) => {
                    e.prevent_default();
                    scroll_to(&target);
                }
                Ok(None) => {}
                Err(err) => log::debug!("anchor {href} is not a selector: {}", describe_js(&err)),
            }
        })?;
    }
    Ok(())
}

fn install_observers(host: &Rc<Host>) -> Result<(), PortfolioError> {
    for watch in Watch::ALL {
        let elements = host.page.watched(watch);
        if elements.is_empty() {
            continue;
        }

        let h = Rc::clone(host);
        let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let observations: Vec<Observation> =
                entries.iter().filter_map(|entry| observation(&h.page, watch, &entry)).collect();
            if !observations.is_empty() {
                h.dispatch(None, |core| core.on_visibility(&observations));
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(host.core.borrow().reveal.threshold(watch)));
        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
        cb.forget();

        for el in elements {
            observer.observe(el);
        }
        log::debug!("observing {} element(s) for {watch:?}", elements.len());
        host.observers.borrow_mut().insert(watch, observer);
    }
    Ok(())
}

fn observation(page: &Page, watch: Watch, entry: &JsValue) -> Option<Observation> {
    let entry = entry.dyn_ref::<IntersectionObserverEntry>()?;
    let el = entry.target();
    let index = page.watched(watch).iter().position(|w| *w == el)?;
    Some(Observation {
        watch,
        index,
        element_id: el.id(),
        ratio: entry.intersection_ratio(),
        intersecting: entry.is_intersecting(),
    })
}
