//! Toast notification nodes.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement};

use super::Host;
use crate::consts::{CLASS_NOTIFICATION, CLASS_NOTIFICATION_CLOSE};
use crate::effect::NotificationKind;

const TOAST_STYLE: [(&str, &str); 12] = [
    ("position", "fixed"),
    ("top", "100px"),
    ("left", "50%"),
    ("transform", "translateX(-50%)"),
    ("padding", "1rem 2rem"),
    ("color", "#ffffff"),
    ("border-radius", "8px"),
    ("box-shadow", "0 10px 30px rgba(0, 0, 0, 0.3)"),
    ("z-index", "10000"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "1rem"),
];

const CLOSE_STYLE: [(&str, &str); 5] = [
    ("background", "none"),
    ("border", "none"),
    ("color", "white"),
    ("font-size", "1.5rem"),
    ("cursor", "pointer"),
];

/// A toast plus its close handler. Dropping the node drops the handler.
pub struct NotificationNode {
    element: Element,
    _on_close: Closure<dyn FnMut(Event)>,
}

impl NotificationNode {
    pub fn element(&self) -> &Element {
        &self.element
    }
}

/// Build a detached toast. Text goes in through `textContent`, never markup.
pub fn build(host: &Rc<Host>, id: u64, kind: NotificationKind, message: &str) -> Result<NotificationNode, JsValue> {
    let document = &host.page.document;

    let toast: HtmlElement = document.create_element("div")?.dyn_into()?;
    toast.set_class_name(&format!("{CLASS_NOTIFICATION} {CLASS_NOTIFICATION}-{}", kind.as_str()));
    let style = toast.style();
    for (property, value) in TOAST_STYLE {
        style.set_property(property, value)?;
    }
    style.set_property("background", kind.background())?;
    style.set_property("animation", "slideUp 0.3s ease forwards")?;

    let text = document.create_element("span")?;
    text.set_text_content(Some(message));
    toast.append_child(&text)?;

    let close: HtmlElement = document.create_element("button")?.dyn_into()?;
    close.set_class_name(CLASS_NOTIFICATION_CLOSE);
    close.set_text_content(Some("\u{d7}"));
    let close_style = close.style();
    for (property, value) in CLOSE_STYLE {
        close_style.set_property(property, value)?;
    }
    toast.append_child(&close)?;

    // Removal drops this closure, so the work runs after the handler returns.
    let h = Rc::clone(host);
    let on_close = Closure::wrap(Box::new(move |_: Event| {
        let h = Rc::clone(&h);
        wasm_bindgen_futures::spawn_local(async move {
            h.dispatch(None, |core| core.on_notification_close(id));
        });
    }) as Box<dyn FnMut(Event)>);
    close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;

    Ok(NotificationNode { element: toast.into(), _on_close: on_close })
}
