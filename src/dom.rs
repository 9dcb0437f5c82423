//! DOM interop helpers
//!
//! # Event listener lifetime
//!
//! A `Closure` handed to `addEventListener` has to outlive the registration.
//! Rather than `closure.forget()`, [`EventListener`] keeps the closure next to
//! the target and unregisters it on drop, so a controller's listeners live
//! exactly as long as the controller does.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{Error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(Error::NoBody)
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately when parsing already finished, otherwise on the
/// one-shot `DOMContentLoaded` event.
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<()> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let callback = Closure::once_into_js(f);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event_name: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(callback));
        target.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_name,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Add or remove a class, logging instead of failing.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        tracing::warn!("class update `{class}` failed: {}", Error::from(err));
    }
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        tracing::warn!("setting `{name}` failed: {}", Error::from(err));
    }
}

/// Give an element `tabindex="-1"` so it can take programmatic focus.
pub fn make_focusable(element: &Element) {
    set_attr(element, "tabindex", "-1");
}

pub fn focus(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(err) = html.focus() {
            tracing::warn!("focus failed: {}", Error::from(err));
        }
    }
}

/// Collect the element nodes of a `NodeList`.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
