//! ModalController - one shared overlay for every trigger on the page
//!
//! Listeners:
//! - document click, delegated to the nearest `[data-modal]` ancestor
//! - close control click
//! - overlay click, only when the overlay itself is the target
//! - document keydown, Escape while open
//!
//! Two deferrals: focus moves to the close control shortly after open, and
//! the content slot is emptied after the close transition. An open that
//! happens in between invalidates the pending clear.

mod overlay;
mod state;
mod trigger;

pub use overlay::Overlay;
pub use state::{ModalState, OpenTransition};
pub use trigger::TriggerMatcher;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::config::{ModalConfig, MODAL_ATTR};
use crate::dom::{self, EventListener};
use crate::error::{Error, Result};

struct Inner {
    document: Document,
    body: HtmlElement,
    overlay: Overlay,
    config: ModalConfig,
    state: RefCell<ModalState>,
    /// Bumped on every open; deferred work captured against an older value is stale
    epoch: Cell<u64>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Inner {
    fn try_open(self: &Rc<Self>, content_id: &str) -> Result<()> {
        let template = self
            .document
            .get_element_by_id(content_id)
            .ok_or_else(|| Error::TemplateNotFound(content_id.to_string()))?;

        self.overlay.content.set_inner_html(&template.inner_html());
        let transition = self.state.borrow_mut().open(content_id);
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);

        self.overlay.show(&self.config, true);
        self.body.style().set_property("overflow", "hidden")?;
        debug!(?transition, content_id, "modal open");

        let weak: Weak<Self> = Rc::downgrade(self);
        Timeout::new(self.config.focus_delay_ms, move || {
            let Some(inner) = weak.upgrade() else { return };
            if inner.epoch.get() == epoch && inner.state.borrow().is_open() {
                dom::focus(&inner.overlay.close_button);
            }
        })
        .forget();
        Ok(())
    }

    fn open(self: &Rc<Self>, content_id: &str) {
        if let Err(err) = self.try_open(content_id) {
            warn!("{err}");
        }
    }

    fn close(self: &Rc<Self>) {
        let was_open = self.state.borrow_mut().close();
        self.overlay.show(&self.config, false);
        if let Err(err) = self.body.style().remove_property("overflow") {
            warn!("restoring page scroll failed: {}", Error::from(err));
        }
        if was_open {
            debug!("modal closed");
        }

        let epoch = self.epoch.get();
        let weak: Weak<Self> = Rc::downgrade(self);
        Timeout::new(self.config.clear_delay_ms, move || {
            let Some(inner) = weak.upgrade() else { return };
            if inner.epoch.get() == epoch && !inner.state.borrow().is_open() {
                inner.overlay.content.set_inner_html("");
            }
        })
        .forget();
    }

    fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    fn attach_listeners(self: &Rc<Self>) -> Result<()> {
        let document_target: &EventTarget = self.document.as_ref();
        let overlay_target: EventTarget = self.overlay.root.clone().into();
        let mut listeners = Vec::with_capacity(4);

        let weak = Rc::downgrade(self);
        let matcher = TriggerMatcher::new(MODAL_ATTR);
        listeners.push(EventListener::new(document_target, "click", move |event: Event| {
            let Some(inner) = weak.upgrade() else { return };
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Some((_, content_id)) = matcher.resolve(&target) {
                event.prevent_default();
                inner.open(&content_id);
            }
        })?);

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(
            self.overlay.close_button.as_ref(),
            "click",
            move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.close();
                }
            },
        )?);

        let weak = Rc::downgrade(self);
        let background = overlay_target.clone();
        listeners.push(EventListener::new(&overlay_target, "click", move |event: Event| {
            let Some(inner) = weak.upgrade() else { return };
            if event.target().as_ref() == Some(&background) {
                inner.close();
            }
        })?);

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(document_target, "keydown", move |event: Event| {
            let Some(inner) = weak.upgrade() else { return };
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape && inner.is_open() {
                inner.close();
            }
        })?);

        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }
}

/// Cheap handle; clones drive the same overlay.
#[derive(Clone)]
pub struct ModalController {
    inner: Rc<Inner>,
}

impl ModalController {
    /// Attach to (or build) the overlay and register the four listeners.
    ///
    /// A freshly built overlay starts closed. An adopted one keeps its markers,
    /// so building a second controller never hides a modal another one opened.
    pub fn initialize(document: &Document, config: ModalConfig) -> Result<Self> {
        let overlay = Overlay::attach(document, &config)?;
        let inner = Rc::new(Inner {
            document: document.clone(),
            body: dom::body(document)?,
            overlay,
            config,
            state: RefCell::new(ModalState::Closed),
            epoch: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        });
        inner.attach_listeners()?;
        Ok(Self { inner })
    }

    /// Open with the markup of the template `content_id`.
    pub fn try_open(&self, content_id: &str) -> Result<()> {
        self.inner.try_open(content_id)
    }

    /// Like [`try_open`](Self::try_open), but a missing template only logs a warning.
    pub fn open(&self, content_id: &str) {
        self.inner.open(content_id);
    }

    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    pub fn content_id(&self) -> Option<String> {
        self.inner.state.borrow().content_id().map(str::to_string)
    }

    pub fn overlay(&self) -> &Overlay {
        &self.inner.overlay
    }
}
