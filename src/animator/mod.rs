//! VisibilityAnimator - scroll-triggered reveal of marked elements
//!
//! Flow:
//!   visibility watcher  -> handle_changes -> reveal (delayed) / hide
//!   mutation observer   -> watch added marked elements, forget removed ones
//!
//! Fire-once elements are retired after their first reveal. Repeatable
//! elements stay watched and cycle between revealed and hidden.

mod delay;
mod rule;
mod watch_set;
mod watcher;

pub use delay::{parse_delay, MAX_DELAY_MS};
pub use rule::{Rect, VisibilityRule};
pub use watch_set::WatchSet;
pub use watcher::{
    ChangeHandler, IntersectionWatcher, PollingWatcher, VisibilityChange, VisibilityWatcher,
};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit, MutationRecord, Node};

use crate::config::{AnimatorConfig, ANIMATION_ATTR, ANIMATION_DELAY_ATTR, ANIMATION_REPEAT_ATTR};
use crate::dom;
use crate::error::Result;

fn marker_selector() -> String {
    format!("[{ANIMATION_ATTR}]")
}

fn is_markable(element: &Element) -> bool {
    element.has_attribute(ANIMATION_ATTR)
}

fn is_repeatable(element: &Element) -> bool {
    element.has_attribute(ANIMATION_REPEAT_ATTR)
}

/// The element itself (if marked) followed by its marked descendants
fn marked_in_subtree(root: &Element) -> Vec<Element> {
    let mut found = Vec::new();
    if is_markable(root) {
        found.push(root.clone());
    }
    match root.query_selector_all(&marker_selector()) {
        Ok(list) => found.extend(dom::elements(&list)),
        Err(err) => warn!("scanning for marked elements failed: {:?}", err),
    }
    found
}

struct MutationWatch {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for MutationWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct Inner {
    config: AnimatorConfig,
    watched: RefCell<WatchSet<Element>>,
    watcher: RefCell<Option<Box<dyn VisibilityWatcher>>>,
    mutations: RefCell<Option<MutationWatch>>,
}

impl Inner {
    fn with_watcher(&self, f: impl FnOnce(&dyn VisibilityWatcher)) {
        if let Some(watcher) = self.watcher.borrow().as_deref() {
            f(watcher);
        }
    }

    fn watch(&self, element: &Element) {
        if !is_markable(element) {
            return;
        }
        if self.watched.borrow_mut().watch(element.clone()) {
            self.with_watcher(|w| w.observe(element));
        }
    }

    fn retire(&self, element: &Element) {
        if self.watched.borrow_mut().retire(element) {
            self.with_watcher(|w| w.unobserve(element));
        }
    }

    fn forget(&self, element: &Element) {
        if self.watched.borrow_mut().forget(element) {
            self.with_watcher(|w| w.unobserve(element));
        }
    }

    fn handle_changes(self: &Rc<Self>, changes: Vec<VisibilityChange>) {
        for change in changes {
            if change.intersecting {
                self.reveal(change.element);
            } else if is_repeatable(&change.element) {
                self.hide(&change.element);
            }
        }
    }

    fn reveal(self: &Rc<Self>, element: Element) {
        let delay = parse_delay(element.get_attribute(ANIMATION_DELAY_ATTR).as_deref());
        let captured = self.watched.borrow().generation(&element);
        let weak: Weak<Self> = Rc::downgrade(self);

        Timeout::new(delay, move || {
            let Some(inner) = weak.upgrade() else { return };
            if !inner.watched.borrow().is_current(&element, captured) {
                debug!("dropping stale reveal");
                return;
            }
            dom::set_class(&element, &inner.config.revealed_class, true);
            if !is_repeatable(&element) {
                inner.retire(&element);
            }
        })
        .forget();
    }

    fn hide(&self, element: &Element) {
        self.watched.borrow_mut().invalidate(element);
        dom::set_class(element, &self.config.revealed_class, false);
    }

    fn handle_mutations(&self, records: js_sys::Array) {
        for record in records.iter() {
            let Ok(record) = record.dyn_into::<MutationRecord>() else { continue };

            for removed in dom::elements(&record.removed_nodes()) {
                // A move shows up as remove + add; only drop what actually left the page
                if !removed.is_connected() {
                    for element in marked_in_subtree(&removed) {
                        self.forget(&element);
                    }
                }
            }

            for added in dom::elements(&record.added_nodes()) {
                for element in marked_in_subtree(&added) {
                    self.watch(&element);
                }
            }
        }
    }
}

/// Cheap handle; clones share the same watcher and watch set.
#[derive(Clone)]
pub struct VisibilityAnimator {
    inner: Rc<Inner>,
}

impl VisibilityAnimator {
    /// Register the visibility handler, watch every marked element already in
    /// the document, then start following DOM insertions under the body.
    pub fn initialize(document: &Document, config: AnimatorConfig) -> Result<Self> {
        let inner = Rc::new(Inner {
            config,
            watched: RefCell::new(WatchSet::new()),
            watcher: RefCell::new(None),
            mutations: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let handler: ChangeHandler = Box::new(move |changes| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_changes(changes);
            }
        });
        let watcher: Box<dyn VisibilityWatcher> = if IntersectionWatcher::is_supported() {
            Box::new(IntersectionWatcher::new(&inner.config, handler)?)
        } else {
            warn!("IntersectionObserver unavailable, polling element bounds instead");
            Box::new(PollingWatcher::new(&inner.config, handler))
        };
        *inner.watcher.borrow_mut() = Some(watcher);

        let initial = document.query_selector_all(&marker_selector())?;
        for element in dom::elements(&initial) {
            inner.watch(&element);
        }

        let weak = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |records: js_sys::Array| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_mutations(records);
            }
        });
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        let body: Node = dom::body(document)?.into();
        observer.observe_with_options(&body, &options)?;
        *inner.mutations.borrow_mut() = Some(MutationWatch {
            observer,
            _callback: callback,
        });

        debug!("animator watching {} elements", inner.watched.borrow().watching());
        Ok(Self { inner })
    }

    /// Reveal a marked element now, through the normal delayed path.
    pub fn trigger(&self, element: &Element) {
        if is_markable(element) {
            self.inner.reveal(element.clone());
        }
    }

    /// Clear the revealed marker, repeatable or not. Pending reveals for the
    /// element are invalidated.
    pub fn reset(&self, element: &Element) {
        self.inner.hide(element);
    }

    pub fn is_watching(&self, element: &Element) -> bool {
        self.inner.watched.borrow().is_watching(element)
    }

    pub fn watched_count(&self) -> usize {
        self.inner.watched.borrow().watching()
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.inner.config
    }
}
