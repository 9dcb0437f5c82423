//! Visibility watchers - deliver batches of enter/leave notifications
//!
//! [`IntersectionWatcher`] wraps the platform's IntersectionObserver.
//! [`PollingWatcher`] is the fallback for environments without it: it
//! recomputes bounding boxes on an interval and reports crossings of the
//! same [`VisibilityRule`]. The fallback only notices changes once per tick
//! and ignores ancestors' clipping, so it is close to the observer but not
//! identical.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::rule::{Rect, VisibilityRule};
use crate::config::AnimatorConfig;
use crate::dom;
use crate::error::Result;

/// One element crossing in or out of the trigger region
#[derive(Debug, Clone)]
pub struct VisibilityChange {
    pub element: Element,
    pub intersecting: bool,
}

pub type ChangeHandler = Box<dyn Fn(Vec<VisibilityChange>)>;

pub trait VisibilityWatcher {
    fn observe(&self, element: &Element);
    fn unobserve(&self, element: &Element);
}

pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl IntersectionWatcher {
    pub fn is_supported() -> bool {
        dom::window()
            .ok()
            .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
            .unwrap_or(false)
    }

    pub fn new(config: &AnimatorConfig, handler: ChangeHandler) -> Result<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let changes: Vec<VisibilityChange> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| VisibilityChange {
                    element: entry.target(),
                    intersecting: entry.is_intersecting(),
                })
                .collect();
            if !changes.is_empty() {
                handler(changes);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct Tracked {
    element: Element,
    /// Last reported state; `None` until the first tick reports it
    last: Option<bool>,
}

/// Viewport box of a rendered element; `None` when it has no layout box.
fn layout_box(element: &Element) -> Option<Rect> {
    if !element.is_connected() || element.get_client_rects().length() == 0 {
        return None;
    }
    let r = element.get_bounding_client_rect();
    Some(Rect::new(r.x(), r.y(), r.width(), r.height()))
}

pub struct PollingWatcher {
    tracked: Rc<RefCell<Vec<Tracked>>>,
    _interval: Interval,
}

impl PollingWatcher {
    pub fn new(config: &AnimatorConfig, handler: ChangeHandler) -> Self {
        let rule = VisibilityRule::from_config(config);
        let tracked: Rc<RefCell<Vec<Tracked>>> = Rc::new(RefCell::new(Vec::new()));
        let ticking = tracked.clone();

        let interval = Interval::new(config.poll_interval_ms, move || {
            let Ok(window) = dom::window() else { return };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);

            // Collect first so the handler may call back into observe/unobserve
            let changes: Vec<VisibilityChange> = ticking
                .borrow_mut()
                .iter_mut()
                .filter_map(|t| {
                    let layout = layout_box(&t.element);
                    let now = rule.layout_intersects(layout.as_ref(), width, height);
                    if t.last == Some(now) {
                        return None;
                    }
                    t.last = Some(now);
                    Some(VisibilityChange {
                        element: t.element.clone(),
                        intersecting: now,
                    })
                })
                .collect();

            if !changes.is_empty() {
                handler(changes);
            }
        });

        Self {
            tracked,
            _interval: interval,
        }
    }
}

impl VisibilityWatcher for PollingWatcher {
    fn observe(&self, element: &Element) {
        let mut tracked = self.tracked.borrow_mut();
        if tracked.iter().any(|t| t.element == *element) {
            return;
        }
        tracked.push(Tracked {
            element: element.clone(),
            last: None,
        });
    }

    fn unobserve(&self, element: &Element) {
        self.tracked.borrow_mut().retain(|t| t.element != *element);
    }
}
