//! Manual smooth scroll for browsers without CSS `scroll-behavior`
//!
//! Eases `window.scrollTo` over animation frames. The frame closure owns a
//! handle to itself and drops it on the last frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::dom;
use crate::error::Result;

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Vertical scroll from `from` to `to` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let t = elapsed_ms / self.duration_ms;
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }
}

/// Whether the browser understands `scroll-behavior` on the root element
pub fn has_native_smooth_scroll(window: &Window) -> bool {
    window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .and_then(|root| {
            js_sys::Reflect::has(&root.style(), &JsValue::from_str("scrollBehavior")).ok()
        })
        .unwrap_or(false)
}

fn request_frame(window: &Window, frame: &Closure<dyn FnMut(f64)>) {
    if let Err(err) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
        tracing::warn!("requestAnimationFrame failed: {:?}", err);
    }
}

/// Animate the window so that `target`'s top edge lands at the viewport top.
pub fn smooth_scroll_to(target: &Element, duration_ms: f64) -> Result<()> {
    let window = dom::window()?;
    let from = window.scroll_y()?;
    let to = from + target.get_bounding_client_rect().top();
    let animation = ScrollAnimation { from, to, duration_ms };

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = frame.clone();
    let started: Cell<Option<f64>> = Cell::new(None);
    let frame_window = window.clone();

    *handle.borrow_mut() = Some(Closure::new(move |now: f64| {
        let start = started.get().unwrap_or(now);
        started.set(Some(start));
        let elapsed = now - start;

        let x = frame_window.scroll_x().unwrap_or(0.0);
        frame_window.scroll_to_with_x_and_y(x, animation.position_at(elapsed));
        if animation.is_finished(elapsed) {
            let _ = frame.borrow_mut().take();
            return;
        }
        if let Some(next) = frame.borrow().as_ref() {
            request_frame(&frame_window, next);
        }
    }));

    if let Some(first) = handle.borrow().as_ref() {
        request_frame(&window, first);
    }
    Ok(())
}
