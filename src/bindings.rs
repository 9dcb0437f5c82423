//! Page-script entry points
//!
//! Thin `#[wasm_bindgen]` exports over the installed [`AppContext`]. Before
//! `boot()` has run they log a warning and do nothing.

use std::rc::Rc;

use tracing::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::dom;

fn with_context(action: &str, f: impl FnOnce(&Rc<AppContext>)) {
    match AppContext::current() {
        Some(context) => f(&context),
        None => warn!("{action} called before boot"),
    }
}

/// Install the controllers once the document is ready.
#[wasm_bindgen]
pub fn boot() {
    let result = dom::document().and_then(|document| {
        dom::on_ready(&document, || {
            if let Err(err) = AppContext::install(SiteConfig::default()) {
                error!("boot failed: {err}");
            }
        })
    });
    if let Err(err) = result {
        error!("boot failed: {err}");
    }
}

#[wasm_bindgen(js_name = triggerAnimation)]
pub fn trigger_animation(element: &Element) {
    with_context("triggerAnimation", |ctx| {
        if let Some(animator) = &ctx.animator {
            animator.trigger(element);
        }
    });
}

#[wasm_bindgen(js_name = resetAnimation)]
pub fn reset_animation(element: &Element) {
    with_context("resetAnimation", |ctx| {
        if let Some(animator) = &ctx.animator {
            animator.reset(element);
        }
    });
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(content_id: &str) {
    with_context("openModal", |ctx| {
        if let Some(modal) = &ctx.modal {
            modal.open(content_id);
        }
    });
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    with_context("closeModal", |ctx| {
        if let Some(modal) = &ctx.modal {
            modal.close();
        }
    });
}

#[wasm_bindgen(js_name = landingKitStatus)]
pub fn landing_kit_status() -> String {
    AppContext::current()
        .map(|ctx| ctx.status())
        .unwrap_or_else(|| "not booted".to_string())
}
