//! Bootstrapper - page-level setup that runs once on page ready
//!
//! - presence check of the animator and the modal (diagnostics only)
//! - skip link focuses the main landmark
//! - primary heading becomes programmatically focusable
//! - in-page anchors scroll smoothly when CSS can't

mod anchor;
mod scroll;

pub use anchor::{AnchorHref, IN_PAGE_LINK_SELECTOR};
pub use scroll::{ease_in_out_cubic, has_native_smooth_scroll, smooth_scroll_to, ScrollAnimation};

use tracing::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

use crate::config::BootConfig;
use crate::dom::{self, EventListener};
use crate::error::Result;

/// Which components made it through construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    pub animator: bool,
    pub modal: bool,
}

impl Presence {
    pub fn log(&self) {
        if self.modal {
            info!("\u{2713} Modal system loaded");
        } else {
            warn!("\u{26a0} Modal system not loaded");
        }
        if self.animator {
            info!("\u{2713} Animation system loaded");
        } else {
            warn!("\u{26a0} Animation system not loaded");
        }
    }
}

pub struct Bootstrapper {
    native_smooth_scroll: bool,
    _listeners: Vec<EventListener>,
}

impl Bootstrapper {
    pub fn initialize(
        document: &Document,
        config: &BootConfig,
        site_name: &str,
        presence: Presence,
    ) -> Result<Self> {
        info!("{site_name} - initializing");
        presence.log();

        let mut listeners = Vec::new();
        if let Some(listener) = setup_skip_link(document, config)? {
            listeners.push(listener);
        }
        if let Some(heading) = document.query_selector(&config.heading_selector)? {
            dom::make_focusable(&heading);
        }

        let native_smooth_scroll = has_native_smooth_scroll(&dom::window()?);
        listeners.push(setup_anchor_links(document, config, native_smooth_scroll)?);

        info!("{site_name} - ready");
        Ok(Self {
            native_smooth_scroll,
            _listeners: listeners,
        })
    }

    pub fn native_smooth_scroll(&self) -> bool {
        self.native_smooth_scroll
    }
}

fn setup_skip_link(document: &Document, config: &BootConfig) -> Result<Option<EventListener>> {
    let Some(skip_link) = document.query_selector(&config.skip_link_selector)? else {
        return Ok(None);
    };
    let document = document.clone();
    let main_selector = config.main_selector.clone();
    let target: &EventTarget = skip_link.as_ref();

    let listener = EventListener::new(target, "click", move |event: Event| {
        event.prevent_default();
        match document.query_selector(&main_selector) {
            Ok(Some(main)) => {
                dom::make_focusable(&main);
                dom::focus(&main);
            }
            Ok(None) => {}
            Err(err) => warn!("skip link target lookup failed: {:?}", err),
        }
    })?;
    Ok(Some(listener))
}

/// One delegated listener covers every in-page link, including links
/// inserted after load.
fn setup_anchor_links(
    document: &Document,
    config: &BootConfig,
    native_smooth_scroll: bool,
) -> Result<EventListener> {
    let lookup = document.clone();
    let duration_ms = config.scroll_duration_ms;
    let target: &EventTarget = document.as_ref();

    EventListener::new(target, "click", move |event: Event| {
        if event.default_prevented() {
            return;
        }
        let Some(link) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|t| t.closest(IN_PAGE_LINK_SELECTOR).ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else { return };

        match AnchorHref::classify(&href) {
            AnchorHref::Bare => event.prevent_default(),
            AnchorHref::Fragment(id) if !native_smooth_scroll => {
                if let Some(section) = lookup.get_element_by_id(id) {
                    event.prevent_default();
                    if let Err(err) = smooth_scroll_to(&section, duration_ms) {
                        warn!("smooth scroll to #{id} failed: {err}");
                    }
                }
            }
            AnchorHref::Fragment(_) | AnchorHref::Other => {}
        }
    })
}
