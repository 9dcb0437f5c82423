//! AppContext - the one place the page's controllers live
//!
//! Built once at page ready. Each component is constructed independently;
//! one failing to construct is logged and left out, and the bootstrapper's
//! presence check reports it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::error;
use web_sys::Document;

use crate::animator::VisibilityAnimator;
use crate::boot::{Bootstrapper, Presence};
use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::modal::ModalController;

thread_local! {
    static INSTALLED: RefCell<Option<Rc<AppContext>>> = const { RefCell::new(None) };
}

pub struct AppContext {
    pub config: SiteConfig,
    pub animator: Option<VisibilityAnimator>,
    pub modal: Option<ModalController>,
    pub boot: Option<Bootstrapper>,
}

impl AppContext {
    /// Construct every controller against `document`.
    pub fn build(document: &Document, config: SiteConfig) -> Self {
        let animator = VisibilityAnimator::initialize(document, config.animator.clone())
            .map_err(|err| error!("animation system failed to start: {err}"))
            .ok();
        let modal = ModalController::initialize(document, config.modal.clone())
            .map_err(|err| error!("modal system failed to start: {err}"))
            .ok();

        let presence = Presence {
            animator: animator.is_some(),
            modal: modal.is_some(),
        };
        let boot = Bootstrapper::initialize(document, &config.boot, &config.site_name, presence)
            .map_err(|err| error!("page bootstrap failed: {err}"))
            .ok();

        Self {
            config,
            animator,
            modal,
            boot,
        }
    }

    /// Build and install the page's context, once. Later calls return the
    /// context installed first and ignore `config`.
    pub fn install(config: SiteConfig) -> Result<Rc<Self>> {
        if let Some(existing) = Self::current() {
            return Ok(existing);
        }
        let document = dom::document()?;
        let context = Rc::new(Self::build(&document, config));
        INSTALLED.with(|slot| *slot.borrow_mut() = Some(context.clone()));
        Ok(context)
    }

    pub fn current() -> Option<Rc<Self>> {
        INSTALLED.with(|slot| slot.borrow().clone())
    }

    /// One-line summary for diagnostics
    pub fn status(&self) -> String {
        let animator = match &self.animator {
            Some(animator) => format!("watching {}", animator.watched_count()),
            None => "missing".to_string(),
        };
        let modal = match &self.modal {
            Some(modal) if modal.is_open() => {
                format!("open ({})", modal.content_id().unwrap_or_default())
            }
            Some(_) => "closed".to_string(),
            None => "missing".to_string(),
        };
        let boot = if self.boot.is_some() { "ready" } else { "failed" };
        format!(
            "{}: animator {animator}, modal {modal}, boot {boot}",
            self.config.site_name
        )
    }
}
