//! Landing Kit - browser utilities for a marketing page
//!
//! - [`animator`] reveals `[data-animation]` elements as they scroll into view
//! - [`modal`] opens one shared overlay from `[data-modal]` triggers
//! - [`boot`] wires the skip link, heading focus, and the smooth-scroll fallback
//!
//! [`AppContext::install`] builds all three once; [`bindings`] exposes them to
//! page scripts.

pub mod animator;
pub mod bindings;
pub mod boot;
pub mod config;
pub mod context;
pub mod dom;
pub mod error;
pub mod modal;

pub use animator::VisibilityAnimator;
pub use boot::{Bootstrapper, Presence};
pub use config::{AnimatorConfig, BootConfig, ModalConfig, SiteConfig};
pub use context::AppContext;
pub use error::{Error, Result};
pub use modal::ModalController;
