//! Site configuration - marker vocabulary, class names, and timings
//!
//! Attribute names are the contract with page markup and stay fixed.
//! Everything the stylesheet or the page layout may want to rename lives in
//! the per-controller config structs.

/// Element participates in scroll reveal
pub const ANIMATION_ATTR: &str = "data-animation";
/// Milliseconds to wait before reveal
pub const ANIMATION_DELAY_ATTR: &str = "data-animation-delay";
/// Element re-hides on exit and re-reveals on re-entry
pub const ANIMATION_REPEAT_ATTR: &str = "data-animation-repeat";
/// Element opens the modal; value names the template id
pub const MODAL_ATTR: &str = "data-modal";

/// Configuration for every controller, built once at page ready
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Used in the bootstrap log lines
    pub site_name: String,
    pub animator: AnimatorConfig,
    pub modal: ModalConfig,
    pub boot: BootConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Landing Kit".to_string(),
            animator: AnimatorConfig::default(),
            modal: ModalConfig::default(),
            boot: BootConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    /// Fraction of the element's area that must be visible
    pub threshold: f64,
    /// Trigger region ends this many pixels above the viewport bottom
    pub bottom_margin_px: f64,
    /// Class added on reveal
    pub revealed_class: String,
    /// Tick of the bounding-box fallback when IntersectionObserver is missing
    pub poll_interval_ms: u32,
}

impl AnimatorConfig {
    /// CSS margin string for `IntersectionObserverInit.rootMargin`
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            bottom_margin_px: 100.0,
            revealed_class: "animated".to_string(),
            poll_interval_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalConfig {
    pub overlay_class: String,
    pub container_class: String,
    pub close_class: String,
    pub content_class: String,
    /// Class on the overlay while open
    pub active_class: String,
    pub close_label: String,
    /// Wait before focusing the close control, lets the entry animation start
    pub focus_delay_ms: u32,
    /// Wait before emptying the content slot, matches the close transition
    pub clear_delay_ms: u32,
}

impl ModalConfig {
    pub fn overlay_selector(&self) -> String {
        format!(".{}", self.overlay_class)
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            overlay_class: "modal-overlay".to_string(),
            container_class: "modal-container".to_string(),
            close_class: "modal-close".to_string(),
            content_class: "modal-content".to_string(),
            active_class: "active".to_string(),
            close_label: "Close modal".to_string(),
            focus_delay_ms: 100,
            clear_delay_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootConfig {
    pub skip_link_selector: String,
    pub main_selector: String,
    pub heading_selector: String,
    /// Duration of the manual smooth scroll fallback
    pub scroll_duration_ms: f64,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            skip_link_selector: ".skip-link".to_string(),
            main_selector: "main".to_string(),
            heading_selector: "h1".to_string(),
            scroll_duration_ms: 450.0,
        }
    }
}
