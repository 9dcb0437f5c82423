//! Overlay node - built once, adopted when already on the page
//!
//! Structure:
//!   div.modal-overlay (role=dialog, aria-modal, aria-hidden)
//!     div.modal-container
//!       button.modal-close
//!       div.modal-content

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::ModalConfig;
use crate::dom;
use crate::error::{Error, Result};

pub struct Overlay {
    pub root: HtmlElement,
    pub close_button: HtmlElement,
    pub content: Element,
}

fn create_html(document: &Document, tag: &str, class: &str) -> Result<HtmlElement> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::Js(format!("<{tag}> is not an HTMLElement")))
}

fn create_close_button(document: &Document, config: &ModalConfig) -> Result<HtmlElement> {
    let button = create_html(document, "button", &config.close_class)?;
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", &config.close_label)?;
    button.set_text_content(Some("\u{00d7}"));
    Ok(button)
}

impl Overlay {
    /// Reuse the overlay already in the document, or build and append one.
    pub fn attach(document: &Document, config: &ModalConfig) -> Result<Self> {
        if let Some(existing) = document.query_selector(&config.overlay_selector())? {
            if let Ok(root) = existing.dyn_into::<HtmlElement>() {
                tracing::debug!("reusing existing modal overlay");
                return Self::adopt(document, root, config);
            }
        }
        Self::build(document, config)
    }

    fn build(document: &Document, config: &ModalConfig) -> Result<Self> {
        let root = create_html(document, "div", &config.overlay_class)?;
        root.set_attribute("role", "dialog")?;
        root.set_attribute("aria-modal", "true")?;
        root.set_attribute("aria-hidden", "true")?;

        let container = create_html(document, "div", &config.container_class)?;
        let close_button = create_close_button(document, config)?;
        let content = create_html(document, "div", &config.content_class)?;
        container.append_child(&close_button)?;
        container.append_child(&content)?;
        root.append_child(&container)?;

        dom::body(document)?.append_child(&root)?;
        Ok(Self {
            root,
            close_button,
            content: content.into(),
        })
    }

    /// Take over an existing overlay, adding whatever parts it lacks.
    fn adopt(document: &Document, root: HtmlElement, config: &ModalConfig) -> Result<Self> {
        let find = |class: &str| root.query_selector(&format!(".{class}"));

        let close_button = match find(&config.close_class)?
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            Some(button) => button,
            None => {
                let button = create_close_button(document, config)?;
                root.append_child(&button)?;
                button
            }
        };
        let content = match find(&config.content_class)? {
            Some(content) => content,
            None => {
                let content = create_html(document, "div", &config.content_class)?;
                root.append_child(&content)?;
                content.into()
            }
        };
        Ok(Self {
            root,
            close_button,
            content,
        })
    }

    /// Write the open/closed projection onto the overlay.
    pub fn show(&self, config: &ModalConfig, open: bool) {
        dom::set_class(&self.root, &config.active_class, open);
        dom::set_attr(&self.root, "aria-hidden", if open { "false" } else { "true" });
    }
}
