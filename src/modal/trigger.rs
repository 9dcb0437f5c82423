use web_sys::Element;

/// Resolves a click target to the modal trigger it belongs to.
///
/// Walks from the target up through its ancestors, the target included, and
/// stops at the first element carrying the trigger attribute. Same answer as
/// `closest("[attr]")`.
#[derive(Debug, Clone)]
pub struct TriggerMatcher {
    attribute: &'static str,
}

impl TriggerMatcher {
    pub const fn new(attribute: &'static str) -> Self {
        Self { attribute }
    }

    /// The nearest trigger and its content id
    pub fn resolve(&self, target: &Element) -> Option<(Element, String)> {
        let mut current = Some(target.clone());
        while let Some(element) = current {
            if let Some(content_id) = element.get_attribute(self.attribute) {
                return Some((element, content_id));
            }
            current = element.parent_element();
        }
        None
    }
}
