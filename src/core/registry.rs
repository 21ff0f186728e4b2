//! Element registry seam
//!
//! The rendering substrate is addressed through these traits: an
//! id-addressed lookup returning a display element handle that supports
//! class toggling and text content. A missing element is a normal outcome
//! (the device is not present on the current layout), never an error.

use std::sync::Arc;

/// One addressable display element on the mimic.
pub trait VisualElement: Send + Sync {
    /// Toggle membership in a small fixed group of mutually exclusive
    /// style classes: every class in `group` is removed, then `active`
    /// is added.
    fn set_exclusive_class(&self, group: &[&str], active: &str);

    /// Add a single style class.
    fn add_class(&self, class: &str);

    /// Remove a single style class.
    fn remove_class(&self, class: &str);

    /// Replace the displayed text content.
    fn set_text(&self, text: &str);
}

/// Id-addressed lookup of display elements.
pub trait ElementRegistry: Send + Sync {
    /// Look up the element for an identifier, if the current layout has
    /// one.
    fn lookup(&self, id: &str) -> Option<Arc<dyn VisualElement>>;
}
