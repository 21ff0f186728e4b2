//! In-memory element registry
//!
//! A thread-safe stand-in for the real layout surface, used by the
//! headless binary and the test suite. Elements track their style class
//! set, text content, and how many mutations they have received, which is
//! what makes change suppression observable.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::config::DeviceMap;
use crate::core::{ElementRegistry, VisualElement};

/// One in-memory display element.
#[derive(Debug, Default)]
pub struct MemoryElement {
    classes: Mutex<BTreeSet<String>>,
    text: Mutex<String>,
    mutations: AtomicUsize,
}

impl MemoryElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .lock()
            .map(|classes| classes.contains(class))
            .unwrap_or(false)
    }

    /// Current class set, sorted.
    pub fn classes(&self) -> Vec<String> {
        self.classes
            .lock()
            .map(|classes| classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn text(&self) -> String {
        self.text.lock().map(|text| text.clone()).unwrap_or_default()
    }

    /// Number of mutations applied to this element so far.
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::Relaxed)
    }

    fn touch(&self) {
        self.mutations.fetch_add(1, Ordering::Relaxed);
    }
}

impl VisualElement for MemoryElement {
    fn set_exclusive_class(&self, group: &[&str], active: &str) {
        if let Ok(mut classes) = self.classes.lock() {
            for class in group {
                classes.remove(*class);
            }
            classes.insert(active.to_string());
        }
        self.touch();
    }

    fn add_class(&self, class: &str) {
        if let Ok(mut classes) = self.classes.lock() {
            classes.insert(class.to_string());
        }
        self.touch();
    }

    fn remove_class(&self, class: &str) {
        if let Ok(mut classes) = self.classes.lock() {
            classes.remove(class);
        }
        self.touch();
    }

    fn set_text(&self, text: &str) {
        if let Ok(mut current) = self.text.lock() {
            current.clear();
            current.push_str(text);
        }
        self.touch();
    }
}

/// Id-addressed store of in-memory elements.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    elements: RwLock<HashMap<String, Arc<MemoryElement>>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the element for an identifier and return it.
    pub fn insert(&self, id: &str) -> Arc<MemoryElement> {
        let element = Arc::new(MemoryElement::default());
        if let Ok(mut elements) = self.elements.write() {
            elements.insert(id.to_string(), element.clone());
        }
        element
    }

    /// Create one element per identifier a device map can address.
    pub fn seed(&self, map: &DeviceMap) {
        for id in map.element_ids() {
            self.insert(id);
        }
    }

    /// Concrete-handle lookup, for inspection.
    pub fn element(&self, id: &str) -> Option<Arc<MemoryElement>> {
        self.elements.read().ok()?.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.elements.read().map(|elements| elements.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ElementRegistry for MemoryRegistry {
    fn lookup(&self, id: &str) -> Option<Arc<dyn VisualElement>> {
        let element = self.element(id)?;
        Some(element)
    }
}
