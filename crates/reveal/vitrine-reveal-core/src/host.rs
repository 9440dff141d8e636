//! Element host abstraction.
//!
//! The engine never touches the DOM directly. Adapters implement
//! [`ElementHost`] over whatever owns the elements (the browser through
//! wasm-bindgen, a static layout in tests) and pass it into
//! `RevealRegistry::register` / `resize`.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::viewport::Rect;

/// Read-only access to element geometry and declared data attributes.
pub trait ElementHost {
    /// Bounding box in document coordinates; `None` when the element is absent.
    fn rect(&self, key: &str) -> Option<Rect>;

    /// Value of a declared `data-*` attribute (`attr` without the prefix).
    fn data(&self, key: &str, attr: &str) -> Option<String>;

    /// Keys of descendants matching `selector`, in document order.
    fn children(&self, _key: &str, _selector: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Static description of one element.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ElementLayout {
    pub rect: Rect,
    #[serde(default)]
    pub data: HashMap<String, String>,
    #[serde(default)]
    pub children: HashMap<String, Vec<String>>,
}

/// In-memory host keyed by element name. Used by native hosts and fixtures.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LayoutTable {
    #[serde(default)]
    pub elements: HashMap<String, ElementLayout>,
}

impl LayoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, rect: Rect) -> &mut ElementLayout {
        let entry = self.elements.entry(key.into()).or_default();
        entry.rect = rect;
        entry
    }

    pub fn set_rect(&mut self, key: &str, rect: Rect) -> bool {
        match self.elements.get_mut(key) {
            Some(el) => {
                el.rect = rect;
                true
            }
            None => false,
        }
    }

    pub fn set_data(&mut self, key: &str, attr: &str, value: impl Into<String>) {
        if let Some(el) = self.elements.get_mut(key) {
            el.data.insert(attr.to_string(), value.into());
        }
    }

    pub fn set_children(&mut self, key: &str, selector: &str, children: Vec<String>) {
        if let Some(el) = self.elements.get_mut(key) {
            el.children.insert(selector.to_string(), children);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<ElementLayout> {
        self.elements.remove(key)
    }
}

impl ElementHost for LayoutTable {
    fn rect(&self, key: &str) -> Option<Rect> {
        self.elements.get(key).map(|el| el.rect)
    }

    fn data(&self, key: &str, attr: &str) -> Option<String> {
        self.elements.get(key)?.data.get(attr).cloned()
    }

    fn children(&self, key: &str, selector: &str) -> Vec<String> {
        self.elements
            .get(key)
            .and_then(|el| el.children.get(selector))
            .cloned()
            .unwrap_or_default()
    }
}
