use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use super::Host;

/// Recorded state of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub visible: bool,
    pub value: String,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub color: Option<String>,
}

/// In-memory host.
///
/// Clones share the same element table, so a test can keep one handle for
/// assertions while widgets write through theirs. Elements spring into
/// existence on first write; unknown ids read as hidden and empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    elements: Arc<RwLock<HashMap<String, ElementState>>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn update(&self, id: &str, f: impl FnOnce(&mut ElementState)) {
        if let Ok(mut guard) = self.elements.write() {
            f(guard.entry(id.to_string()).or_default());
        }
    }

    fn read<R>(&self, id: &str, f: impl FnOnce(&ElementState) -> R) -> Option<R> {
        self.elements
            .read()
            .ok()
            .and_then(|guard| guard.get(id).map(f))
    }

    /// Returns a copy of an element's state.
    pub fn element(&self, id: &str) -> ElementState {
        self.read(id, ElementState::clone).unwrap_or_default()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.read(id, |e| e.visible).unwrap_or(false)
    }

    pub fn value(&self, id: &str) -> String {
        self.read(id, |e| e.value.clone()).unwrap_or_default()
    }

    pub fn text(&self, id: &str) -> String {
        self.read(id, |e| e.text.clone()).unwrap_or_default()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.read(id, |e| e.classes.contains(class)).unwrap_or(false)
    }

    pub fn color(&self, id: &str) -> Option<String> {
        self.read(id, |e| e.color.clone()).flatten()
    }

    /// All known elements, sorted by id.
    pub fn snapshot(&self) -> Vec<(String, ElementState)> {
        let mut elements: Vec<_> = self
            .elements
            .read()
            .map(|guard| {
                guard
                    .iter()
                    .map(|(id, state)| (id.clone(), state.clone()))
                    .collect()
            })
            .unwrap_or_default();
        elements.sort_by(|a, b| a.0.cmp(&b.0));
        elements
    }
}

impl Host for MemoryHost {
    fn set_visible(&self, id: &str, visible: bool) {
        self.update(id, |e| e.visible = visible);
    }

    fn set_value(&self, id: &str, value: &str) {
        self.update(id, |e| e.value = value.to_string());
    }

    fn set_text(&self, id: &str, text: &str) {
        self.update(id, |e| e.text = text.to_string());
    }

    fn set_class(&self, id: &str, class: &str, enabled: bool) {
        self.update(id, |e| {
            if enabled {
                e.classes.insert(class.to_string());
            } else {
                e.classes.remove(class);
            }
        });
    }

    fn set_color(&self, id: &str, color: Option<&str>) {
        self.update(id, |e| e.color = color.map(str::to_string));
    }
}
