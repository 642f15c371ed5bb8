//! The action template catalog.
//!
//! An ordered, append-only list of [`ActionTemplate`]s that populates the
//! palette. The catalog is shared with the surrounding chrome through a
//! cheaply clonable handle so new templates can be registered at any time;
//! registration never touches existing placements.

use crate::types::{ActionConfig, ActionKind, ActionTemplate};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// The built-in templates every session starts with.
static BUILTIN_TEMPLATES: Lazy<Vec<ActionTemplate>> = Lazy::new(|| {
    vec![
        ActionTemplate::new("click", "Click", ActionKind::Click),
        ActionTemplate::new("double-click", "Double Click", ActionKind::DoubleClick),
        ActionTemplate::new("key-press", "Key Press", ActionKind::KeyPress),
        ActionTemplate::new("delay", "Delay", ActionKind::Delay).with_defaults(ActionConfig {
            delay_ms: 1000,
            ..ActionConfig::default()
        }),
    ]
});

/// Ordered template collection. Order is registration order and is what the
/// palette displays.
#[derive(Debug, Default)]
pub struct TemplateCatalog {
    templates: Vec<ActionTemplate>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template at the end of the catalog.
    ///
    /// A duplicate id is rejected: replacing a template in place could
    /// silently re-skin placements that were created from it.
    pub fn register(&mut self, template: ActionTemplate) -> bool {
        if self.templates.iter().any(|t| t.id == template.id) {
            tracing::warn!(id = %template.id, "duplicate template id rejected");
            return false;
        }
        self.templates.push(template);
        true
    }

    pub fn get(&self, id: &str) -> Option<&ActionTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&ActionTemplate> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Shared handle to a catalog. Clones observe the same underlying list.
#[derive(Clone, Default)]
pub struct CatalogHandle {
    inner: Arc<RwLock<TemplateCatalog>>,
}

impl CatalogHandle {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog pre-seeded with the built-in templates.
    pub fn with_builtins() -> Self {
        let handle = Self::empty();
        for template in BUILTIN_TEMPLATES.iter() {
            handle.register(template.clone());
        }
        handle
    }

    pub fn register(&self, template: ActionTemplate) -> bool {
        self.inner.write().register(template)
    }

    pub fn get(&self, id: &str) -> Option<ActionTemplate> {
        self.inner.read().get(id).cloned()
    }

    pub fn get_at(&self, index: usize) -> Option<ActionTemplate> {
        self.inner.read().get_at(index).cloned()
    }

    /// Ordered copy of the current templates, for rendering the palette.
    pub fn snapshot(&self) -> Vec<ActionTemplate> {
        self.inner.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl std::fmt::Debug for CatalogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogHandle")
            .field("len", &self.len())
            .finish()
    }
}
