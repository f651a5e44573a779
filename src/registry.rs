//! Seat-type registry: named types mapped to display colors.
//!
//! Insertion order is observable — it drives the type-selector rebuild in
//! the host UI — so the registry keeps a separate order list beside the
//! lookup map. Types can be added or recolored but never removed.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

/// Insertion-ordered mapping from seat-type name to display color.
#[derive(Debug, Clone)]
pub struct SeatTypeRegistry {
    order: Vec<String>,
    colors: HashMap<String, String>,
}

impl SeatTypeRegistry {
    /// Create an empty registry with no seeded types.
    #[must_use]
    pub fn empty() -> Self {
        Self { order: Vec::new(), colors: HashMap::new() }
    }

    /// Insert a type or overwrite an existing type's color. Overwriting
    /// keeps the type's original insertion slot.
    pub fn register(&mut self, name: impl Into<String>, color: impl Into<String>) {
        let name = name.into();
        if self.colors.insert(name.clone(), color.into()).is_none() {
            self.order.push(name);
        }
    }

    /// The display color for a type, if registered.
    #[must_use]
    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Type names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for SeatTypeRegistry {
    /// The stock types every new chart starts with.
    fn default() -> Self {
        let mut reg = Self::empty();
        reg.register("Standard", "#4caf50");
        reg.register("VIP", "#FFD700");
        reg.register("Hold", "#00BFFF");
        reg.register("Disabled", "#aaa");
        reg
    }
}
