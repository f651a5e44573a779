//! Document model: placed entities, seat metadata, and the in-memory store.
//!
//! This module defines the data types that describe what is on the canvas
//! (`Entity`, `EntityKind`), the authoritative per-seat metadata record
//! (`SeatMeta`), a sparse-update type for incremental edits
//! (`PartialSeatMeta`), and the runtime store that owns all live entities
//! (`CanvasStore`).
//!
//! Seat metadata is the single source of truth: visual appearance (fill,
//! label text) is never stored here, it is recomputed from metadata by the
//! [`crate::render`] projection. The export transform reads from
//! `CanvasStore` in insertion order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a placed entity.
pub type EntityId = Uuid;

/// The kind of a free-form decorative shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Circle.
    Circle,
    /// Ellipse.
    Ellipse,
    /// Regular polygon (pentagon by default).
    Polygon,
}

/// Default seat status. Status is a free-form string; anything else set
/// on a seat passes through to export untouched.
pub const STATUS_ACTIVE: &str = "active";

/// The authoritative metadata record for one seat.
///
/// Every field is user-editable through the sidebar; grouping keys
/// (`floor`, `section`, `row`) may be empty and fall back to sentinel
/// names at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatMeta {
    /// Row label (letters, e.g. `"A"` or `"AB"`).
    pub row: String,
    /// Column number within the row.
    pub col: i64,
    /// Seat type name, resolved against the seat-type registry.
    pub seat_type: String,
    /// Ticket price. Never negative; invalid input coerces to 0.
    pub price: f64,
    /// Floor grouping key for export.
    pub floor: String,
    /// Section grouping key for export.
    pub section: String,
    /// Display name, defaults to row label + column number.
    pub seat_name: String,
    /// Seat status, defaults to `"active"`.
    pub status: String,
}

/// Sparse update for seat metadata. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSeatMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// What a placed entity is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum EntityKind {
    /// A seat carrying structured metadata. The only kind that exports.
    Seat(SeatMeta),
    /// A decorative shape with no metadata.
    Shape { shape: ShapeKind },
    /// Free text with no metadata.
    Text { content: String },
    /// A generated section heading.
    Label { text: String },
}

/// A placed, selectable entity on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// What the entity is, including seat metadata when applicable.
    pub kind: EntityKind,
    /// World-space x of the entity center.
    pub x: f64,
    /// World-space y of the entity center.
    pub y: f64,
    /// Marker for entities produced by a layout pass. Regeneration removes
    /// only marked entities, preserving manually placed ones.
    pub generated: bool,
}

impl Entity {
    /// Seat metadata, if this entity is a seat.
    #[must_use]
    pub fn seat(&self) -> Option<&SeatMeta> {
        match &self.kind {
            EntityKind::Seat(meta) => Some(meta),
            _ => None,
        }
    }

    /// Mutable seat metadata, if this entity is a seat.
    pub fn seat_mut(&mut self) -> Option<&mut SeatMeta> {
        match &mut self.kind {
            EntityKind::Seat(meta) => Some(meta),
            _ => None,
        }
    }
}

/// In-memory store of placed entities, preserving insertion order.
///
/// Insertion order matters: export ids are positional, and grouping
/// preserves encounter order. Lookups go through a side index.
pub struct CanvasStore {
    order: Vec<EntityId>,
    entities: HashMap<EntityId, Entity>,
}

impl CanvasStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { order: Vec::new(), entities: HashMap::new() }
    }

    /// Insert an entity at the end of the insertion order. If an entity
    /// with the same `id` already exists it is overwritten in place,
    /// keeping its original slot.
    pub fn add(&mut self, entity: Entity) {
        let id = entity.id;
        if self.entities.insert(id, entity).is_none() {
            self.order.push(id);
        }
    }

    /// Remove an entity by id, returning it if it was present.
    pub fn remove(&mut self, id: &EntityId) -> Option<Entity> {
        let removed = self.entities.remove(id);
        if removed.is_some() {
            self.order.retain(|e| e != id);
        }
        removed
    }

    /// Return a reference to an entity by id.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Return a mutable reference to an entity by id.
    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Iterate all entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Apply a sparse metadata update to a seat entity. Returns false if
    /// the entity doesn't exist or isn't a seat.
    pub fn apply_partial(&mut self, id: &EntityId, partial: &PartialSeatMeta) -> bool {
        let Some(meta) = self.entities.get_mut(id).and_then(Entity::seat_mut) else {
            return false;
        };
        if let Some(ref t) = partial.seat_type {
            meta.seat_type.clone_from(t);
        }
        if let Some(p) = partial.price {
            meta.price = p;
        }
        if let Some(ref n) = partial.seat_name {
            meta.seat_name.clone_from(n);
        }
        if let Some(ref f) = partial.floor {
            meta.floor.clone_from(f);
        }
        if let Some(ref s) = partial.section {
            meta.section.clone_from(s);
        }
        if let Some(ref s) = partial.status {
            meta.status.clone_from(s);
        }
        true
    }

    /// Remove every entity produced by a layout pass (seats and section
    /// labels carrying the `generated` marker). Manually placed shapes,
    /// text, and seats are untouched. Runs in one pass over each
    /// collection; this is on the per-keystroke regeneration path.
    pub fn clear_generated(&mut self) {
        self.entities.retain(|_, e| !e.generated);
        self.order.retain(|id| self.entities.contains_key(id));
    }

    /// Number of entities currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the store contains no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for CanvasStore {
    fn default() -> Self {
        Self::new()
    }
}
