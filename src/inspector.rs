//! Sidebar state machine: what the seat property form shows.
//!
//! Two states. `Idle` when nothing seat-like is selected — the form is
//! blank. `Bound` when the selection contains at least one seat — the
//! form mirrors the first selected seat's metadata. Edits made while
//! `Bound` are applied by the engine to every selected seat, not just the
//! first.

#[cfg(test)]
#[path = "inspector_test.rs"]
mod inspector_test;

use crate::doc::{CanvasStore, EntityId, SeatMeta};

/// Field values for the sidebar seat form.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatFields {
    pub row: String,
    pub col: i64,
    pub seat_name: String,
    pub seat_type: String,
    pub price: f64,
    pub floor: String,
    pub section: String,
}

impl SeatFields {
    fn from_meta(meta: &SeatMeta) -> Self {
        Self {
            row: meta.row.clone(),
            col: meta.col,
            seat_name: meta.seat_name.clone(),
            seat_type: meta.seat_type.clone(),
            price: meta.price,
            floor: meta.floor.clone(),
            section: meta.section.clone(),
        }
    }
}

/// What the sidebar currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarState {
    /// No seat selected; the form is blank.
    Idle,
    /// At least one seat selected; the form mirrors the first one.
    Bound(SeatFields),
}

/// Compute the sidebar state for the current selection. The first
/// selected entity that is a seat wins; shapes and text never bind.
#[must_use]
pub fn sidebar_for(selection: &[EntityId], store: &CanvasStore) -> SidebarState {
    selection
        .iter()
        .filter_map(|id| store.get(id))
        .find_map(|e| e.seat())
        .map_or(SidebarState::Idle, |meta| {
            SidebarState::Bound(SeatFields::from_meta(meta))
        })
}

/// A single sidebar field edit, as raw text from the form.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    /// The type selector changed.
    SeatType(String),
    /// The price field changed; parsed safe, garbage coerces to 0.
    Price(String),
    /// The seat-name field changed.
    SeatName(String),
}
