//! Export transform: the flat entity collection folded into a
//! floor → section → row → seat document.
//!
//! Read-only over the store and rebuilt from scratch on every call, so it
//! always reflects the live canvas. Entities without seat metadata
//! (shapes, text, section labels) are skipped but still advance the
//! positional id counter — a seat's exported id is its 1-based index in
//! the full entity list, matching how placements are numbered on the
//! canvas. Empty grouping keys fall back to sentinel names so every seat
//! lands in exactly one slot.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::doc::CanvasStore;

/// Sentinel floor name for seats with no floor set.
pub const UNASSIGNED_FLOOR: &str = "Unassigned Floor";

/// Sentinel section name for seats with no section set.
pub const UNASSIGNED_SECTION: &str = "Unassigned Section";

/// Sentinel row name for seats with no row label.
pub const UNASSIGNED_ROW: &str = "Unassigned Row";

/// Shape recorded per section. Seats don't carry one today, so every
/// section exports the default.
const DEFAULT_SECTION_SHAPE: &str = "Rectangle";

/// Failure serializing the export document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One exported seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    /// 1-based index of the seat in the full entity list.
    pub id: usize,
    #[serde(rename = "seatName")]
    pub seat_name: String,
    #[serde(rename = "type")]
    pub seat_type: String,
    pub price: f64,
    pub status: String,
    pub x: f64,
    pub y: f64,
}

/// One row of seats, in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowExport {
    pub row: String,
    pub seats: Vec<SeatRecord>,
}

/// One section within a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionExport {
    #[serde(rename = "sectionName")]
    pub section_name: String,
    pub shape: String,
    pub rows: Vec<RowExport>,
}

/// One floor of the venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorExport {
    /// 1-based floor id in encounter order.
    pub id: usize,
    pub name: String,
    pub sections: Vec<SectionExport>,
}

/// The full export document: an ordered list of floors.
pub type ExportDocument = Vec<FloorExport>;

fn key_or<'a>(key: &'a str, sentinel: &'a str) -> &'a str {
    if key.is_empty() { sentinel } else { key }
}

/// Fold the store into the nested export document.
///
/// Floors, sections, and rows appear in the order their first seat was
/// encountered; seats keep encounter order within each row. An empty
/// store produces an empty document.
#[must_use]
pub fn export_document(store: &CanvasStore) -> ExportDocument {
    let mut floors: ExportDocument = Vec::new();

    for (index, entity) in store.entities().enumerate() {
        let Some(meta) = entity.seat() else {
            continue;
        };

        let floor_name = key_or(&meta.floor, UNASSIGNED_FLOOR);
        let section_name = key_or(&meta.section, UNASSIGNED_SECTION);
        let row_name = key_or(&meta.row, UNASSIGNED_ROW);

        let fi = floors.iter().position(|f| f.name == floor_name).unwrap_or_else(|| {
            let id = floors.len() + 1;
            floors.push(FloorExport { id, name: floor_name.to_string(), sections: Vec::new() });
            floors.len() - 1
        });
        let floor = &mut floors[fi];

        let si = floor
            .sections
            .iter()
            .position(|s| s.section_name == section_name)
            .unwrap_or_else(|| {
                floor.sections.push(SectionExport {
                    section_name: section_name.to_string(),
                    shape: DEFAULT_SECTION_SHAPE.to_string(),
                    rows: Vec::new(),
                });
                floor.sections.len() - 1
            });
        let section = &mut floor.sections[si];

        let ri = section.rows.iter().position(|r| r.row == row_name).unwrap_or_else(|| {
            section.rows.push(RowExport { row: row_name.to_string(), seats: Vec::new() });
            section.rows.len() - 1
        });
        let row = &mut section.rows[ri];

        row.seats.push(SeatRecord {
            id: index + 1,
            seat_name: meta.seat_name.clone(),
            seat_type: meta.seat_type.clone(),
            price: meta.price,
            status: meta.status.clone(),
            x: entity.x,
            y: entity.y,
        });
    }

    floors
}

/// Serialize the document to human-readable JSON for the host sink.
pub fn to_json_pretty(doc: &ExportDocument) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(doc)?)
}
