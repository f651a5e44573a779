//! Entity construction.
//!
//! Factories assemble the metadata side of a new entity; appearance is
//! derived later by the [`crate::render`] projection, so nothing visual is
//! resolved or stored here.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use uuid::Uuid;

use crate::camera::Point;
use crate::doc::{Entity, EntityKind, SeatMeta, ShapeKind, STATUS_ACTIVE};

/// Build a seat entity. `seat_name` defaults to row label + column number
/// when not given. `generated` marks seats produced by a layout pass so
/// regeneration can remove them without touching manual placements.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn make_seat(
    pos: Point,
    row: impl Into<String>,
    col: i64,
    seat_type: impl Into<String>,
    price: f64,
    floor: impl Into<String>,
    section: impl Into<String>,
    seat_name: Option<String>,
    generated: bool,
) -> Entity {
    let row = row.into();
    let seat_name = match seat_name {
        Some(name) if !name.is_empty() => name,
        _ => format!("{row}{col}"),
    };
    Entity {
        id: Uuid::new_v4(),
        kind: EntityKind::Seat(SeatMeta {
            row,
            col,
            seat_type: seat_type.into(),
            price,
            floor: floor.into(),
            section: section.into(),
            seat_name,
            status: STATUS_ACTIVE.to_string(),
        }),
        x: pos.x,
        y: pos.y,
        generated,
    }
}

/// Build a decorative shape entity. Shapes carry no metadata and never
/// appear in the export document.
#[must_use]
pub fn make_shape(kind: ShapeKind, pos: Point) -> Entity {
    Entity {
        id: Uuid::new_v4(),
        kind: EntityKind::Shape { shape: kind },
        x: pos.x,
        y: pos.y,
        generated: false,
    }
}

/// Build a free-text entity.
#[must_use]
pub fn make_text(content: impl Into<String>, pos: Point) -> Entity {
    Entity {
        id: Uuid::new_v4(),
        kind: EntityKind::Text { content: content.into() },
        x: pos.x,
        y: pos.y,
        generated: false,
    }
}

/// Build a generated section heading.
#[must_use]
pub fn make_section_label(text: impl Into<String>, pos: Point) -> Entity {
    Entity {
        id: Uuid::new_v4(),
        kind: EntityKind::Label { text: text.into() },
        x: pos.x,
        y: pos.y,
        generated: true,
    }
}
