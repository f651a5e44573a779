//! Visual projection: metadata in, appearance out.
//!
//! The entity store holds no colors or label strings for seats; whenever
//! the host needs to draw, it asks this module. Keeping the projection
//! one-way means an edit to seat metadata can never leave a stale fill or
//! label behind.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{SEAT_RADIUS, SEAT_STROKE, UNKNOWN_TYPE_FILL};
use crate::doc::SeatMeta;
use crate::registry::SeatTypeRegistry;

/// Everything the host needs to draw one seat.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatVisual {
    /// Fill color resolved from the seat's type.
    pub fill: String,
    /// Circle stroke color.
    pub stroke: String,
    /// Circle radius in world units.
    pub radius: f64,
    /// Label drawn centered on the seat.
    pub label: String,
}

/// Project seat metadata to its visual appearance. A type missing from
/// the registry falls back to a neutral fill rather than failing.
#[must_use]
pub fn seat_visual(meta: &SeatMeta, registry: &SeatTypeRegistry) -> SeatVisual {
    SeatVisual {
        fill: registry
            .color_of(&meta.seat_type)
            .unwrap_or(UNKNOWN_TYPE_FILL)
            .to_string(),
        stroke: SEAT_STROKE.to_string(),
        radius: SEAT_RADIUS,
        label: meta.seat_name.clone(),
    }
}
