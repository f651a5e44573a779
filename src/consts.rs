//! Shared numeric constants for the seating editor.

// ── Layout ──────────────────────────────────────────────────────

/// World-space x of the first seat in the first section.
pub const START_X: f64 = 50.0;

/// World-space y of the first seat row.
pub const START_Y: f64 = 50.0;

/// Horizontal spacing between adjacent seat centers.
pub const GAP_X: f64 = 40.0;

/// Vertical spacing between adjacent seat rows.
pub const GAP_Y: f64 = 40.0;

/// Horizontal gap between the last column of one section and the first of the next.
pub const SECTION_GAP: f64 = 60.0;

/// Vertical offset of a section label above the section's first seat row.
pub const LABEL_OFFSET_Y: f64 = 30.0;

// ── Seats ───────────────────────────────────────────────────────

/// Radius of the seat circle in world units.
pub const SEAT_RADIUS: f64 = 15.0;

/// Fill used when a seat's type is missing from the registry.
pub const UNKNOWN_TYPE_FILL: &str = "#cccccc";

/// Stroke color for seat circles.
pub const SEAT_STROKE: &str = "#333";

// ── Zoom ────────────────────────────────────────────────────────

/// Minimum zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Maximum zoom factor.
pub const ZOOM_MAX: f64 = 3.0;

/// Per-pixel wheel zoom base: zoom is multiplied by `ZOOM_STEP_BASE ^ delta_y`.
pub const ZOOM_STEP_BASE: f64 = 0.999;

// ── Timing ──────────────────────────────────────────────────────

/// Debounce window for section-field edits, in milliseconds.
pub const DEBOUNCE_MS: u64 = 300;
