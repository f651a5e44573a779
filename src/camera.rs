#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP_BASE};

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for zooming the seating canvas.
///
/// `zoom` is a scale factor (1.0 = no zoom), clamped to
/// [`ZOOM_MIN`], [`ZOOM_MAX`] by every mutation.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Camera {
    /// Apply a wheel delta: zoom is multiplied by `0.999 ^ delta_y`,
    /// then clamped. Positive deltas (scroll down) zoom out.
    pub fn apply_wheel(&mut self, delta_y: f64) {
        self.zoom = (self.zoom * ZOOM_STEP_BASE.powf(delta_y)).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Set the zoom factor directly, clamped to the valid range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }
}
