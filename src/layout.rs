//! Grid layout generator.
//!
//! A pure, deterministic pass: given the ordered section definitions and a
//! floor label, it emits positioned descriptors for every seat and one
//! label per section. The engine turns descriptors into entities; this
//! module never touches the store, which is what makes full regeneration
//! on every edit safe.
//!
//! A horizontal cursor starts at [`START_X`] and advances past each
//! section's seat block plus a fixed gap. Within a section, seats are
//! emitted row-major.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{GAP_X, GAP_Y, LABEL_OFFSET_Y, SECTION_GAP, START_X, START_Y};
use crate::section::SectionDef;

/// A positioned seat produced by a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatDescriptor {
    pub x: f64,
    pub y: f64,
    /// Row label, `A`..`Z` then `AA`, `AB`, ...
    pub row: String,
    /// Column number, `col_start + column index`.
    pub col: i64,
    /// Owning section name.
    pub section: String,
    /// Default display name, row label + column number.
    pub seat_name: String,
}

/// A positioned section heading produced by a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDescriptor {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One section's output: its label followed by its seats. Keeping the
/// per-section grouping lets the engine insert entities in the same
/// order the chart reads — label, then that section's seats — which
/// positional export ids depend on.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlan {
    pub label: LabelDescriptor,
    pub seats: Vec<SeatDescriptor>,
}

/// Everything one layout pass produces, in section order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPlan {
    pub sections: Vec<SectionPlan>,
}

impl LayoutPlan {
    /// All section labels, in section order.
    pub fn labels(&self) -> impl Iterator<Item = &LabelDescriptor> {
        self.sections.iter().map(|s| &s.label)
    }

    /// All seats, section order then row-major within each section.
    pub fn seats(&self) -> impl Iterator<Item = &SeatDescriptor> {
        self.sections.iter().flat_map(|s| s.seats.iter())
    }

    /// Total number of seats across all sections.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.sections.iter().map(|s| s.seats.len()).sum()
    }
}

/// Spreadsheet-style row label for a 0-based row index: `A`..`Z`,
/// then `AA`, `AB`, ... (bijective base 26, so index 26 is `AA`).
#[must_use]
pub fn row_label(index: u32) -> String {
    let mut n = u64::from(index) + 1;
    let mut buf = Vec::new();
    while n > 0 {
        n -= 1;
        let rem = u8::try_from(n % 26).unwrap_or(0);
        buf.push(b'A' + rem);
        n /= 26;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

/// Run one layout pass over `sections`.
///
/// Deterministic and idempotent: identical inputs produce identical
/// descriptors. A section with zero rows or zero columns still gets its
/// label but contributes no seats.
#[must_use]
pub fn generate(sections: &[SectionDef]) -> LayoutPlan {
    let mut plan = LayoutPlan::default();
    let mut cursor = START_X;

    for sec in sections {
        let label = LabelDescriptor {
            x: cursor + f64::from(sec.cols) * GAP_X / 2.0,
            y: START_Y - LABEL_OFFSET_Y,
            text: sec.name.clone(),
        };

        let mut seats = Vec::new();
        for r in 0..sec.rows {
            let row = row_label(r);
            for c in 0..sec.cols {
                let col = sec.col_start + i64::from(c);
                seats.push(SeatDescriptor {
                    x: cursor + f64::from(c) * GAP_X,
                    y: START_Y + f64::from(r) * GAP_Y,
                    row: row.clone(),
                    col,
                    section: sec.name.clone(),
                    seat_name: format!("{row}{col}"),
                });
            }
        }

        plan.sections.push(SectionPlan { label, seats });
        cursor += f64::from(sec.cols) * GAP_X + SECTION_GAP;
    }

    plan
}
