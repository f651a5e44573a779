//! Section definitions and safe parsing of user-entered numbers.
//!
//! A section is a rectangular grid of seats. Definitions are ephemeral:
//! they are rebuilt from form state on every layout pass and never
//! persisted on their own. All numeric form input flows through the
//! `parse_*` helpers, which coerce garbage to a default instead of
//! reporting an error.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use serde::{Deserialize, Serialize};

/// Definition of one rectangular seat section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDef {
    /// Display name, also the export grouping key.
    pub name: String,
    /// Number of seat rows.
    pub rows: u32,
    /// Number of seat columns.
    pub cols: u32,
    /// Column number of the first seat in each row.
    pub col_start: i64,
}

impl SectionDef {
    /// The defaults a freshly added section tab gets. `index` is 0-based.
    #[must_use]
    pub fn numbered(index: usize) -> Self {
        Self {
            name: format!("Section {}", index + 1),
            rows: 5,
            cols: 10,
            col_start: 1,
        }
    }
}

/// Grow or shrink the section list to `count` entries. New entries get
/// numbered defaults; surviving entries keep their edits.
pub fn resize_sections(sections: &mut Vec<SectionDef>, count: usize) {
    if count < sections.len() {
        sections.truncate(count);
        return;
    }
    let start = sections.len();
    for i in start..count {
        sections.push(SectionDef::numbered(i));
    }
}

/// Parse a count field. Garbage or zero coerces to 1.
#[must_use]
pub fn parse_count(raw: &str) -> usize {
    raw.trim().parse::<usize>().ok().filter(|&n| n > 0).unwrap_or(1)
}

/// Parse a row/column-count field. Garbage coerces to 0.
#[must_use]
pub fn parse_dim(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Parse a starting-column field. Garbage coerces to 1.
#[must_use]
pub fn parse_col_start(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(1)
}

/// Parse a price field. Garbage or negative input coerces to 0.
#[must_use]
pub fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0).unwrap_or(0.0)
}
