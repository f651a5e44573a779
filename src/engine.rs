//! Application controller and command dispatch.
//!
//! `Engine` owns all editor state explicitly — the entity store, the
//! seat-type registry, the section list, the floor label, the camera, the
//! selection, and the debounce clock. Hosts never mutate that state
//! directly: every UI action maps to one [`Command`], and `dispatch`
//! returns the [`Action`]s the host must process (redraw, repopulate the
//! sidebar, rebuild the type selector, deliver an export). This keeps the
//! core independent of any particular UI toolkit.
//!
//! The model is single-threaded and event-driven; the only temporal
//! behavior is the debounced layout pass, driven by the host calling
//! [`Engine::tick`] with its clock.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::time::Instant;

use tracing::{debug, error, info};

use crate::camera::{Camera, Point};
use crate::debounce::Debouncer;
use crate::doc::{CanvasStore, EntityId, PartialSeatMeta, ShapeKind};
use crate::export::{self, ExportError};
use crate::factory;
use crate::input::{Key, Modifiers, SelectionEvent, WheelDelta};
use crate::inspector::{self, FieldEdit, SidebarState};
use crate::layout;
use crate::registry::SeatTypeRegistry;
use crate::section::{self, SectionDef};

/// Where a manually drawn single seat lands.
const SINGLE_SEAT_POS: Point = Point { x: 100.0, y: 100.0 };

/// Which section form field was edited, carrying the raw input text.
#[derive(Debug, Clone)]
pub enum SectionField {
    Name(String),
    Rows(String),
    Cols(String),
    ColStart(String),
}

/// A UI action routed into the core. One entry per button, field, and
/// input event the editor exposes.
#[derive(Debug, Clone)]
pub enum Command {
    /// The section-count field changed; resizes the section list.
    SetSectionCount { raw: String },
    /// A field inside one section tab changed.
    EditSection { index: usize, field: SectionField },
    /// The floor-name field changed.
    SetFloor { name: String },
    /// Draw-all-seats button: immediate full layout pass.
    DrawAllSeats,
    /// Draw-single-seat button, carrying the sidebar form values raw.
    DrawSingleSeat {
        row: String,
        col: String,
        seat_type: String,
        price: String,
        seat_name: String,
        section: String,
    },
    /// Add-seat-type button.
    AddSeatType { name: String, color: String },
    /// One of the add-shape buttons.
    AddShape { kind: ShapeKind, pos: Point },
    /// Add-text button.
    AddText { content: String, pos: Point },
    /// Delete button.
    DeleteSelection,
    /// Keyboard input; Delete/Backspace alias the delete button.
    KeyDown(Key),
    /// Pointer wheel; zooms only with Ctrl held.
    Wheel { delta: WheelDelta, modifiers: Modifiers },
    /// The host's selection changed.
    Selection(SelectionEvent),
    /// A sidebar seat field was edited while seats are selected.
    Edit(FieldEdit),
    /// Export button.
    Export,
}

/// What the host must do after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Entity or camera state changed; redraw the canvas.
    RenderNeeded,
    /// The sidebar form must be repopulated (or blanked).
    SidebarChanged(SidebarState),
    /// The seat-type selector must be rebuilt with these names.
    TypesChanged(Vec<String>),
    /// An export completed; deliver the document to the user's sink.
    Exported(String),
}

/// The seating editor core.
pub struct Engine {
    store: CanvasStore,
    registry: SeatTypeRegistry,
    sections: Vec<SectionDef>,
    floor: String,
    camera: Camera,
    debouncer: Debouncer,
    selection: Vec<EntityId>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            store: CanvasStore::new(),
            registry: SeatTypeRegistry::default(),
            sections: vec![SectionDef::numbered(0)],
            floor: String::new(),
            camera: Camera::default(),
            debouncer: Debouncer::default(),
            selection: Vec::new(),
        }
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Dispatch ---

    /// Route one UI command into the core. `now` is the host clock,
    /// consulted only by the debounce logic.
    pub fn dispatch(&mut self, cmd: Command, now: Instant) -> Vec<Action> {
        match cmd {
            Command::SetSectionCount { raw } => {
                let count = section::parse_count(&raw);
                section::resize_sections(&mut self.sections, count);
                self.debouncer.touch(now);
                Vec::new()
            }
            Command::EditSection { index, field } => {
                self.edit_section(index, &field);
                self.debouncer.touch(now);
                Vec::new()
            }
            Command::SetFloor { name } => {
                self.floor = name;
                Vec::new()
            }
            Command::DrawAllSeats => {
                self.debouncer.cancel();
                self.regenerate();
                vec![Action::RenderNeeded]
            }
            Command::DrawSingleSeat { row, col, seat_type, price, seat_name, section: sec } => {
                let col = section::parse_col_start(&col);
                let price = section::parse_price(&price);
                let name = if seat_name.is_empty() { None } else { Some(seat_name) };
                let seat = factory::make_seat(
                    SINGLE_SEAT_POS,
                    row,
                    col,
                    seat_type,
                    price,
                    self.floor.clone(),
                    sec,
                    name,
                    false,
                );
                self.store.add(seat);
                vec![Action::RenderNeeded]
            }
            Command::AddSeatType { name, color } => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Vec::new();
                }
                self.registry.register(name, color);
                vec![Action::TypesChanged(self.type_names())]
            }
            Command::AddShape { kind, pos } => {
                self.store.add(factory::make_shape(kind, pos));
                vec![Action::RenderNeeded]
            }
            Command::AddText { content, pos } => {
                self.store.add(factory::make_text(content, pos));
                vec![Action::RenderNeeded]
            }
            Command::DeleteSelection => self.delete_selection(),
            Command::KeyDown(key) => {
                if key.is_delete() {
                    self.delete_selection()
                } else {
                    Vec::new()
                }
            }
            Command::Wheel { delta, modifiers } => {
                if modifiers.ctrl {
                    self.camera.apply_wheel(delta.dy);
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            Command::Selection(event) => {
                match event {
                    SelectionEvent::Set(ids) => self.selection = ids,
                    SelectionEvent::Cleared => self.selection.clear(),
                }
                vec![Action::SidebarChanged(self.sidebar())]
            }
            Command::Edit(edit) => self.apply_field_edit(&edit),
            Command::Export => self.export(),
        }
    }

    /// Advance the debounce clock. Fires at most one deferred layout
    /// pass; hosts call this from their frame or timer loop.
    pub fn tick(&mut self, now: Instant) -> Vec<Action> {
        if self.debouncer.fire(now) {
            self.regenerate();
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Queries ---

    /// The entity store, read-only. Hosts draw from this.
    #[must_use]
    pub fn store(&self) -> &CanvasStore {
        &self.store
    }

    /// The seat-type registry.
    #[must_use]
    pub fn registry(&self) -> &SeatTypeRegistry {
        &self.registry
    }

    /// The current section definitions.
    #[must_use]
    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The current selection, in host order.
    #[must_use]
    pub fn selection(&self) -> &[EntityId] {
        &self.selection
    }

    /// Sidebar state for the current selection.
    #[must_use]
    pub fn sidebar(&self) -> SidebarState {
        inspector::sidebar_for(&self.selection, &self.store)
    }

    /// Export the current chart as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, ExportError> {
        export::to_json_pretty(&export::export_document(&self.store))
    }

    // --- Internals ---

    fn type_names(&self) -> Vec<String> {
        self.registry.names().map(str::to_string).collect()
    }

    fn edit_section(&mut self, index: usize, field: &SectionField) {
        let Some(sec) = self.sections.get_mut(index) else {
            return;
        };
        match field {
            SectionField::Name(raw) => sec.name.clone_from(raw),
            SectionField::Rows(raw) => sec.rows = section::parse_dim(raw),
            SectionField::Cols(raw) => sec.cols = section::parse_dim(raw),
            SectionField::ColStart(raw) => sec.col_start = section::parse_col_start(raw),
        }
    }

    /// Full layout pass: drop every generated entity, then re-add from a
    /// fresh plan. Insertion goes section by section — label first, then
    /// that section's seats — because positional export ids reflect the
    /// full entity list. Manual seats, shapes, and text survive.
    fn regenerate(&mut self) {
        self.store.clear_generated();
        let plan = layout::generate(&self.sections);
        debug!(sections = plan.sections.len(), seats = plan.seat_count(), "layout regenerated");
        for sec in plan.sections {
            let label = sec.label;
            self.store
                .add(factory::make_section_label(label.text, Point::new(label.x, label.y)));
            for seat in sec.seats {
                self.store.add(factory::make_seat(
                    Point::new(seat.x, seat.y),
                    seat.row,
                    seat.col,
                    "Standard",
                    0.0,
                    self.floor.clone(),
                    seat.section,
                    Some(seat.seat_name),
                    true,
                ));
            }
        }
    }

    fn delete_selection(&mut self) -> Vec<Action> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        let ids = std::mem::take(&mut self.selection);
        for id in &ids {
            self.store.remove(id);
        }
        vec![Action::RenderNeeded, Action::SidebarChanged(SidebarState::Idle)]
    }

    /// Apply one sidebar field edit to every selected seat (bulk edit).
    /// Non-seat entities in the selection are skipped.
    fn apply_field_edit(&mut self, edit: &FieldEdit) -> Vec<Action> {
        let partial = match edit {
            FieldEdit::SeatType(t) => PartialSeatMeta { seat_type: Some(t.clone()), ..Default::default() },
            FieldEdit::Price(raw) => {
                PartialSeatMeta { price: Some(section::parse_price(raw)), ..Default::default() }
            }
            FieldEdit::SeatName(n) => PartialSeatMeta { seat_name: Some(n.clone()), ..Default::default() },
        };
        let mut touched = false;
        let ids: Vec<EntityId> = self.selection.clone();
        for id in &ids {
            touched |= self.store.apply_partial(id, &partial);
        }
        if touched {
            vec![Action::RenderNeeded, Action::SidebarChanged(self.sidebar())]
        } else {
            Vec::new()
        }
    }

    fn export(&self) -> Vec<Action> {
        match self.export_json() {
            Ok(json) => {
                info!(entities = self.store.len(), "chart exported");
                vec![Action::Exported(json)]
            }
            Err(e) => {
                error!(error = %e, "export failed");
                Vec::new()
            }
        }
    }
}
