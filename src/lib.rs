//! Core engine for an interactive venue seating-chart editor.
//!
//! This crate owns everything that is not pixels: the entity store, the
//! grid layout generator, the seat-type registry, the selection/sidebar
//! sync, and the floor → section → row → seat export transform. The host
//! (a browser canvas, a native scene graph, a test harness) wires its UI
//! events to [`engine::Command`]s and processes the [`engine::Action`]s
//! that come back — redraws, sidebar refreshes, export payloads.
//!
//! Seat metadata is the single source of truth; visual appearance is a
//! pure projection computed by [`render`] on demand, never stored.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level controller and command dispatch |
//! | [`doc`] | In-memory entity store and seat metadata types |
//! | [`layout`] | Deterministic grid layout generator |
//! | [`registry`] | Seat-type name → color registry |
//! | [`section`] | Section definitions and safe input parsing |
//! | [`factory`] | Entity construction |
//! | [`render`] | Metadata → visual projection |
//! | [`inspector`] | Sidebar state machine for the selection |
//! | [`export`] | Nested export document transform |
//! | [`camera`] | Zoom state and clamping |
//! | [`debounce`] | Trailing-edge edit coalescing |
//! | [`input`] | Input event types (keys, wheel, modifiers) |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod consts;
pub mod debounce;
pub mod doc;
pub mod engine;
pub mod export;
pub mod factory;
pub mod input;
pub mod inspector;
pub mod layout;
pub mod registry;
pub mod render;
pub mod section;
