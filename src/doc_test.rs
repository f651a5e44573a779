#![allow(clippy::float_cmp)]

use super::*;

use crate::camera::Point;
use crate::factory;

fn seat(name: &str, generated: bool) -> Entity {
    factory::make_seat(
        Point::new(0.0, 0.0),
        "A",
        1,
        "Standard",
        0.0,
        "",
        "",
        Some(name.to_string()),
        generated,
    )
}

fn shape() -> Entity {
    factory::make_shape(ShapeKind::Rectangle, Point::new(5.0, 5.0))
}

// --- add / get / remove ---

#[test]
fn new_store_is_empty() {
    let store = CanvasStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn add_then_get() {
    let mut store = CanvasStore::new();
    let e = seat("A1", false);
    let id = e.id;
    store.add(e);
    assert_eq!(store.len(), 1);
    assert!(store.get(&id).is_some());
}

#[test]
fn remove_returns_entity() {
    let mut store = CanvasStore::new();
    let e = seat("A1", false);
    let id = e.id;
    store.add(e);
    let removed = store.remove(&id);
    assert!(removed.is_some());
    assert!(store.is_empty());
}

#[test]
fn remove_missing_is_none() {
    let mut store = CanvasStore::new();
    assert!(store.remove(&uuid::Uuid::new_v4()).is_none());
}

#[test]
fn add_same_id_overwrites_in_place() {
    let mut store = CanvasStore::new();
    let first = seat("A1", false);
    let id = first.id;
    store.add(first);
    store.add(shape());
    let mut replacement = seat("Z9", false);
    replacement.id = id;
    store.add(replacement);
    assert_eq!(store.len(), 2);
    // Still in its original slot, not moved to the end.
    let first_entity = store.entities().next().unwrap();
    assert_eq!(first_entity.id, id);
    assert_eq!(first_entity.seat().unwrap().seat_name, "Z9");
}

// --- Insertion order ---

#[test]
fn entities_iterate_in_insertion_order() {
    let mut store = CanvasStore::new();
    let names = ["A1", "A2", "A3"];
    for n in names {
        store.add(seat(n, false));
    }
    let seen: Vec<String> = store
        .entities()
        .filter_map(Entity::seat)
        .map(|m| m.seat_name.clone())
        .collect();
    assert_eq!(seen, vec!["A1", "A2", "A3"]);
}

#[test]
fn removal_preserves_relative_order() {
    let mut store = CanvasStore::new();
    let a = seat("A1", false);
    let b = seat("A2", false);
    let c = seat("A3", false);
    let b_id = b.id;
    store.add(a);
    store.add(b);
    store.add(c);
    store.remove(&b_id);
    let seen: Vec<String> = store
        .entities()
        .filter_map(Entity::seat)
        .map(|m| m.seat_name.clone())
        .collect();
    assert_eq!(seen, vec!["A1", "A3"]);
}

// --- seat accessors ---

#[test]
fn seat_accessor_on_seat() {
    let e = seat("A1", false);
    assert_eq!(e.seat().unwrap().seat_name, "A1");
}

#[test]
fn seat_accessor_on_shape_is_none() {
    assert!(shape().seat().is_none());
}

#[test]
fn text_and_label_have_no_seat_meta() {
    let text = factory::make_text("exit", Point::new(0.0, 0.0));
    let label = factory::make_section_label("Main", Point::new(0.0, 0.0));
    assert!(text.seat().is_none());
    assert!(label.seat().is_none());
}

// --- apply_partial ---

#[test]
fn apply_partial_updates_present_fields() {
    let mut store = CanvasStore::new();
    let e = seat("A1", false);
    let id = e.id;
    store.add(e);
    let ok = store.apply_partial(
        &id,
        &PartialSeatMeta {
            seat_type: Some("VIP".to_string()),
            price: Some(99.0),
            ..Default::default()
        },
    );
    assert!(ok);
    let meta = store.get(&id).unwrap().seat().unwrap();
    assert_eq!(meta.seat_type, "VIP");
    assert_eq!(meta.price, 99.0);
    // Untouched fields survive.
    assert_eq!(meta.seat_name, "A1");
    assert_eq!(meta.status, STATUS_ACTIVE);
}

#[test]
fn apply_partial_on_shape_is_false() {
    let mut store = CanvasStore::new();
    let s = shape();
    let id = s.id;
    store.add(s);
    assert!(!store.apply_partial(&id, &PartialSeatMeta::default()));
}

#[test]
fn apply_partial_missing_entity_is_false() {
    let mut store = CanvasStore::new();
    assert!(!store.apply_partial(&uuid::Uuid::new_v4(), &PartialSeatMeta::default()));
}

#[test]
fn empty_partial_changes_nothing() {
    let mut store = CanvasStore::new();
    let e = seat("A1", false);
    let id = e.id;
    let before = e.seat().unwrap().clone();
    store.add(e);
    store.apply_partial(&id, &PartialSeatMeta::default());
    assert_eq!(store.get(&id).unwrap().seat().unwrap(), &before);
}

// --- clear_generated ---

#[test]
fn clear_generated_removes_marked_only() {
    let mut store = CanvasStore::new();
    store.add(seat("gen1", true));
    store.add(seat("manual", false));
    store.add(factory::make_section_label("Main", Point::new(0.0, 0.0)));
    store.add(shape());
    store.clear_generated();
    assert_eq!(store.len(), 2);
    let names: Vec<String> = store
        .entities()
        .filter_map(Entity::seat)
        .map(|m| m.seat_name.clone())
        .collect();
    assert_eq!(names, vec!["manual"]);
}

#[test]
fn clear_generated_keeps_survivor_order() {
    let mut store = CanvasStore::new();
    store.add(seat("m1", false));
    store.add(seat("g1", true));
    store.add(seat("m2", false));
    store.add(seat("g2", true));
    store.add(seat("m3", false));
    store.clear_generated();
    let names: Vec<String> = store
        .entities()
        .filter_map(Entity::seat)
        .map(|m| m.seat_name.clone())
        .collect();
    assert_eq!(names, vec!["m1", "m2", "m3"]);
}

#[test]
fn clear_generated_on_empty_store_is_noop() {
    let mut store = CanvasStore::new();
    store.clear_generated();
    assert!(store.is_empty());
}
