#![allow(clippy::float_cmp)]

use super::*;

use crate::camera::Point;
use crate::doc::ShapeKind;
use crate::factory;

fn store_with_seats(names: &[&str]) -> (CanvasStore, Vec<EntityId>) {
    let mut store = CanvasStore::new();
    let mut ids = Vec::new();
    for n in names {
        let e = factory::make_seat(
            Point::new(0.0, 0.0),
            "A",
            1,
            "Standard",
            25.0,
            "Main",
            "Orchestra",
            Some((*n).to_string()),
            false,
        );
        ids.push(e.id);
        store.add(e);
    }
    (store, ids)
}

// --- Idle ---

#[test]
fn empty_selection_is_idle() {
    let (store, _) = store_with_seats(&["A1"]);
    assert_eq!(sidebar_for(&[], &store), SidebarState::Idle);
}

#[test]
fn shape_only_selection_is_idle() {
    let mut store = CanvasStore::new();
    let shape = factory::make_shape(ShapeKind::Circle, Point::new(0.0, 0.0));
    let id = shape.id;
    store.add(shape);
    assert_eq!(sidebar_for(&[id], &store), SidebarState::Idle);
}

#[test]
fn stale_selection_is_idle() {
    let (store, _) = store_with_seats(&["A1"]);
    assert_eq!(sidebar_for(&[uuid::Uuid::new_v4()], &store), SidebarState::Idle);
}

// --- Bound ---

#[test]
fn single_seat_binds_its_fields() {
    let (store, ids) = store_with_seats(&["A1"]);
    let SidebarState::Bound(fields) = sidebar_for(&ids, &store) else {
        panic!("expected Bound");
    };
    assert_eq!(fields.seat_name, "A1");
    assert_eq!(fields.row, "A");
    assert_eq!(fields.col, 1);
    assert_eq!(fields.seat_type, "Standard");
    assert_eq!(fields.price, 25.0);
    assert_eq!(fields.floor, "Main");
    assert_eq!(fields.section, "Orchestra");
}

#[test]
fn multi_selection_binds_first_seat() {
    let (store, ids) = store_with_seats(&["A1", "A2", "A3"]);
    let SidebarState::Bound(fields) = sidebar_for(&ids, &store) else {
        panic!("expected Bound");
    };
    assert_eq!(fields.seat_name, "A1");
}

#[test]
fn leading_shape_is_skipped_for_binding() {
    let (mut store, mut ids) = store_with_seats(&["A7"]);
    let shape = factory::make_shape(ShapeKind::Rectangle, Point::new(0.0, 0.0));
    ids.insert(0, shape.id);
    store.add(shape);
    let SidebarState::Bound(fields) = sidebar_for(&ids, &store) else {
        panic!("expected Bound");
    };
    assert_eq!(fields.seat_name, "A7");
}

#[test]
fn selection_order_decides_which_seat_binds() {
    let (store, ids) = store_with_seats(&["A1", "A2"]);
    let reversed: Vec<EntityId> = ids.iter().rev().copied().collect();
    let SidebarState::Bound(fields) = sidebar_for(&reversed, &store) else {
        panic!("expected Bound");
    };
    assert_eq!(fields.seat_name, "A2");
}
