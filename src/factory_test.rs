#![allow(clippy::float_cmp)]

use super::*;

// --- make_seat ---

#[test]
fn seat_name_defaults_to_row_plus_col() {
    let e = make_seat(Point::new(0.0, 0.0), "B", 7, "Standard", 0.0, "", "", None, false);
    assert_eq!(e.seat().unwrap().seat_name, "B7");
}

#[test]
fn empty_name_override_falls_back() {
    let e = make_seat(
        Point::new(0.0, 0.0),
        "C",
        2,
        "Standard",
        0.0,
        "",
        "",
        Some(String::new()),
        false,
    );
    assert_eq!(e.seat().unwrap().seat_name, "C2");
}

#[test]
fn explicit_name_override_wins() {
    let e = make_seat(
        Point::new(0.0, 0.0),
        "C",
        2,
        "Standard",
        0.0,
        "",
        "",
        Some("Aisle-3".to_string()),
        false,
    );
    assert_eq!(e.seat().unwrap().seat_name, "Aisle-3");
}

#[test]
fn seat_carries_metadata_and_position() {
    let e = make_seat(
        Point::new(12.0, 34.0),
        "A",
        1,
        "VIP",
        150.0,
        "Main",
        "Orchestra",
        None,
        true,
    );
    let meta = e.seat().unwrap();
    assert_eq!(meta.row, "A");
    assert_eq!(meta.col, 1);
    assert_eq!(meta.seat_type, "VIP");
    assert_eq!(meta.price, 150.0);
    assert_eq!(meta.floor, "Main");
    assert_eq!(meta.section, "Orchestra");
    assert_eq!(meta.status, STATUS_ACTIVE);
    assert_eq!(e.x, 12.0);
    assert_eq!(e.y, 34.0);
    assert!(e.generated);
}

#[test]
fn seats_get_unique_ids() {
    let a = make_seat(Point::new(0.0, 0.0), "A", 1, "Standard", 0.0, "", "", None, false);
    let b = make_seat(Point::new(0.0, 0.0), "A", 1, "Standard", 0.0, "", "", None, false);
    assert_ne!(a.id, b.id);
}

// --- make_shape / make_text / make_section_label ---

#[test]
fn shapes_are_never_generated() {
    for kind in [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Polygon,
    ] {
        let e = make_shape(kind, Point::new(1.0, 2.0));
        assert!(!e.generated);
        assert!(e.seat().is_none());
        assert_eq!(e.kind, EntityKind::Shape { shape: kind });
    }
}

#[test]
fn text_carries_content() {
    let e = make_text("Stage", Point::new(3.0, 4.0));
    assert_eq!(e.kind, EntityKind::Text { content: "Stage".to_string() });
    assert!(!e.generated);
}

#[test]
fn section_label_is_generated() {
    let e = make_section_label("Main", Point::new(0.0, 0.0));
    assert!(e.generated);
    assert_eq!(e.kind, EntityKind::Label { text: "Main".to_string() });
}
