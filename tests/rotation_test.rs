//! Shape catalog and rotation tests via the workspace facade.

use tui_bombtris::core::{rotated, shape_for, try_rotate, Arena};
use tui_bombtris::types::{PieceKind, RotationDir, BOMB_CELL, STANDARD_KINDS};

#[test]
fn test_every_standard_shape_carries_its_color() {
    for kind in STANDARD_KINDS {
        let shape = shape_for(kind);
        assert!(shape.contains(kind.fill_value()), "{:?}", kind);
    }
}

#[test]
fn test_shape_catalog_spot_checks() {
    let i = shape_for(PieceKind::I);
    assert_eq!(i.side(), 4);
    // The bar lives on matrix row 1.
    for x in 0..4 {
        assert_eq!(i.get(x, 1), 5);
    }

    let o = shape_for(PieceKind::O);
    assert_eq!(o.side(), 2);

    // Open-top cup: both prongs up, full base.
    let u = shape_for(PieceKind::U);
    assert_eq!(u.get(0, 0), 8);
    assert_eq!(u.get(1, 0), 0);
    assert_eq!(u.get(2, 0), 8);
    for x in 0..3 {
        assert_eq!(u.get(x, 1), 8);
    }
}

#[test]
fn test_bomb_is_a_single_cell() {
    let bomb = shape_for(PieceKind::Bomb);
    assert_eq!(bomb.side(), 1);
    assert_eq!(bomb.get(0, 0), BOMB_CELL);
}

#[test]
fn test_o_survives_rotation_unchanged() {
    let o = shape_for(PieceKind::O);
    assert_eq!(rotated(&o, RotationDir::Cw), o);
    assert_eq!(rotated(&o, RotationDir::Ccw), o);
}

#[test]
fn test_rotating_cw_then_ccw_restores_each_shape() {
    for kind in STANDARD_KINDS {
        let shape = shape_for(kind);
        let back = rotated(&rotated(&shape, RotationDir::Cw), RotationDir::Ccw);
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_kick_slides_a_wall_pinned_rotation_inside() {
    let arena = Arena::new();
    let vertical = rotated(&shape_for(PieceKind::I), RotationDir::Cw);

    // A horizontal I at x = 7 would span columns 7..11. The kick search
    // tries 8 (still outside), then 6, which fits.
    let y = 5;
    let (_, kicked_x) = try_rotate(&vertical, 7, RotationDir::Cw, |shape, x| {
        arena.collides(shape, x, y)
    })
    .expect("kick should find room");
    assert_eq!(kicked_x, 6);
}

#[test]
fn test_boxed_in_rotation_returns_none() {
    let t = shape_for(PieceKind::T);
    // No candidate column fits, so the rotation is abandoned.
    assert!(try_rotate(&t, 4, RotationDir::Cw, |_, _| true).is_none());
}
