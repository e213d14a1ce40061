//! Arena tests via the workspace facade.

use tui_bombtris::core::{shape_for, Arena};
use tui_bombtris::types::{PieceKind, ARENA_HEIGHT, ARENA_WIDTH, EMPTY_CELL};

#[test]
fn test_arena_new_empty() {
    let arena = Arena::new();
    assert_eq!(arena.width(), ARENA_WIDTH);
    assert_eq!(arena.height(), ARENA_HEIGHT);

    for y in 0..ARENA_HEIGHT as i32 {
        for x in 0..ARENA_WIDTH as i32 {
            assert_eq!(arena.get(x, y), Some(EMPTY_CELL));
        }
    }
}

#[test]
fn test_arena_get_out_of_bounds() {
    let arena = Arena::new();

    assert_eq!(arena.get(-1, 0), None);
    assert_eq!(arena.get(0, -1), None);
    assert_eq!(arena.get(ARENA_WIDTH as i32, 0), None);
    assert_eq!(arena.get(0, ARENA_HEIGHT as i32), None);
}

#[test]
fn test_arena_set_and_get() {
    let mut arena = Arena::new();

    assert!(arena.set(5, 10, 3));
    assert_eq!(arena.get(5, 10), Some(3));

    assert!(arena.set(5, 10, EMPTY_CELL));
    assert_eq!(arena.get(5, 10), Some(EMPTY_CELL));

    // Out of bounds writes are rejected.
    assert!(!arena.set(-1, 0, 1));
    assert!(!arena.set(ARENA_WIDTH as i32, 0, 1));
}

#[test]
fn test_nine_of_ten_cells_clear_a_row() {
    let mut arena = Arena::new();

    // Nine filled cells out of ten meets the threshold.
    for x in 0..9 {
        arena.set(x, 19, 5);
    }
    assert!(arena.is_row_clearable(19));

    // Eight does not.
    for x in 0..8 {
        arena.set(x, 18, 5);
    }
    assert!(!arena.is_row_clearable(18));
}

#[test]
fn test_remove_row_shifts_everything_down() {
    let mut arena = Arena::new();
    arena.fill_row(19, 5);
    arena.set(0, 18, 3);
    arena.set(1, 17, 2);

    arena.remove_row_shift_down(19);

    // Row 18 moved into 19, row 17 into 18, and the top row is empty.
    assert_eq!(arena.get(0, 19), Some(3));
    assert_eq!(arena.get(1, 18), Some(2));
    assert_eq!(arena.get(1, 17), Some(EMPTY_CELL));
    assert_eq!(arena.row_fill_count(0), 0);
}

#[test]
fn test_shape_collision_against_walls_and_cells() {
    let mut arena = Arena::new();
    let t = shape_for(PieceKind::T);

    // T occupies matrix columns 0..3 on row 1, so x = -1 pokes out left.
    assert!(arena.collides(&t, -1, 0));
    assert!(!arena.collides(&t, 0, 0));

    // Right wall: column x+2 must stay inside.
    assert!(arena.collides(&t, (ARENA_WIDTH - 2) as i32, 0));

    // Floor: the stem at row y+2 must stay inside.
    assert!(arena.collides(&t, 3, (ARENA_HEIGHT - 2) as i32));

    // Settled cell under the stem.
    arena.set(4, 12, 7);
    assert!(arena.collides(&t, 3, 10));
}
