//! Arena module - the settled-block grid
//!
//! The arena is a 10x20 grid of `u8` cell values backed by a flat array for
//! cache locality and zero allocation. Coordinates: (x, y) with x in 0..9
//! left to right and y in 0..19 top to bottom; row 0 is the top row.
//! `0` is empty, anything non-zero blocks. Out-of-bounds reads return `None`
//! so collision logic can tell "wall" apart from "empty cell".

use crate::shape::ShapeMatrix;
use tui_bombtris_types::{ARENA_HEIGHT, ARENA_WIDTH, CLEAR_THRESHOLD_PERCENT, EMPTY_CELL};

/// Total number of cells in the arena
const ARENA_SIZE: usize = ARENA_WIDTH * ARENA_HEIGHT;

/// The settled-block grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    /// Flat array of cell values, row-major order (y * WIDTH + x)
    cells: [u8; ARENA_SIZE],
}

impl Arena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; ARENA_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= ARENA_WIDTH as i32 || y < 0 || y >= ARENA_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * ARENA_WIDTH + (x as usize))
    }

    /// Width of the arena
    pub fn width(&self) -> usize {
        ARENA_WIDTH
    }

    /// Height of the arena
    pub fn height(&self) -> usize {
        ARENA_HEIGHT
    }

    /// Cell value at (x, y), or `None` when the coordinate is out of bounds
    ///
    /// `None` is the out-of-bounds sentinel; `Some(0)` is a real empty cell.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell value. Returns false (writing nothing) out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// A row as a slice, or `None` when `y` is below the arena
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= ARENA_HEIGHT {
            return None;
        }
        let start = y * ARENA_WIDTH;
        Some(&self.cells[start..start + ARENA_WIDTH])
    }

    /// Overwrite row `y` with the given cells
    pub fn replace_row(&mut self, y: usize, row: &[u8; ARENA_WIDTH]) {
        if y >= ARENA_HEIGHT {
            return;
        }
        let start = y * ARENA_WIDTH;
        self.cells[start..start + ARENA_WIDTH].copy_from_slice(row);
    }

    /// Fill row `y` with a single value (the flash animation writes the
    /// flash marker this way)
    pub fn fill_row(&mut self, y: usize, value: u8) {
        if y >= ARENA_HEIGHT {
            return;
        }
        let start = y * ARENA_WIDTH;
        self.cells[start..start + ARENA_WIDTH].fill(value);
    }

    /// Delete row `y` and insert a fresh empty row at the top
    ///
    /// Rows 0..y shift down by one; `copy_within` handles the overlap.
    pub fn remove_row_shift_down(&mut self, y: usize) {
        if y >= ARENA_HEIGHT {
            return;
        }
        for row in (1..=y).rev() {
            let src_start = (row - 1) * ARENA_WIDTH;
            let dst_start = row * ARENA_WIDTH;
            self.cells
                .copy_within(src_start..src_start + ARENA_WIDTH, dst_start);
        }
        self.cells[0..ARENA_WIDTH].fill(EMPTY_CELL);
    }

    /// Number of non-empty cells in row `y`; 0 out of bounds
    pub fn row_fill_count(&self, y: usize) -> usize {
        self.row(y)
            .map_or(0, |row| row.iter().filter(|&&v| v != EMPTY_CELL).count())
    }

    /// Whether row `y` crosses the clear threshold (occupancy >= 90%)
    ///
    /// Integer arithmetic keeps the 9-of-10 boundary exact.
    pub fn is_row_clearable(&self, y: usize) -> bool {
        if y >= ARENA_HEIGHT {
            return false;
        }
        self.row_fill_count(y) * 100 >= ARENA_WIDTH * CLEAR_THRESHOLD_PERCENT
    }

    /// True when any non-zero shape cell placed at (x, y) lands out of
    /// bounds or on a non-zero arena cell
    ///
    /// This single predicate backs movement validation, wall kicks, spawn
    /// game-over detection, and hard-drop termination.
    pub fn collides(&self, shape: &ShapeMatrix, x: i32, y: i32) -> bool {
        for (dx, dy, v) in shape.cells() {
            if v == EMPTY_CELL {
                continue;
            }
            match self.get(x + dx, y + dy) {
                Some(EMPTY_CELL) => {}
                _ => return true,
            }
        }
        false
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// The raw cell array, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape;
    use tui_bombtris_types::PieceKind;

    #[test]
    fn index_calculation() {
        assert_eq!(Arena::index(0, 0), Some(0));
        assert_eq!(Arena::index(9, 0), Some(9));
        assert_eq!(Arena::index(0, 1), Some(10));
        assert_eq!(Arena::index(9, 19), Some(199));
        assert_eq!(Arena::index(-1, 0), None);
        assert_eq!(Arena::index(10, 0), None);
        assert_eq!(Arena::index(0, 20), None);
        assert_eq!(Arena::index(0, -1), None);
    }

    #[test]
    fn get_distinguishes_empty_from_out_of_bounds() {
        let mut arena = Arena::new();
        arena.set(5, 10, 3);

        assert_eq!(arena.get(0, 0), Some(EMPTY_CELL));
        assert_eq!(arena.get(5, 10), Some(3));
        assert_eq!(arena.get(-1, 0), None);
        assert_eq!(arena.get(0, 20), None);
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut arena = Arena::new();
        assert!(!arena.set(10, 0, 5));
        assert!(!arena.set(0, -1, 5));
        assert!(arena.cells().iter().all(|&v| v == EMPTY_CELL));
    }

    #[test]
    fn remove_row_shifts_rows_down_and_empties_the_top() {
        let mut arena = Arena::new();
        arena.fill_row(17, 2);
        arena.fill_row(18, 3);
        arena.fill_row(19, 4);

        arena.remove_row_shift_down(18);

        assert!(arena.row(0).unwrap().iter().all(|&v| v == EMPTY_CELL));
        assert!(arena.row(17).unwrap().iter().all(|&v| v == EMPTY_CELL));
        assert!(arena.row(18).unwrap().iter().all(|&v| v == 2));
        assert!(arena.row(19).unwrap().iter().all(|&v| v == 4));
    }

    #[test]
    fn replace_row_writes_exact_cells() {
        let mut arena = Arena::new();
        let row = [0, 0, 0, 5, 5, 5, 5, 0, 0, 0];
        arena.replace_row(19, &row);
        assert_eq!(arena.row(19).unwrap(), &row);
    }

    #[test]
    fn row_below_the_arena_is_none() {
        let mut arena = Arena::new();
        arena.fill_row(19, 7);

        assert!(arena.row(19).is_some());
        assert_eq!(arena.row(20), None);
        assert_eq!(arena.row(usize::MAX), None);
        assert_eq!(arena.row_fill_count(20), 0);
    }

    #[test]
    fn clear_threshold_is_ninety_percent() {
        let mut arena = Arena::new();

        // 9 of 10 cells crosses the threshold.
        for x in 0..9 {
            arena.set(x, 19, 1);
        }
        assert!(arena.is_row_clearable(19));

        // 8 of 10 does not.
        arena.set(8, 19, EMPTY_CELL);
        assert_eq!(arena.row_fill_count(19), 8);
        assert!(!arena.is_row_clearable(19));
    }

    #[test]
    fn collides_on_walls_floor_and_settled_cells() {
        let mut arena = Arena::new();
        let piece = shape::shape_for(PieceKind::O);

        assert!(!arena.collides(&piece, 4, 0));
        assert!(arena.collides(&piece, -1, 0));
        assert!(arena.collides(&piece, 9, 0));
        assert!(arena.collides(&piece, 4, 19));

        arena.set(4, 10, 7);
        assert!(arena.collides(&piece, 4, 9));
        assert!(!arena.collides(&piece, 4, 8));
    }

    #[test]
    fn zero_shape_cells_never_collide() {
        let mut arena = Arena::new();

        // T sits in a 3x3 box with an empty top row; the empty cells may
        // overlap settled blocks freely.
        let piece = shape::shape_for(PieceKind::T);
        arena.set(1, 9, 6);
        assert!(!arena.collides(&piece, 0, 9));
    }
}
