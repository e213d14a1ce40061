//! Shape module - piece matrices, the catalog, and rotation
//!
//! Pieces are square grids of cell values rather than mino offset lists, so
//! a matrix carries its own colors and the bomb marker travels with the
//! piece. Rotation is a pure function (transpose plus a directional
//! reversal) paired with an oscillating wall-kick search.

use arrayvec::ArrayVec;

use tui_bombtris_types::{PieceKind, RotationDir};

/// Largest bounding box in the catalog (the I piece's 4x4)
pub const MAX_SHAPE_SIDE: usize = 4;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Square grid of cell values describing one piece orientation
///
/// Invariant: at least one cell is non-zero. Sides range from 1 (bomb) to
/// 4 (I piece); storage is a fixed-capacity flat array, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMatrix {
    side: usize,
    cells: ArrayVec<u8, MAX_SHAPE_CELLS>,
}

impl ShapeMatrix {
    /// Build a matrix from row slices. Rows must form a square no larger
    /// than the catalog maximum.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let side = rows.len();
        debug_assert!(side >= 1 && side <= MAX_SHAPE_SIDE);
        let mut cells = ArrayVec::new();
        for row in rows {
            debug_assert_eq!(row.len(), side, "shape matrix must be square");
            cells.try_extend_from_slice(row).expect("shape too large");
        }
        Self { side, cells }
    }

    /// Side length of the square matrix
    pub fn side(&self) -> usize {
        self.side
    }

    /// Matrix width; equals the side and bounds the wall-kick search
    pub fn width(&self) -> usize {
        self.side
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.side + x
    }

    /// Cell value at matrix-local (x, y)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[self.idx(x, y)]
    }

    /// Iterate all cells as (x, y, value) in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i % side) as i32, (i / side) as i32, v))
    }

    /// True if any cell holds the given value
    pub fn contains(&self, value: u8) -> bool {
        self.cells.iter().any(|&v| v == value)
    }

    fn swap_cells(&mut self, ax: usize, ay: usize, bx: usize, by: usize) {
        let a = self.idx(ax, ay);
        let b = self.idx(bx, by);
        self.cells.swap(a, b);
    }

    fn reverse_each_row(&mut self) {
        for y in 0..self.side {
            let start = y * self.side;
            self.cells[start..start + self.side].reverse();
        }
    }

    fn reverse_row_order(&mut self) {
        for y in 0..self.side / 2 {
            let other = self.side - 1 - y;
            for x in 0..self.side {
                self.swap_cells(x, y, x, other);
            }
        }
    }
}

/// Build the canonical matrix for a piece kind
///
/// Every standard kind fills its cells with its own color index; the bomb
/// is a single cell holding the bomb marker.
pub fn shape_for(kind: PieceKind) -> ShapeMatrix {
    let c = kind.fill_value();
    match kind {
        PieceKind::T => ShapeMatrix::from_rows(&[&[0, 0, 0], &[c, c, c], &[0, c, 0]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[c, c], &[c, c]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[0, c, 0], &[0, c, 0], &[0, c, c]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[0, c, 0], &[0, c, 0], &[c, c, 0]]),
        PieceKind::I => ShapeMatrix::from_rows(&[
            &[0, 0, 0, 0],
            &[c, c, c, c],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, c, c], &[c, c, 0], &[0, 0, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[c, c, 0], &[0, c, c], &[0, 0, 0]]),
        PieceKind::U => ShapeMatrix::from_rows(&[&[c, 0, c], &[c, c, c], &[0, 0, 0]]),
        PieceKind::Bomb => ShapeMatrix::from_rows(&[&[c]]),
    }
}

/// 90° rotation as a pure function returning a new matrix
///
/// Transpose, then reverse each row for clockwise or reverse the row order
/// for counter-clockwise. Four applications of the same direction return
/// the original matrix bit for bit.
pub fn rotated(matrix: &ShapeMatrix, dir: RotationDir) -> ShapeMatrix {
    let mut out = matrix.clone();
    for y in 0..out.side {
        for x in 0..y {
            out.swap_cells(x, y, y, x);
        }
    }
    match dir {
        RotationDir::Cw => out.reverse_each_row(),
        RotationDir::Ccw => out.reverse_row_order(),
    }
    out
}

/// Rotate with the oscillating wall-kick search
///
/// Kick offsets accumulate onto x in the order +1, -2, +3, -4, ... (the
/// offset after k is -(k + sign(k))); the search gives up once the next
/// offset exceeds the matrix width. The comparison is signed, so a
/// negative next offset never ends the search and a width-3 piece tests
/// displacements 0, +1, -1, +2. Returns the rotated matrix and the kicked
/// x on success; on failure the caller keeps its original matrix and
/// position untouched. Deliberately not the standard kick table.
pub fn try_rotate(
    matrix: &ShapeMatrix,
    x: i32,
    dir: RotationDir,
    mut collides: impl FnMut(&ShapeMatrix, i32) -> bool,
) -> Option<(ShapeMatrix, i32)> {
    let turned = rotated(matrix, dir);
    let mut kicked_x = x;
    let mut offset: i32 = 1;
    while collides(&turned, kicked_x) {
        kicked_x += offset;
        offset = -(offset + offset.signum());
        if offset > matrix.width() as i32 {
            return None;
        }
    }
    Some((turned, kicked_x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bombtris_types::{BOMB_CELL, EMPTY_CELL, STANDARD_KINDS};

    fn rows(matrix: &ShapeMatrix) -> Vec<Vec<u8>> {
        (0..matrix.side())
            .map(|y| (0..matrix.side()).map(|x| matrix.get(x, y)).collect())
            .collect()
    }

    #[test]
    fn catalog_matches_canonical_layouts() {
        assert_eq!(
            rows(&shape_for(PieceKind::T)),
            vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 1, 0]]
        );
        assert_eq!(rows(&shape_for(PieceKind::O)), vec![vec![2, 2], vec![2, 2]]);
        assert_eq!(
            rows(&shape_for(PieceKind::I)),
            vec![
                vec![0, 0, 0, 0],
                vec![5, 5, 5, 5],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );
        assert_eq!(
            rows(&shape_for(PieceKind::U)),
            vec![vec![8, 0, 8], vec![8, 8, 8], vec![0, 0, 0]]
        );
        assert_eq!(rows(&shape_for(PieceKind::Bomb)), vec![vec![BOMB_CELL]]);
    }

    #[test]
    fn every_catalog_shape_has_a_filled_cell() {
        for kind in STANDARD_KINDS {
            let m = shape_for(kind);
            assert!(m.cells().any(|(_, _, v)| v != EMPTY_CELL), "{:?}", kind);
            assert!(m.contains(kind.fill_value()));
        }
        assert!(shape_for(PieceKind::Bomb).contains(BOMB_CELL));
    }

    #[test]
    fn clockwise_rotation_turns_the_t() {
        let t = shape_for(PieceKind::T);
        let turned = rotated(&t, RotationDir::Cw);
        assert_eq!(
            rows(&turned),
            vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 1, 0]]
        );
    }

    #[test]
    fn counter_clockwise_rotation_turns_the_t() {
        let t = shape_for(PieceKind::T);
        let turned = rotated(&t, RotationDir::Ccw);
        assert_eq!(
            rows(&turned),
            vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]
        );
    }

    #[test]
    fn four_rotations_restore_every_shape() {
        for kind in [
            PieceKind::I,
            PieceKind::L,
            PieceKind::J,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::U,
            PieceKind::Bomb,
        ] {
            let original = shape_for(kind);
            for dir in [RotationDir::Cw, RotationDir::Ccw] {
                let mut m = original.clone();
                for _ in 0..4 {
                    m = rotated(&m, dir);
                }
                assert_eq!(m, original, "{:?} {:?}", kind, dir);
            }
        }
    }

    #[test]
    fn opposite_rotations_cancel() {
        let z = shape_for(PieceKind::Z);
        let back = rotated(&rotated(&z, RotationDir::Cw), RotationDir::Ccw);
        assert_eq!(back, z);
    }

    #[test]
    fn kick_search_walks_the_oscillating_sequence() {
        let t = shape_for(PieceKind::T);
        let mut tried = Vec::new();
        let result = try_rotate(&t, 0, RotationDir::Cw, |_, x| {
            tried.push(x);
            true
        });
        assert_eq!(result, None);
        // Offsets +1, -2, +3, -4 accumulate onto x; after x+2 fails the
        // next offset is +5, past the width-3 bound. The -4 step is what
        // reaches x+2: a negative offset never ends the search.
        assert_eq!(tried, vec![0, 1, -1, 2]);
    }

    #[test]
    fn kick_search_stops_at_first_fit() {
        let t = shape_for(PieceKind::T);
        let result = try_rotate(&t, 5, RotationDir::Cw, |_, x| x != 6);
        let (matrix, x) = result.expect("kick should succeed");
        assert_eq!(x, 6);
        assert_eq!(matrix, rotated(&t, RotationDir::Cw));
    }

    #[test]
    fn kick_search_reaches_the_far_candidate() {
        let t = shape_for(PieceKind::T);
        let result = try_rotate(&t, 0, RotationDir::Cw, |_, x| x != 2);
        assert_eq!(result, Some((rotated(&t, RotationDir::Cw), 2)));
    }

    #[test]
    fn unobstructed_rotation_keeps_x() {
        let s = shape_for(PieceKind::S);
        let result = try_rotate(&s, 4, RotationDir::Ccw, |_, _| false);
        assert_eq!(result, Some((rotated(&s, RotationDir::Ccw), 4)));
    }
}
