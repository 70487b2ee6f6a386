//! Active falling piece: catalog kind plus orientation and field offset.

use brick_tetris_types::{MoveDirection, Orientation, PieceKind, RotateDirection, FIELD_WIDTH};

use crate::field::Field;
use crate::pieces::shape;

/// Position and orientation of the piece currently in play, relative to the
/// field's top-left corner. Offsets may go negative while a provisional move
/// is being collision-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub row: i8,
    pub col: i8,
}

impl Tetromino {
    /// New piece at the spawn offset: top row, horizontally centered for its
    /// bitmap side.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            orientation: Orientation::North,
            row: 0,
            col: (FIELD_WIDTH as i8 - shape(kind).side()) / 2,
        }
    }

    /// Quarter-turn in the given sense (true modulo, never negative).
    pub fn rotate(&mut self, direction: RotateDirection) {
        self.orientation = self.orientation.rotated(direction);
    }

    /// One-cell shift. `Up` exists as the inverse correction for an illegal
    /// downward move.
    pub fn shift(&mut self, direction: MoveDirection) {
        self.row += direction.row_delta();
        self.col += direction.col_delta();
    }

    /// Absolute (row, col) field coordinates of the occupied cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        shape(self.kind)
            .occupied_cells(self.orientation)
            .map(|(row, col)| (self.row + row, self.col + col))
    }

    /// True when any occupied cell falls outside the field or over a filled
    /// cell.
    pub fn collides(&self, field: &Field) -> bool {
        self.occupied_cells()
            .any(|(row, col)| !field.is_free(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_tetris_types::{FIELD_HEIGHT, FIELD_WIDTH};

    fn empty_field() -> Field {
        Field::allocate(FIELD_HEIGHT, FIELD_WIDTH).unwrap()
    }

    #[test]
    fn test_spawn_is_top_centered() {
        assert_eq!(Tetromino::spawn(PieceKind::I).col, 3);
        assert_eq!(Tetromino::spawn(PieceKind::O).col, 4);
        assert_eq!(Tetromino::spawn(PieceKind::T).col, 3);
        for kind in PieceKind::ALL {
            let piece = Tetromino::spawn(kind);
            assert_eq!(piece.row, 0);
            assert_eq!(piece.orientation, Orientation::North);
        }
    }

    #[test]
    fn test_no_collision_inside_empty_bounds_at_any_orientation() {
        let field = empty_field();
        for kind in PieceKind::ALL {
            let mut piece = Tetromino::spawn(kind);
            piece.row = 5;
            for _ in 0..4 {
                assert!(!piece.collides(&field), "{kind:?} {:?}", piece.orientation);
                piece.rotate(RotateDirection::Clockwise);
            }
        }
    }

    #[test]
    fn test_collision_one_column_past_left_edge() {
        let field = empty_field();
        for kind in PieceKind::ALL {
            let mut piece = Tetromino::spawn(kind);
            piece.row = 5;
            // Walk left until the leftmost occupied cell sits at column 0,
            // then one more step must collide.
            while !piece.collides(&field) {
                piece.shift(MoveDirection::Left);
            }
            assert!(piece.collides(&field), "{kind:?}");
            piece.shift(MoveDirection::Right);
            assert!(!piece.collides(&field), "{kind:?}");
            assert!(piece.occupied_cells().any(|(_, col)| col == 0));
        }
    }

    #[test]
    fn test_collision_with_locked_cells() {
        let mut field = empty_field();
        let mut piece = Tetromino::spawn(PieceKind::O);
        piece.row = 10;

        assert!(!piece.collides(&field));
        let (row, col) = piece.occupied_cells().next().unwrap();
        field.set(row, col, Some(PieceKind::I));
        assert!(piece.collides(&field));
    }

    #[test]
    fn test_shift_then_inverse_is_identity() {
        let original = Tetromino::spawn(PieceKind::L);
        for dir in [
            MoveDirection::Down,
            MoveDirection::Up,
            MoveDirection::Left,
            MoveDirection::Right,
        ] {
            let mut piece = original;
            piece.shift(dir);
            piece.shift(dir.inverse());
            assert_eq!(piece, original);
        }
    }
}
