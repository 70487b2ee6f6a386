//! Piece catalog tests - bitmaps, orientation mappings, spawn placement.

use brick_tetris::core::{shape, Tetromino, CATALOG};
use brick_tetris::types::{Orientation, PieceKind, RotateDirection, FIELD_WIDTH};

#[test]
fn test_catalog_covers_all_kinds() {
    assert_eq!(CATALOG.len(), PieceKind::ALL.len());
    for kind in PieceKind::ALL {
        let s = shape(kind);
        assert!((2..=4).contains(&s.side()));
    }
}

#[test]
fn test_every_piece_occupies_four_cells_in_every_orientation() {
    for kind in PieceKind::ALL {
        for index in 0..4 {
            let orientation = Orientation::from_index(index);
            let count = shape(kind).occupied_cells(orientation).count();
            assert_eq!(count, 4, "{kind:?} at {orientation:?}");
        }
    }
}

#[test]
fn test_rotation_cells_stay_inside_the_bitmap_square() {
    for kind in PieceKind::ALL {
        let side = shape(kind).side();
        for index in 0..4 {
            let orientation = Orientation::from_index(index);
            for (row, col) in shape(kind).occupied_cells(orientation) {
                assert!((0..side).contains(&row));
                assert!((0..side).contains(&col));
            }
        }
    }
}

#[test]
fn test_four_quarter_turns_are_identity() {
    for kind in PieceKind::ALL {
        let mut piece = Tetromino::spawn(kind);
        let start = piece;
        for _ in 0..4 {
            piece.rotate(RotateDirection::Clockwise);
        }
        assert_eq!(piece, start);
    }
}

#[test]
fn test_counterclockwise_undoes_clockwise() {
    let mut piece = Tetromino::spawn(PieceKind::J);
    let start = piece;
    piece.rotate(RotateDirection::Clockwise);
    piece.rotate(RotateDirection::CounterClockwise);
    assert_eq!(piece, start);
}

#[test]
fn test_spawn_is_top_centered() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::spawn(kind);
        assert_eq!(piece.row, 0);
        assert_eq!(piece.orientation, Orientation::North);

        let side = shape(kind).side();
        assert_eq!(piece.col, (FIELD_WIDTH as i8 - side) / 2);
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let north: Vec<_> = shape(PieceKind::O)
        .occupied_cells(Orientation::North)
        .collect();
    for index in 1..4 {
        let turned: Vec<_> = shape(PieceKind::O)
            .occupied_cells(Orientation::from_index(index))
            .collect();
        let mut sorted = turned.clone();
        sorted.sort_unstable();
        let mut base = north.clone();
        base.sort_unstable();
        assert_eq!(sorted, base);
    }
}
