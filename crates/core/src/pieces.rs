//! Piece catalog: the seven tetramino bitmaps and their orientation mapping.
//!
//! Each shape is an immutable square bitmap (side 2-4) holding its nonzero
//! fill marker. Orientation never rewrites the bitmap; instead each of the
//! four quarter-turns reads it through a rotated index mapping.

use brick_tetris_types::{Orientation, PieceKind};

/// Immutable shape descriptor.
pub struct PieceShape {
    side: i8,
    cells: &'static [u8],
}

const I_CELLS: [u8; 16] = [0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0];
const O_CELLS: [u8; 4] = [2, 2, 2, 2];
const T_CELLS: [u8; 9] = [0, 0, 0, 3, 3, 3, 0, 3, 0];
const L_CELLS: [u8; 9] = [0, 0, 0, 4, 4, 4, 4, 0, 0];
const J_CELLS: [u8; 9] = [0, 0, 0, 5, 5, 5, 0, 0, 5];
const S_CELLS: [u8; 9] = [0, 0, 0, 0, 6, 6, 6, 6, 0];
const Z_CELLS: [u8; 9] = [0, 0, 0, 7, 7, 0, 0, 7, 7];

/// Catalog indexed by `PieceKind::index()`.
pub const CATALOG: [PieceShape; 7] = [
    PieceShape {
        side: 4,
        cells: &I_CELLS,
    },
    PieceShape {
        side: 2,
        cells: &O_CELLS,
    },
    PieceShape {
        side: 3,
        cells: &T_CELLS,
    },
    PieceShape {
        side: 3,
        cells: &L_CELLS,
    },
    PieceShape {
        side: 3,
        cells: &J_CELLS,
    },
    PieceShape {
        side: 3,
        cells: &S_CELLS,
    },
    PieceShape {
        side: 3,
        cells: &Z_CELLS,
    },
];

/// Looks up the catalog entry for a piece kind.
pub fn shape(kind: PieceKind) -> &'static PieceShape {
    &CATALOG[kind.index()]
}

impl PieceShape {
    pub fn side(&self) -> i8 {
        self.side
    }

    /// Whether the bitmap cell at relative (row, col) is occupied under the
    /// given orientation. Each orientation is a 90-degree index remapping of
    /// the stored bitmap.
    pub fn filled(&self, orientation: Orientation, row: i8, col: i8) -> bool {
        let n = self.side as usize;
        if row < 0 || col < 0 || row as usize >= n || col as usize >= n {
            return false;
        }
        let (i, j) = (row as usize, col as usize);
        let index = match orientation {
            Orientation::North => i * n + j,
            Orientation::East => j * n + (n - 1 - i),
            Orientation::South => (n - 1 - i) * n + (n - 1 - j),
            Orientation::West => (n - 1 - j) * n + i,
        };
        self.cells[index] != 0
    }

    /// Relative (row, col) offsets of the occupied cells under the given
    /// orientation.
    pub fn occupied_cells(&self, orientation: Orientation) -> impl Iterator<Item = (i8, i8)> + '_ {
        let side = self.side;
        (0..side).flat_map(move |row| {
            (0..side).filter_map(move |col| self.filled(orientation, row, col).then_some((row, col)))
        })
    }
}
