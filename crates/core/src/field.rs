//! Game field: a heap-allocated grid of cells addressed by (row, col).
//!
//! Row 0 is the top of the field. The grid is stored row-major in a single
//! contiguous buffer so row compaction is a `copy_within` over one slice.

use arrayvec::ArrayVec;
use thiserror::Error;

use brick_tetris_types::{Cell, FIELD_HEIGHT, FIELD_WIDTH, MAX_FIELD_HEIGHT, MAX_FIELD_WIDTH};

/// Rejected at allocation time; a field is never partially constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid field dimensions {rows}x{cols} (max {MAX_FIELD_HEIGHT}x{MAX_FIELD_WIDTH})")]
    InvalidDimensions { rows: usize, cols: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    rows: i8,
    cols: i8,
    cells: Vec<Cell>,
}

impl Field {
    /// Allocates a zero-initialized grid. Fails unless
    /// `0 < rows <= MAX_FIELD_HEIGHT` and `0 < cols <= MAX_FIELD_WIDTH`.
    pub fn allocate(rows: usize, cols: usize) -> Result<Self, FieldError> {
        if rows == 0 || rows > MAX_FIELD_HEIGHT || cols == 0 || cols > MAX_FIELD_WIDTH {
            return Err(FieldError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows: rows as i8,
            cols: cols as i8,
            cells: vec![None; rows * cols],
        })
    }

    pub fn rows(&self) -> i8 {
        self.rows
    }

    pub fn cols(&self) -> i8 {
        self.cols
    }

    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= self.rows || col < 0 || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Cell at (row, col); `None` when out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Writes a cell. Returns false (no-op) when out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        let start = row * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Removes every completed row, shifting the rows above down, and returns
    /// the cleared row indices bottom-to-top. Bottom-up two-pointer
    /// compaction; no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_FIELD_HEIGHT> {
        let mut cleared = ArrayVec::new();
        let cols = self.cols as usize;
        let mut write_row = self.rows as usize;

        for read_row in (0..self.rows as usize).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * cols;
                    let dst = write_row * cols;
                    self.cells.copy_within(src..src + cols, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_row * cols] {
            *cell = None;
        }

        cleared
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Copies the grid into a fixed snapshot buffer as fill markers
    /// (0 = empty). Rows/cols beyond the field's own size stay zero.
    pub fn write_u8_grid(&self, out: &mut [[u8; FIELD_WIDTH]; FIELD_HEIGHT]) {
        *out = [[0; FIELD_WIDTH]; FIELD_HEIGHT];
        for row in 0..(self.rows as usize).min(FIELD_HEIGHT) {
            for col in 0..(self.cols as usize).min(FIELD_WIDTH) {
                if let Some(Some(kind)) = self.get(row as i8, col as i8) {
                    out[row][col] = kind.fill();
                }
            }
        }
    }
}
