//! Read-only snapshot of a session for rendering.
//!
//! Snapshots are owned copies in fixed buffers: the renderer never sees a
//! pointer into memory the session keeps mutating.

use brick_tetris_types::{FIELD_HEIGHT, FIELD_WIDTH, PREVIEW_SIDE};

use crate::tetromino::Tetromino;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Locked field cells as fill markers (0 = empty).
    pub field: [[u8; FIELD_WIDTH]; FIELD_HEIGHT],
    /// Next-piece preview bitmap.
    pub next: [[u8; PREVIEW_SIDE]; PREVIEW_SIDE],
    /// Piece in flight, if any; the renderer overlays it on `field`.
    pub active: Option<Tetromino>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub speed_ms: u64,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[0; FIELD_WIDTH]; FIELD_HEIGHT],
            next: [[0; PREVIEW_SIDE]; PREVIEW_SIDE],
            active: None,
            score: 0,
            high_score: 0,
            level: 1,
            speed_ms: 0,
            paused: false,
            game_over: false,
        }
    }
}
