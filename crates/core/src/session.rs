//! Game session: the aggregate owning the field, the active and next pieces,
//! and the score/level/speed bookkeeping.
//!
//! The session is the single writable owner of all round state. State-machine
//! callbacks mutate it and report domain outcomes (collision, board full)
//! through a single-slot trigger outbox that the controller drains; nothing
//! here returns errors for expected gameplay conditions.

use brick_tetris_types::{
    MoveDirection, PieceKind, RotateDirection, Trigger, FIELD_HEIGHT, FIELD_WIDTH, PREVIEW_SIDE,
};

use crate::field::{Field, FieldError};
use crate::pieces::shape;
use crate::rng::PieceRng;
use crate::scoring::{drop_interval_ms, level_for_score, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::tetromino::Tetromino;

#[derive(Debug)]
pub struct Session {
    field: Field,
    active: Option<Tetromino>,
    next: PieceKind,
    rng: PieceRng,
    score: u32,
    high_score: u32,
    level: u32,
    speed_ms: u64,
    paused: bool,
    game_over: bool,
    pending: Option<Trigger>,
}

impl Session {
    /// Creates a fresh session. Fails without partial construction when the
    /// field cannot be allocated.
    pub fn new(seed: u32, high_score: u32) -> Result<Self, FieldError> {
        let field = Field::allocate(FIELD_HEIGHT, FIELD_WIDTH)?;
        let mut rng = PieceRng::new(seed);
        let next = rng.next_piece();
        Ok(Self {
            field,
            active: None,
            next,
            rng,
            score: 0,
            high_score,
            level: 1,
            speed_ms: drop_interval_ms(1),
            paused: false,
            game_over: false,
            pending: None,
        })
    }

    /// Restart: clears the round while keeping the high score and the RNG
    /// stream.
    pub fn reset(&mut self) {
        self.field.clear();
        self.active = None;
        self.next = self.rng.next_piece();
        self.score = 0;
        self.level = 1;
        self.speed_ms = drop_interval_ms(1);
        self.paused = false;
        self.game_over = false;
        self.pending = None;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    #[cfg(test)]
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Queues a trigger for the controller to feed back into the machine.
    /// Single slot: a later push within the same callback chain wins.
    pub fn push_trigger(&mut self, trigger: Trigger) {
        self.pending = Some(trigger);
    }

    pub fn take_trigger(&mut self) -> Option<Trigger> {
        self.pending.take()
    }

    /// Promotes the stored next piece to the active slot at top-center and
    /// draws a new next. Returns false when the fresh piece collides
    /// immediately: the board is full and the round is over.
    pub fn spawn(&mut self) -> bool {
        let piece = Tetromino::spawn(self.next);
        self.next = self.rng.next_piece();
        self.active = Some(piece);
        if piece.collides(&self.field) {
            self.game_over = true;
            false
        } else {
            true
        }
    }

    /// Provisionally shifts the active piece, reverting on collision.
    /// Returns false (offsets unchanged) when the move is illegal or there is
    /// no active piece.
    pub fn try_move(&mut self, direction: MoveDirection) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        piece.shift(direction);
        if piece.collides(&self.field) {
            piece.shift(direction.inverse());
            return false;
        }
        true
    }

    /// Provisionally rotates the active piece, rotating back on collision.
    pub fn try_rotate(&mut self, direction: RotateDirection) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        piece.rotate(direction);
        if piece.collides(&self.field) {
            piece.rotate(direction.opposite());
            return false;
        }
        true
    }

    /// One gravity step. Returns false when the piece has landed.
    pub fn step_down(&mut self) -> bool {
        self.try_move(MoveDirection::Down)
    }

    /// Locks the active piece into the field, clears completed rows, scores
    /// them, and recomputes level and speed.
    pub fn fix(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        for (row, col) in piece.occupied_cells() {
            self.field.set(row, col, Some(piece.kind));
        }

        let cleared = self.field.clear_full_rows();
        if !cleared.is_empty() {
            self.score = self.score.saturating_add(line_clear_score(cleared.len()));
            self.high_score = self.high_score.max(self.score);
            self.level = level_for_score(self.score);
            self.speed_ms = drop_interval_ms(self.level);
        }
    }

    /// Marks the round lost and folds the final score into the high score.
    pub fn finish(&mut self) {
        self.game_over = true;
        self.high_score = self.high_score.max(self.score);
    }

    /// Owned read-only copy for the renderer.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot {
            active: self.active,
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            speed_ms: self.speed_ms,
            paused: self.paused,
            game_over: self.game_over,
            ..GameSnapshot::default()
        };
        self.field.write_u8_grid(&mut snapshot.field);

        let next_shape = shape(self.next);
        for (row, col) in next_shape.occupied_cells(brick_tetris_types::Orientation::North) {
            let (row, col) = (row as usize, col as usize);
            if row < PREVIEW_SIDE && col < PREVIEW_SIDE {
                snapshot.next[row][col] = self.next.fill();
            }
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_tetris_types::Orientation;

    fn session() -> Session {
        Session::new(12345, 0).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session();
        assert_eq!(s.score(), 0);
        assert_eq!(s.level(), 1);
        assert_eq!(s.speed_ms(), drop_interval_ms(1));
        assert!(!s.is_paused());
        assert!(!s.is_game_over());
        assert!(s.active().is_none());
    }

    #[test]
    fn test_spawn_promotes_next_and_redraws_preview() {
        let mut s = session();
        let expected = s.next_kind();

        assert!(s.spawn());
        let piece = s.active().unwrap();
        assert_eq!(piece.kind, expected);
        assert_eq!(piece.row, 0);
        assert_eq!(piece.orientation, Orientation::North);
    }

    #[test]
    fn test_spawn_into_full_board_is_game_over() {
        let mut s = session();
        for row in 0..FIELD_HEIGHT as i8 {
            for col in 0..FIELD_WIDTH as i8 {
                s.field_mut().set(row, col, Some(PieceKind::I));
            }
        }
        assert!(!s.spawn());
        assert!(s.is_game_over());
    }

    #[test]
    fn test_move_at_left_wall_is_reverted() {
        let mut s = session();
        s.spawn();

        while s.try_move(MoveDirection::Left) {}
        let col = s.active().unwrap().col;
        assert!(!s.try_move(MoveDirection::Left));
        assert_eq!(s.active().unwrap().col, col);
    }

    #[test]
    fn test_rotate_reverts_on_collision() {
        let mut s = session();
        let before = Tetromino {
            kind: PieceKind::T,
            orientation: Orientation::North,
            row: 5,
            col: 4,
        };
        s.active = Some(before);

        // Pin the piece: everything outside its footprint is occupied, so a
        // rotation must overlap something.
        for row in 0..FIELD_HEIGHT as i8 {
            for col in 0..FIELD_WIDTH as i8 {
                if !before.occupied_cells().any(|(r, c)| r == row && c == col) {
                    s.field_mut().set(row, col, Some(PieceKind::Z));
                }
            }
        }
        assert!(!s.try_rotate(RotateDirection::Clockwise));
        assert_eq!(s.active().unwrap(), before);
    }

    #[test]
    fn test_fix_writes_all_piece_cells() {
        let mut s = session();
        s.spawn();
        while s.step_down() {}
        let piece = s.active().unwrap();
        let cells: Vec<_> = piece.occupied_cells().collect();

        s.fix();
        assert!(s.active().is_none());
        for (row, col) in cells {
            assert_eq!(s.field().get(row, col), Some(Some(piece.kind)));
        }
    }

    #[test]
    fn test_fix_clears_completed_row_and_scores() {
        let mut s = session();
        let bottom = FIELD_HEIGHT as i8 - 1;
        // Fill the bottom row except where an O piece will land.
        for col in 0..FIELD_WIDTH as i8 {
            if col != 4 && col != 5 {
                s.field_mut().set(bottom, col, Some(PieceKind::I));
                s.field_mut().set(bottom - 1, col, Some(PieceKind::I));
            }
        }

        s.active = Some(Tetromino {
            kind: PieceKind::O,
            orientation: Orientation::North,
            row: bottom - 1,
            col: 4,
        });
        s.fix();

        assert_eq!(s.score(), line_clear_score(2));
        assert_eq!(s.high_score(), s.score());
        // Cleared rows are gone; nothing remains in the bottom rows.
        for col in 0..FIELD_WIDTH as i8 {
            assert_eq!(s.field().get(bottom, col), Some(None));
        }
    }

    #[test]
    fn test_level_and_speed_follow_score() {
        let mut s = session();
        let bottom = FIELD_HEIGHT as i8 - 1;

        // Clear single rows until the level threshold is crossed.
        while s.score() < 600 {
            for col in 0..FIELD_WIDTH as i8 {
                if col != 4 && col != 5 {
                    s.field_mut().set(bottom, col, Some(PieceKind::I));
                    s.field_mut().set(bottom - 1, col, Some(PieceKind::I));
                }
            }
            s.active = Some(Tetromino {
                kind: PieceKind::O,
                orientation: Orientation::North,
                row: bottom - 1,
                col: 4,
            });
            s.fix();
        }

        assert_eq!(s.level(), 2);
        assert_eq!(s.speed_ms(), drop_interval_ms(2));
    }

    #[test]
    fn test_snapshot_is_an_owned_copy() {
        let mut s = session();
        s.spawn();
        let snapshot = s.snapshot();

        // Mutating the session afterwards must not affect the snapshot.
        s.field_mut().set(10, 3, Some(PieceKind::T));
        assert_eq!(snapshot.field[10][3], 0);

        // The preview bitmap carries the next piece's fill marker.
        let marker = s.next_kind().fill();
        assert!(snapshot.next.iter().flatten().any(|&c| c == marker));
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut s = Session::new(1, 4200).unwrap();
        s.spawn();
        s.finish();
        assert!(s.is_game_over());

        s.reset();
        assert!(!s.is_game_over());
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 4200);
        assert_eq!(s.level(), 1);
    }

    #[test]
    fn test_trigger_slot_is_single_entry() {
        let mut s = session();
        s.push_trigger(Trigger::Spawn);
        s.push_trigger(Trigger::GameOver);
        assert_eq!(s.take_trigger(), Some(Trigger::GameOver));
        assert_eq!(s.take_trigger(), None);
    }
}
