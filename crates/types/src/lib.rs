//! Shared game vocabulary: dimensions, piece kinds, directions, actions,
//! triggers and state ids.
//!
//! This crate is pure data with no dependencies so every other crate can use
//! it without pulling anything else in.

/// Canonical field dimensions: 20 rows by 10 columns.
pub const FIELD_HEIGHT: usize = 20;
pub const FIELD_WIDTH: usize = 10;

/// Upper bounds accepted by the field allocator.
pub const MAX_FIELD_HEIGHT: usize = 20;
pub const MAX_FIELD_WIDTH: usize = 10;

/// Side length of the next-piece preview grid (large enough for any piece).
pub const PREVIEW_SIDE: usize = 4;

/// Input poll granularity of the main loop, in milliseconds.
pub const TICK_MS: u64 = 16;

/// Points awarded per simultaneous line clear, indexed by cleared-row count.
/// Multi-row clears reward more than the sum of single clears.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Score needed to advance one level.
pub const LEVEL_STEP_POINTS: u32 = 600;

/// Levels run 1 through `MAX_LEVEL`.
pub const MAX_LEVEL: u32 = 10;

/// Automatic drop interval per level (level 1 first). Non-increasing.
pub const DROP_INTERVALS_MS: [u64; MAX_LEVEL as usize] =
    [600, 550, 500, 450, 400, 350, 300, 250, 200, 150];

/// Tetramino kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Catalog index (0..7).
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Nonzero fill marker written into field cells and snapshots.
    pub fn fill(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Quarter-turn orientations of a piece bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub fn index(self) -> i32 {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// True-modulo lookup: any integer maps onto the four orientations,
    /// negatives included.
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Orientation::North,
            1 => Orientation::East,
            2 => Orientation::South,
            _ => Orientation::West,
        }
    }

    pub fn rotated(self, direction: RotateDirection) -> Self {
        Self::from_index(self.index() + direction.delta())
    }
}

/// Rotation sense for piece turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    pub fn delta(self) -> i32 {
        match self {
            RotateDirection::Clockwise => 1,
            RotateDirection::CounterClockwise => -1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            RotateDirection::Clockwise => RotateDirection::CounterClockwise,
            RotateDirection::CounterClockwise => RotateDirection::Clockwise,
        }
    }
}

/// Single-step movement of the active piece. `Up` is the inverse correction
/// used to undo an illegal downward move; it is never player-reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Down,
    Up,
    Left,
    Right,
}

impl MoveDirection {
    pub fn inverse(self) -> Self {
        match self {
            MoveDirection::Down => MoveDirection::Up,
            MoveDirection::Up => MoveDirection::Down,
            MoveDirection::Left => MoveDirection::Right,
            MoveDirection::Right => MoveDirection::Left,
        }
    }

    pub fn row_delta(self) -> i8 {
        match self {
            MoveDirection::Down => 1,
            MoveDirection::Up => -1,
            MoveDirection::Left | MoveDirection::Right => 0,
        }
    }

    pub fn col_delta(self) -> i8 {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
            MoveDirection::Down | MoveDirection::Up => 0,
        }
    }
}

/// Discrete user actions delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Start,
    Pause,
    Terminate,
    Left,
    Right,
    Up,
    Down,
    Rotate,
}

/// Events fed into the state machine: user actions after dispatch, plus
/// internal signals raised by state callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    Spawn,
    MoveDown,
    MoveUp,
    MoveLeft,
    MoveRight,
    Rotate,
    Pause,
    Collision,
    GameOver,
    Terminate,
}

/// The closed set of game states. `Idle` is initial, `Terminate` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateId {
    Idle,
    Start,
    Terminate,
    Spawn,
    MoveDown,
    MoveUp,
    MoveLeft,
    MoveRight,
    Rotate,
    Pause,
    GameOver,
}

/// Field cell: empty or filled by a locked piece.
pub type Cell = Option<PieceKind>;
