//! Game model: field, piece catalog, session state and the gameplay state
//! table. Everything here is pure logic with no terminal or timing concerns,
//! so all of it is exercisable from plain unit tests.

pub mod field;
pub mod machine;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod tetromino;

pub use field::{Field, FieldError};
pub use machine::build_machine;
pub use pieces::{shape, PieceShape, CATALOG};
pub use rng::PieceRng;
pub use scoring::{drop_interval_ms, level_for_score, line_clear_score};
pub use session::Session;
pub use snapshot::GameSnapshot;
pub use tetromino::Tetromino;
