//! Brick Tetris (workspace facade crate).
//!
//! This package keeps a single `brick_tetris::{core,engine,fsm,input,term,types}`
//! public API while the implementation lives in dedicated crates under `crates/`.

pub use brick_tetris_core as core;
pub use brick_tetris_engine as engine;
pub use brick_tetris_fsm as fsm;
pub use brick_tetris_input as input;
pub use brick_tetris_term as term;
pub use brick_tetris_types as types;
