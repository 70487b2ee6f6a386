//! Terminal presentation: pure snapshot-to-lines view plus the raw-mode
//! screen session that flushes it.

pub mod game_view;
pub mod screen;

pub use game_view::GameView;
pub use screen::Screen;
