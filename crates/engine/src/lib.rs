//! Runtime glue: controller, drop timer, high score persistence.

pub mod controller;
pub mod highscore;
pub mod timer;

pub use controller::Controller;
pub use timer::GameTimer;
