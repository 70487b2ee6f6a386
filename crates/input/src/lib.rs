//! Input edge: terminal key decoding and action-to-trigger dispatch.

pub mod dispatch;
pub mod map;

pub use dispatch::dispatch;
pub use map::map_key_event;
