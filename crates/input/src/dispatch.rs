//! Player-action to trigger dispatch.

use brick_tetris_types::{Trigger, UserAction};

/// Total mapping from player actions to machine triggers. Filtering happens
/// in the state table, not here: an action always produces a trigger, and
/// states that do not list it drop it.
pub fn dispatch(action: UserAction) -> Trigger {
    match action {
        UserAction::Start => Trigger::Start,
        UserAction::Pause => Trigger::Pause,
        UserAction::Terminate => Trigger::Terminate,
        UserAction::Left => Trigger::MoveLeft,
        UserAction::Right => Trigger::MoveRight,
        UserAction::Up => Trigger::MoveUp,
        UserAction::Down => Trigger::MoveDown,
        UserAction::Rotate => Trigger::Rotate,
    }
}
