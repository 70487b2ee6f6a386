//! Game state table: wires the gameplay states and their callbacks over the
//! generic state machine, with [`Session`] as the shared context.
//!
//! All game flow is declared here as ordered transition lists; the callbacks
//! below only mutate the session and queue follow-up triggers. Unlisted
//! triggers are dropped by the machine, which is how per-state input
//! filtering works: e.g. movement triggers are simply absent from `Idle` and
//! `Pause`.

use brick_tetris_fsm::{FsmError, StateDef, StateMachine};
use brick_tetris_types::{MoveDirection, RotateDirection, StateId, Trigger};

use crate::session::Session;

fn enter_start(session: &mut Session) {
    session.reset();
    session.push_trigger(Trigger::Spawn);
}

fn enter_spawn(session: &mut Session) {
    if !session.spawn() {
        session.push_trigger(Trigger::GameOver);
    }
}

/// One gravity step; a landed piece raises `Collision` so the hub state can
/// lock it in place.
fn gravity_step(session: &mut Session) {
    if !session.step_down() {
        session.push_trigger(Trigger::Collision);
    }
}

/// Transition override for `Collision`: lock the landed piece, then replay
/// spawning through the machine so a full board still reaches `GameOver`.
fn fix_and_respawn(session: &mut Session) {
    session.fix();
    session.push_trigger(Trigger::Spawn);
}

fn enter_move_left(session: &mut Session) {
    session.try_move(MoveDirection::Left);
    session.push_trigger(Trigger::MoveDown);
}

fn enter_move_right(session: &mut Session) {
    session.try_move(MoveDirection::Right);
    session.push_trigger(Trigger::MoveDown);
}

fn enter_rotate(session: &mut Session) {
    session.try_rotate(RotateDirection::Clockwise);
    session.push_trigger(Trigger::MoveDown);
}

fn enter_pause(session: &mut Session) {
    session.set_paused(true);
}

fn exit_pause(session: &mut Session) {
    session.set_paused(false);
}

fn enter_game_over(session: &mut Session) {
    session.finish();
}

/// Builds the gameplay machine. `Idle` is initial; `Terminate` is terminal
/// and reachable from every state.
pub fn build_machine() -> Result<StateMachine<StateId, Trigger, Session>, FsmError> {
    let movement = |state: StateDef<StateId, Trigger, Session>| {
        state
            .transition_with(Trigger::MoveDown, StateId::MoveDown, gravity_step)
            .transition(Trigger::MoveLeft, StateId::MoveLeft)
            .transition(Trigger::MoveRight, StateId::MoveRight)
            .transition(Trigger::Rotate, StateId::Rotate)
            .transition(Trigger::Pause, StateId::Pause)
            .transition(Trigger::GameOver, StateId::GameOver)
            .transition(Trigger::Terminate, StateId::Terminate)
    };

    StateMachine::new(vec![
        StateDef::new(StateId::Idle)
            .transition(Trigger::Start, StateId::Start)
            .transition(Trigger::Terminate, StateId::Terminate),
        StateDef::new(StateId::Start)
            .on_enter(enter_start)
            .transition(Trigger::Spawn, StateId::Spawn)
            .transition(Trigger::Terminate, StateId::Terminate),
        StateDef::new(StateId::Terminate),
        movement(
            StateDef::new(StateId::Spawn)
                .on_enter(enter_spawn)
                .transition(Trigger::Spawn, StateId::Spawn),
        ),
        movement(StateDef::new(StateId::MoveDown))
            .transition_with(Trigger::Collision, StateId::Spawn, fix_and_respawn),
        // MoveUp is in the closed state set but no transition list names the
        // MoveUp trigger, so it is unreachable during play.
        StateDef::new(StateId::MoveUp)
            .transition(Trigger::MoveDown, StateId::MoveDown)
            .transition(Trigger::Terminate, StateId::Terminate),
        StateDef::new(StateId::MoveLeft)
            .on_enter(enter_move_left)
            .transition(Trigger::MoveDown, StateId::MoveDown)
            .transition(Trigger::Terminate, StateId::Terminate),
        StateDef::new(StateId::MoveRight)
            .on_enter(enter_move_right)
            .transition(Trigger::MoveDown, StateId::MoveDown)
            .transition(Trigger::Terminate, StateId::Terminate),
        StateDef::new(StateId::Rotate)
            .on_enter(enter_rotate)
            .transition(Trigger::MoveDown, StateId::MoveDown)
            .transition(Trigger::Terminate, StateId::Terminate),
        StateDef::new(StateId::Pause)
            .on_enter(enter_pause)
            .on_exit(exit_pause)
            .transition(Trigger::Pause, StateId::MoveDown)
            .transition(Trigger::Terminate, StateId::Terminate),
        StateDef::new(StateId::GameOver)
            .on_enter(enter_game_over)
            .transition(Trigger::Start, StateId::Start)
            .transition(Trigger::Terminate, StateId::Terminate),
    ])
}
