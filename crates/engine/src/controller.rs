//! Game controller: owns the session and the state machine, converts timer
//! expiry and player actions into triggers, and drains the trigger queue
//! after every step.

use std::time::Duration;

use anyhow::Result;

use brick_tetris_core::{build_machine, GameSnapshot, Session};
use brick_tetris_fsm::StateMachine;
use brick_tetris_input::dispatch;
use brick_tetris_types::{StateId, Trigger, UserAction, TICK_MS};

use crate::highscore;
use crate::timer::GameTimer;

pub struct Controller {
    machine: StateMachine<StateId, Trigger, Session>,
    session: Session,
    timer: GameTimer,
    score_saved: bool,
}

impl Controller {
    pub fn new(seed: u32) -> Result<Self> {
        let session = Session::new(seed, highscore::load())?;
        let timer = GameTimer::new(Duration::from_millis(session.speed_ms()));
        Ok(Self {
            machine: build_machine()?,
            session,
            timer,
            score_saved: false,
        })
    }

    /// Feeds a player action through the machine. Actions the current state
    /// does not list are dropped by the machine.
    pub fn dispatch(&mut self, action: UserAction) {
        self.process(dispatch(action));
    }

    /// One frame: run the current state's update hook, fire gravity if the
    /// drop interval has elapsed, then bring the timer and persistence in
    /// line with the session.
    pub fn run_one_tick(&mut self) {
        self.machine.update(&mut self.session);
        if self.timer.expired() {
            self.process(Trigger::MoveDown);
        }
        self.sync();
    }

    fn process(&mut self, trigger: Trigger) {
        self.machine.process_trigger(trigger, &mut self.session);
        while let Some(follow_up) = self.session.take_trigger() {
            self.machine.process_trigger(follow_up, &mut self.session);
        }
        self.sync();
    }

    /// Mirrors session state into the timer and saves the high score once on
    /// the game-over edge.
    fn sync(&mut self) {
        self.timer.set_paused(self.session.is_paused());
        self.timer
            .set_interval(Duration::from_millis(self.session.speed_ms()));

        if self.session.is_game_over() {
            if !self.score_saved {
                self.score_saved = true;
                // Losing the score file never interrupts play.
                let _ = highscore::save(self.session.high_score());
            }
        } else {
            self.score_saved = false;
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.machine.current() == StateId::Terminate
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// Input poll timeout for the render loop.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(TICK_MS)
    }

    #[cfg(test)]
    pub fn force_gravity(&mut self) {
        self.timer.force_expire();
        self.run_one_tick();
    }
}
