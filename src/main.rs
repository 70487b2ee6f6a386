//! Terminal Tetris runner (default binary).
//!
//! Decoded keys and timer expiry both feed the state machine through the
//! controller; this loop only polls, dispatches and redraws.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use brick_tetris::engine::Controller;
use brick_tetris::input::map_key_event;
use brick_tetris::term::{GameView, Screen};

#[derive(Debug, Parser)]
#[command(name = "brick-tetris", about = "Falling-block game for the terminal")]
struct Args {
    /// Piece sequence seed; derived from the clock when omitted.
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, seed);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen, seed: u32) -> Result<()> {
    let mut controller = Controller::new(seed)?;
    let view = GameView::new();

    while !controller.is_terminated() {
        screen.draw(&view.render(&controller.snapshot()))?;

        if event::poll(controller.tick_interval())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = map_key_event(key) {
                        controller.dispatch(action);
                    }
                }
            }
        }

        controller.run_one_tick();
    }
    Ok(())
}

fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
