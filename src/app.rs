//! The event consumer: feeds events to the reducer and carries out the
//! effects it returns.

use crate::core::GameConfig;
use crate::runner::{update, DashGame, Effect, GameEvent};
use crate::scheduler::Scheduler;
use crate::utils::persistence::HighScoreStore;
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};

/// Anything that can deliver a delayed tick.
pub trait TickSink {
    fn schedule(&self, after: Duration, generation: u64) -> io::Result<()>;
}

impl TickSink for Scheduler {
    fn schedule(&self, after: Duration, generation: u64) -> io::Result<()> {
        Scheduler::schedule(self, after, generation)
    }
}

/// Whether the loop should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<R, S> {
    pub game: DashGame,
    rng: R,
    store: S,
}

impl<R: Rng, S: HighScoreStore> App<R, S> {
    /// Build the game with the stored best distance.
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let high_score = store.load();
        log::info!("starting with high score {}", high_score);
        Self {
            game: DashGame::new(config, high_score),
            rng,
            store,
        }
    }

    /// Request the first tick.
    pub fn start(&mut self, ticks: &impl TickSink) -> io::Result<()> {
        let first = self.game.first_tick();
        self.run_effects(vec![first], ticks).map(|_| ())
    }

    /// Process one event.
    pub fn handle(
        &mut self,
        event: GameEvent,
        now: Instant,
        ticks: &impl TickSink,
    ) -> io::Result<Flow> {
        let effects = update(&mut self.game, event, now, &mut self.rng);
        self.run_effects(effects, ticks)
    }

    fn run_effects(&mut self, effects: Vec<Effect>, ticks: &impl TickSink) -> io::Result<Flow> {
        let mut flow = Flow::Continue;
        for effect in effects {
            match effect {
                Effect::ScheduleTick { after, generation } => ticks.schedule(after, generation)?,
                Effect::SaveHighScore(score) => self.store.save(score),
                Effect::Quit => flow = Flow::Exit,
            }
        }
        Ok(flow)
    }
}
