use std::time::Duration;

use mineboard_core::{BoardSnapshot, GameConfig, GameEngine, GameStatus, Result};
use web_time::Instant;

use crate::command::Command;

/// Wall-clock timer that runs while the game is `Playing`.
///
/// Purely presentational, the engine never sees it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl Stopwatch {
    pub fn update(&mut self, status: GameStatus, now: Instant) {
        match status {
            GameStatus::NotStarted => *self = Self::default(),
            GameStatus::Playing => {
                self.started_at.get_or_insert(now);
            }
            GameStatus::Won | GameStatus::Lost => {
                // a first click can win outright
                let started = *self.started_at.get_or_insert(now);
                self.ended_at.get_or_insert(now.max(started));
            }
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self.ended_at.unwrap_or(now).saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }
}

/// One player's run of games with a fixed configuration.
pub struct Session {
    engine: GameEngine,
    config: GameConfig,
    stopwatch: Stopwatch,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Ok(Self {
            engine: GameEngine::new(config, seed)?,
            config,
            stopwatch: Stopwatch::default(),
        })
    }

    /// Applies a move and reports whether the board needs redrawing.
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        let changed = match command {
            Command::Reveal(coords) => self.engine.reveal(coords)?.has_update(),
            Command::Flag(coords) => self.engine.toggle_flag(coords)?.has_update(),
            Command::NewGame => {
                self.engine.reset(self.config)?;
                true
            }
            Command::Help | Command::Quit => false,
        };
        self.stopwatch.update(self.engine.status(), Instant::now());
        Ok(changed)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.engine.snapshot()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed(Instant::now()).as_secs()
    }

    pub fn seed(&self) -> u64 {
        self.engine.generator().seed()
    }
}
