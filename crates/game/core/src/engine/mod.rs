//! Turn loop driving the level through an injected rendering capability.
//!
//! The [`GameLoop`] owns the [`Level`] for its whole lifetime. Each iteration
//! draws the level, blocks on one input, and either terminates (on
//! [`Input::Quit`]) or applies the input to the player. There is no other
//! suspension point and no concurrency: the level is lent to the frontend for
//! the duration of a single draw call only.

mod ui;

pub use ui::GameUi;

use crate::action::{Input, apply_input};
use crate::state::{Level, Position, Positioned};

/// Loop state machine. `Terminated` is final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LoopState {
    Running,
    Terminated,
}

/// Outcome reported once the loop terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopSummary {
    /// Number of non-quit inputs applied (including no-op inputs).
    pub turns: u64,
    pub final_position: Position,
}

/// Single-player turn loop.
pub struct GameLoop {
    level: Level,
    state: LoopState,
    turns: u64,
}

impl GameLoop {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            state: LoopState::Running,
            turns: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn into_level(self) -> Level {
        self.level
    }

    pub fn summary(&self) -> LoopSummary {
        LoopSummary {
            turns: self.turns,
            final_position: self.level.player().position(),
        }
    }

    /// Runs one iteration: draw, read input, then terminate or apply it.
    ///
    /// Once terminated, further calls return immediately without touching the
    /// frontend.
    pub fn step<U: GameUi + ?Sized>(&mut self, ui: &mut U) -> Result<LoopState, U::Error> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        ui.draw(&self.level)?;
        let input: Input = ui.input()?;

        if input.is_quit() {
            tracing::info!(turns = self.turns, "quit requested");
            self.state = LoopState::Terminated;
            return Ok(self.state);
        }

        apply_input(self.level.player_mut(), input);
        self.turns += 1;
        Ok(self.state)
    }

    /// Runs until the frontend reports [`Input::Quit`].
    ///
    /// Frontend errors abort the loop and are returned unchanged.
    pub fn run<U: GameUi + ?Sized>(&mut self, ui: &mut U) -> Result<LoopSummary, U::Error> {
        tracing::info!(
            width = self.level.dimensions().width,
            height = self.level.dimensions().height,
            player = %self.level.player().position(),
            "game loop starting"
        );

        while self.step(ui)? == LoopState::Running {}

        let summary = self.summary();
        tracing::info!(
            turns = summary.turns,
            position = %summary.final_position,
            "game loop terminated"
        );
        Ok(summary)
    }
}

/// Convenience wrapper: builds a [`GameLoop`] around `level` and runs it.
pub fn run<U: GameUi + ?Sized>(level: Level, ui: &mut U) -> Result<LoopSummary, U::Error> {
    GameLoop::new(level).run(ui)
}
