//! Top-level client wiring a loaded level to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Level (produced by game-content from a map file)
//!   └─→ Frontend (UI layer implementing game_core::GameUi)
//! ```
//!
//! The client owns neither rendering nor rules: `run` hands both pieces to
//! the game-core loop and returns once the player quits.

mod builder;
pub mod config;

pub use builder::ClientBuilder;
pub use config::ClientConfig;

use anyhow::Result;
use game_core::{GameUi, Level, LoopSummary};

/// Top-level client container.
pub struct Client {
    level: Level,
    frontend: Box<dyn GameUi<Error = anyhow::Error>>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Run the game loop until the frontend reports a quit.
    ///
    /// # Errors
    ///
    /// Returns the first draw or input error raised by the frontend.
    pub fn run(self) -> Result<LoopSummary> {
        let Client {
            level,
            mut frontend,
        } = self;

        let summary = game_core::run(level, &mut *frontend)?;

        tracing::info!(
            "Session finished after {} turns at {}",
            summary.turns,
            summary.final_position
        );
        Ok(summary)
    }
}
