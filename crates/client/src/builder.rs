//! Client builder with dependency injection pattern.

use crate::Client;
use anyhow::{Context, Result};
use game_core::{GameUi, Level};

/// Builder for constructing a Client with proper validation.
///
/// Both the level and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    level: Option<Level>,
    frontend: Option<Box<dyn GameUi<Error = anyhow::Error>>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level to play (required).
    ///
    /// Usually produced by `game_content::MapLoader`.
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl GameUi<Error = anyhow::Error> + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the level or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let level = self
            .level
            .context("Level is required. Use .level() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { level, frontend })
    }
}
