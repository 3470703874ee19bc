//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Show the player's grid coordinates in the status header.
    pub show_coordinates: bool,
    /// Show the name of the tile under the player in the status header.
    pub show_tile_under_player: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            show_coordinates: true,
            show_tile_under_player: true,
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SHOW_COORDINATES` - Show player coordinates (default: true)
    /// - `SHOW_TILE_UNDER_PLAYER` - Show the tile under the player (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(show) = read_env_bool("SHOW_COORDINATES") {
            config.show_coordinates = show;
        }
        if let Some(show) = read_env_bool("SHOW_TILE_UNDER_PLAYER") {
            config.show_tile_under_player = show;
        }

        config
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    env::var(key).ok().as_deref().and_then(parse_bool)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
