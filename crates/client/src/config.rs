//! Client-level configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Map file loaded when `DUNGEON_MAP_PATH` is unset.
pub const DEFAULT_MAP_PATH: &str = "maps/level1.map";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Path of the map file to play.
    pub map_path: PathBuf,
    /// Log session name; a timestamped one is generated when `None`.
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_MAP_PATH` - Map file to load (default: `maps/level1.map`)
    /// - `DUNGEON_SESSION_ID` - Log session name (default: `session_<timestamp>`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env_string("DUNGEON_MAP_PATH") {
            config.map_path = PathBuf::from(path);
        }
        config.session_id = read_env_string("DUNGEON_SESSION_ID");

        config
    }
}

fn read_env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
