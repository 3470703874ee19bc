//! Map loading failures.

use std::path::PathBuf;

use game_core::{ErrorSeverity, GameError, Position};

/// Reasons a map could not be turned into a level.
///
/// Every variant aborts loading; no partially built level is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("failed to read map file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map contains no tiles")]
    Empty,

    #[error("invalid map character {ch:?} at {position}")]
    InvalidCharacter { ch: char, position: Position },

    #[error("map has no player spawn marker")]
    MissingPlayer,

    #[error("no floor tile next to spawn marker at {position}")]
    Unresolvable { position: Position },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MapError::Io { .. } => ErrorSeverity::Fatal,
            MapError::Empty
            | MapError::InvalidCharacter { .. }
            | MapError::MissingPlayer
            | MapError::Unresolvable { .. } => ErrorSeverity::Validation,
        }
    }

    fn position(&self) -> Option<Position> {
        match self {
            MapError::InvalidCharacter { position, .. } | MapError::Unresolvable { position } => {
                Some(*position)
            }
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MapError::Io { .. } => "MAP_IO",
            MapError::Empty => "MAP_EMPTY",
            MapError::InvalidCharacter { .. } => "MAP_INVALID_CHARACTER",
            MapError::MissingPlayer => "MAP_MISSING_PLAYER",
            MapError::Unresolvable { .. } => "MAP_UNRESOLVABLE",
        }
    }
}
