//! Authoritative level state.
//!
//! A [`Level`] is the complete playable state: the static tile grid plus the
//! one player. Loaders build it once; the game loop mutates only the player.
pub mod types;

use crate::env::{MapDimensions, Tile, TileGrid};
pub use types::{Player, Position, Positioned};

/// Tile grid plus the player standing on it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    grid: TileGrid,
    player: Player,
}

impl Level {
    pub fn new(grid: TileGrid, player: Player) -> Self {
        Self { grid, player }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.grid.dimensions()
    }

    pub fn tile_at(&self, position: Position) -> Option<Tile> {
        self.grid.get(position)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// True when no cell still holds [`Tile::Unresolved`].
    pub fn is_resolved(&self) -> bool {
        self.grid.iter().all(|(_, tile)| tile.is_resolved())
    }

    /// True when the player stands on a cell inside the grid.
    pub fn player_in_bounds(&self) -> bool {
        self.grid.contains(self.player.position())
    }
}
