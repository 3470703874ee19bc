//! Map view types for 2D grid rendering.

use game_core::{Level, Position, Positioned, Tile};

/// 2D map view optimized for grid rendering.
#[derive(Clone, Debug)]
pub struct MapView {
    pub width: u32,
    pub height: u32,
    /// Tiles in row-major order, top row (`y = 0`) first.
    pub tiles: Vec<Vec<TileView>>,
}

impl MapView {
    pub fn from_level(level: &Level) -> Self {
        let dimensions = level.dimensions();
        let player = level.player().position();

        let tiles = level
            .grid()
            .rows()
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, tile)| {
                        let position = Position::new(x as i32, y as i32);
                        TileView {
                            position,
                            tile: *tile,
                            has_player: position == player,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            width: dimensions.width,
            height: dimensions.height,
            tiles,
        }
    }
}

/// Single tile in the map view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileView {
    pub position: Position,
    pub tile: Tile,
    pub has_player: bool,
}
