use crate::env::Tile;
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Rectangular grid of tiles stored row-major (`rows[y][x]`).
///
/// Every row has exactly `width` cells. The grid is never resized after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    dimensions: MapDimensions,
    rows: Vec<Vec<Tile>>,
}

impl TileGrid {
    /// Creates a grid of the given size with every cell set to [`Tile::Blank`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            rows: vec![vec![Tile::Blank; width as usize]; height as usize],
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn get(&self, position: Position) -> Option<Tile> {
        self.contains(position)
            .then(|| self.rows[position.y as usize][position.x as usize])
    }

    /// Overwrites the tile at `position`. Returns the previous tile, or `None`
    /// when the position lies outside the grid (nothing is written).
    pub fn set(&mut self, position: Position, tile: Tile) -> Option<Tile> {
        if !self.contains(position) {
            return None;
        }
        let cell = &mut self.rows[position.y as usize][position.x as usize];
        Some(core::mem::replace(cell, tile))
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Iterates every cell in row-major order with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (Position::new(x as i32, y as i32), *tile))
        })
    }

    /// Positions holding `tile`, in row-major order.
    pub fn find(&self, tile: Tile) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |(_, candidate)| *candidate == tile)
            .map(|(position, _)| position)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.find(tile).count()
    }
}
