//! Static world data: tile kinds and the rectangular grid holding them.
//!
//! The grid is built once while a map loads and is read-only afterwards; the
//! game loop only ever mutates the player.
mod map;
mod tile;

pub use map::{MapDimensions, TileGrid};
pub use tile::Tile;
