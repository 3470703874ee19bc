//! Data-driven content loaders.
//!
//! This crate turns text map files into fully resolved [`game_core::Level`]s:
//! - Map parsing (glyph classification, rectangular padding, spawn lookup)
//! - Spawn tile resolution (terrain inferred from neighboring floor)
//!
//! Loading is all-or-nothing: callers either get a level with no
//! unresolved cells or a [`MapError`] describing why the map was rejected.

pub mod loaders;

pub use loaders::{LoadResult, MapError, MapLoader, TileResolver};
