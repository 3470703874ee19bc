//! Content loaders for reading game data from files.
//!
//! [`MapLoader`] parses map text into a grid and hands it to
//! [`TileResolver`] before returning a level.

pub mod error;
pub mod map;
pub mod resolve;

pub use error::MapError;
pub use map::MapLoader;
pub use resolve::TileResolver;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, MapError>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })
}
