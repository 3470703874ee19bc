//! Map data loader.
//!
//! Map files are plain text, one grid row per line:
//!
//! ```text
//! #####
//! #P..#
//! ##|##
//! ```
//!
//! `#` is a wall, `.` a floor, `|` a door, whitespace is blank, and `P` marks
//! the player spawn. Rows shorter than the longest line are padded with blank
//! tiles. Any other character rejects the whole map.

use std::path::Path;

use game_core::{Level, Player, Position, Positioned, Tile, TileGrid};

use crate::loaders::{LoadResult, MapError, TileResolver, read_file};

/// Loader for levels from text map files.
pub struct MapLoader;

impl MapLoader {
    /// Load a level from a map file.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Io`] if the file cannot be read, or any parse or
    /// resolution error produced by [`MapLoader::parse`].
    pub fn load(path: &Path) -> LoadResult<Level> {
        tracing::debug!(path = %path.display(), "loading map");
        let content = read_file(path)?;
        let level = Self::parse(&content)?;

        tracing::info!(
            path = %path.display(),
            width = level.dimensions().width,
            height = level.dimensions().height,
            player = %level.player().position(),
            "map loaded"
        );
        Ok(level)
    }

    /// Parse map text. Lines are split on `\n` or `\r\n`; a trailing newline
    /// does not add a row.
    pub fn parse(content: &str) -> LoadResult<Level> {
        Self::from_lines(content.lines())
    }

    /// Build a level from an ordered sequence of rows.
    ///
    /// The grid is `lines × longest line` (in characters). Spawn markers are
    /// resolved to concrete terrain before the level is returned.
    pub fn from_lines<I, S>(lines: I) -> LoadResult<Level>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        let longest_row = lines
            .iter()
            .map(|line| line.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        if longest_row == 0 {
            return Err(MapError::Empty);
        }

        let mut grid = TileGrid::new(longest_row as u32, lines.len() as u32);
        let mut spawn: Option<Position> = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.as_ref().chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let tile = Tile::from_glyph(ch)
                    .ok_or(MapError::InvalidCharacter { ch, position })?;

                if tile == Tile::Unresolved {
                    if let Some(previous) = spawn.replace(position) {
                        tracing::warn!(
                            %previous,
                            current = %position,
                            "multiple spawn markers, keeping the last one"
                        );
                    }
                }

                grid.set(position, tile);
            }
        }

        let start = spawn.ok_or(MapError::MissingPlayer)?;
        let resolved = TileResolver::resolve(&mut grid)?;

        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            resolved,
            start = %start,
            "map parsed"
        );

        Ok(Level::new(grid, Player::new(start)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_map() {
        let level = MapLoader::from_lines(["#####", "#P..#", "#####"]).unwrap();

        assert_eq!(level.dimensions().height, 3);
        assert_eq!(level.dimensions().width, 5);
        assert_eq!(level.player().position(), Position::new(1, 1));
        assert_eq!(level.tile_at(Position::new(1, 1)), Some(Tile::Floor));
        assert!(level.grid().rows()[0].iter().all(|t| *t == Tile::Wall));
        assert!(level.grid().rows()[2].iter().all(|t| *t == Tile::Wall));
    }

    #[test]
    fn pads_short_rows_with_blank() {
        let level = MapLoader::parse("#######\n#P.#\n##|\n").unwrap();

        assert_eq!(level.dimensions().width, 7);
        assert_eq!(level.dimensions().height, 3);
        assert!(level.grid().rows().iter().all(|row| row.len() == 7));
        assert_eq!(level.tile_at(Position::new(4, 1)), Some(Tile::Blank));
        assert_eq!(level.tile_at(Position::new(2, 2)), Some(Tile::Door));
        assert_eq!(level.tile_at(Position::new(6, 2)), Some(Tile::Blank));
    }

    #[test]
    fn whitespace_becomes_blank() {
        let level = MapLoader::parse("  \t#\r\n P.\r\n").unwrap();

        assert_eq!(level.tile_at(Position::new(0, 0)), Some(Tile::Blank));
        assert_eq!(level.tile_at(Position::new(2, 0)), Some(Tile::Blank));
        assert_eq!(level.tile_at(Position::new(3, 0)), Some(Tile::Wall));
        assert_eq!(level.player().position(), Position::new(1, 1));
    }

    #[test]
    fn rejects_invalid_character() {
        let err = MapLoader::from_lines(["###", "#P?", "###"]).unwrap_err();

        assert!(matches!(
            err,
            MapError::InvalidCharacter { ch: '?', position } if position == Position::new(2, 1)
        ));
    }

    #[test]
    fn rejects_empty_map() {
        assert!(matches!(MapLoader::parse(""), Err(MapError::Empty)));
        assert!(matches!(MapLoader::from_lines(["", ""]), Err(MapError::Empty)));
    }

    #[test]
    fn rejects_map_without_spawn() {
        assert!(matches!(
            MapLoader::parse("###\n#.#\n###"),
            Err(MapError::MissingPlayer)
        ));
    }

    #[test]
    fn last_spawn_marker_wins() {
        let level = MapLoader::parse("P..\n..P").unwrap();

        assert_eq!(level.player().position(), Position::new(2, 1));
        assert_eq!(level.tile_at(Position::new(0, 0)), Some(Tile::Floor));
        assert!(level.is_resolved());
    }

    #[test]
    fn no_unresolved_tiles_survive_loading() {
        let level = MapLoader::parse("#####\n#.P.#\n#|..#\n#P..#\n#####").unwrap();

        assert!(level.is_resolved());
        assert_eq!(level.grid().count(Tile::Unresolved), 0);
        assert!(level.player_in_bounds());
    }
}
