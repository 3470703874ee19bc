//! View-model snapshots derived from a [`game_core::Level`].
//!
//! Frontends never walk the level directly; they render a [`ViewModel`]
//! through a [`PresentationMapper`] that decides glyphs and styles.
mod map;

pub use map::{MapView, TileView};

use game_core::{Level, Position, Positioned, Tile};

/// Framework-agnostic styling rules.
///
/// Each frontend supplies its own `Style` type (ratatui `Style`, a GUI color,
/// or `()` for plain text).
pub trait PresentationMapper {
    type Style;

    fn render_tile(&self, tile: Tile) -> (char, Self::Style);

    fn render_player(&self) -> (char, Self::Style);

    /// Resolves the glyph for a view cell, giving the player priority over
    /// terrain.
    fn render_cell(&self, cell: &TileView) -> (char, Self::Style) {
        if cell.has_player {
            self.render_player()
        } else {
            self.render_tile(cell.tile)
        }
    }
}

/// Plain-text mapper using the map file glyphs and `@` for the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlyphMapper;

impl GlyphMapper {
    pub const PLAYER_GLYPH: char = '@';
}

impl PresentationMapper for GlyphMapper {
    type Style = ();

    fn render_tile(&self, tile: Tile) -> (char, Self::Style) {
        (tile.glyph(), ())
    }

    fn render_player(&self) -> (char, Self::Style) {
        (Self::PLAYER_GLYPH, ())
    }
}

/// Snapshot of the level for one frame.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub map: MapView,
    pub player: PlayerView,
}

impl ViewModel {
    pub fn from_level(level: &Level) -> Self {
        Self {
            map: MapView::from_level(level),
            player: PlayerView::from_level(level),
        }
    }

    /// Renders the map as text lines, one per row.
    pub fn to_lines<M: PresentationMapper + ?Sized>(&self, mapper: &M) -> Vec<String> {
        self.map
            .tiles
            .iter()
            .map(|row| row.iter().map(|cell| mapper.render_cell(cell).0).collect())
            .collect()
    }
}

/// Player summary shown alongside the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub position: Position,
    /// Tile under the player, `None` once the player has walked off the grid.
    pub standing_on: Option<Tile>,
}

impl PlayerView {
    fn from_level(level: &Level) -> Self {
        let position = level.player().position();
        Self {
            position,
            standing_on: level.tile_at(position),
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.standing_on.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Player, TileGrid};

    fn create_test_level(player: Position) -> Level {
        let mut grid = TileGrid::new(4, 3);
        for x in 0..4 {
            grid.set(Position::new(x, 0), Tile::Wall);
            grid.set(Position::new(x, 2), Tile::Wall);
        }
        grid.set(Position::new(1, 1), Tile::Floor);
        grid.set(Position::new(2, 1), Tile::Door);
        Level::new(grid, Player::new(player))
    }

    #[test]
    fn overlays_player_glyph() {
        let view = ViewModel::from_level(&create_test_level(Position::new(1, 1)));

        assert_eq!(view.to_lines(&GlyphMapper), vec!["####", " @| ", "####"]);
        assert_eq!(view.player.standing_on, Some(Tile::Floor));
        assert_eq!((view.map.width, view.map.height), (4, 3));
        assert_eq!(view.map.tiles.len(), view.map.height as usize);
    }

    #[test]
    fn off_grid_player_is_not_drawn() {
        let view = ViewModel::from_level(&create_test_level(Position::new(7, 1)));

        assert_eq!(view.to_lines(&GlyphMapper), vec!["####", " .| ", "####"]);
        assert!(!view.player.in_bounds());
    }
}
