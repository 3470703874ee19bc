//! Spawn tile resolution.
//!
//! The spawn marker carries no terrain of its own, so the terrain under it is
//! inferred from the surrounding 3×3 window: if any neighbor is a floor, the
//! marker becomes floor. The window is clamped to the grid on both axes
//! independently, so markers on an edge or corner of a non-square map are
//! handled the same way as interior ones.

use game_core::{Position, Tile, TileGrid};

use crate::loaders::{LoadResult, MapError};

/// Rewrites every [`Tile::Unresolved`] cell into concrete terrain.
pub struct TileResolver;

impl TileResolver {
    /// Resolve all pending cells in row-major order.
    ///
    /// Cells are rewritten in place, so a marker resolved earlier counts as a
    /// floor neighbor for markers scanned after it.
    ///
    /// Returns the number of cells resolved.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Unresolvable`] for the first pending cell with no
    /// floor neighbor. The grid must then be discarded.
    pub fn resolve(grid: &mut TileGrid) -> LoadResult<usize> {
        let pending: Vec<Position> = grid.find(Tile::Unresolved).collect();

        for &position in &pending {
            let has_floor = Self::neighbors(grid, position).any(|(_, tile)| tile == Tile::Floor);
            if !has_floor {
                return Err(MapError::Unresolvable { position });
            }

            grid.set(position, Tile::Floor);
            tracing::trace!(%position, "spawn tile resolved to floor");
        }

        Ok(pending.len())
    }

    /// Cells around `center` in scan order (row by row, then column by
    /// column), clamped to the grid and excluding `center` itself.
    pub fn neighbors(
        grid: &TileGrid,
        center: Position,
    ) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let max_x = grid.width() as i32 - 1;
        let max_y = grid.height() as i32 - 1;

        let min_col = (center.x - 1).max(0);
        let max_col = (center.x + 1).min(max_x);
        let min_row = (center.y - 1).max(0);
        let max_row = (center.y + 1).min(max_y);

        (min_row..=max_row)
            .flat_map(move |y| (min_col..=max_col).map(move |x| Position::new(x, y)))
            .filter(move |position| *position != center)
            .filter_map(move |position| grid.get(position).map(|tile| (position, tile)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> TileGrid {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut grid = TileGrid::new(width as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let tile = Tile::from_glyph(ch).expect("test glyph");
                grid.set(Position::new(x as i32, y as i32), tile);
            }
        }
        grid
    }

    #[test]
    fn interior_marker_has_eight_neighbors() {
        let grid = grid_from(&["###", "#P#", "###"]);
        let neighbors: Vec<_> = TileResolver::neighbors(&grid, Position::new(1, 1)).collect();

        assert_eq!(neighbors.len(), 8);
        assert_eq!(neighbors[0].0, Position::new(0, 0));
        assert_eq!(neighbors[1].0, Position::new(1, 0));
        assert_eq!(neighbors[3].0, Position::new(0, 1));
        assert_eq!(neighbors[7].0, Position::new(2, 2));
    }

    #[test]
    fn corner_window_is_clamped() {
        let grid = grid_from(&["P.", "##"]);
        let neighbors: Vec<_> = TileResolver::neighbors(&grid, Position::new(0, 0))
            .map(|(position, _)| position)
            .collect();

        assert_eq!(
            neighbors,
            vec![Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn resolves_markers_on_every_edge() {
        let mut grid = grid_from(&["P.....P", ".......", "P.....P"]);

        assert_eq!(TileResolver::resolve(&mut grid).unwrap(), 4);
        assert_eq!(grid.count(Tile::Unresolved), 0);
        assert_eq!(grid.get(Position::new(6, 2)), Some(Tile::Floor));
    }

    #[test]
    fn handles_tall_narrow_grids() {
        // Width 1, height 4: a swapped x/y scan would index past the columns.
        let mut grid = grid_from(&["#", ".", "P", "#"]);

        assert_eq!(TileResolver::resolve(&mut grid).unwrap(), 1);
        assert_eq!(grid.get(Position::new(0, 2)), Some(Tile::Floor));
    }

    #[test]
    fn diagonal_floor_counts() {
        let mut grid = grid_from(&["##.", "#P#", "###"]);

        TileResolver::resolve(&mut grid).unwrap();
        assert_eq!(grid.get(Position::new(1, 1)), Some(Tile::Floor));
    }

    #[test]
    fn fails_without_floor_neighbor() {
        let mut grid = grid_from(&["###", "#P|", "###"]);

        let err = TileResolver::resolve(&mut grid).unwrap_err();
        assert!(matches!(
            err,
            MapError::Unresolvable { position } if position == Position::new(1, 1)
        ));
    }

    #[test]
    fn earlier_resolution_feeds_later_markers() {
        let mut grid = grid_from(&["#####", "#.PP#", "#####"]);

        assert_eq!(TileResolver::resolve(&mut grid).unwrap(), 2);
        assert_eq!(grid.get(Position::new(3, 1)), Some(Tile::Floor));
    }

    #[test]
    fn leaves_other_tiles_untouched() {
        let mut grid = grid_from(&["#|#", ".P ", "###"]);
        let before = grid.clone();

        TileResolver::resolve(&mut grid).unwrap();

        for (position, tile) in before.iter() {
            if position != Position::new(1, 1) {
                assert_eq!(grid.get(position), Some(tile));
            }
        }
    }
}
