/// Semantic kind of a single grid cell.
///
/// `Unresolved` marks a cell whose terrain was hidden behind a non-terrain
/// glyph (the player spawn marker). It only exists while a map is loading;
/// a fully loaded level never contains it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    Wall,
    Floor,
    Door,
    /// Whitespace or padding beyond the end of a short line.
    #[default]
    Blank,
    /// Transient placeholder for the spawn marker.
    Unresolved,
}

impl Tile {
    pub const WALL_GLYPH: char = '#';
    pub const FLOOR_GLYPH: char = '.';
    pub const DOOR_GLYPH: char = '|';
    pub const SPAWN_GLYPH: char = 'P';

    /// Classifies a map glyph. Returns `None` for characters with no meaning
    /// in the map format.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' | '\t' | '\n' | '\r' => Some(Self::Blank),
            Self::WALL_GLYPH => Some(Self::Wall),
            Self::FLOOR_GLYPH => Some(Self::Floor),
            Self::DOOR_GLYPH => Some(Self::Door),
            Self::SPAWN_GLYPH => Some(Self::Unresolved),
            _ => None,
        }
    }

    /// Canonical glyph used for this tile in map files.
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => Self::WALL_GLYPH,
            Self::Floor => Self::FLOOR_GLYPH,
            Self::Door => Self::DOOR_GLYPH,
            Self::Blank => ' ',
            Self::Unresolved => Self::SPAWN_GLYPH,
        }
    }

    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn classifies_map_glyphs() {
        assert_eq!(Tile::from_glyph('#'), Some(Tile::Wall));
        assert_eq!(Tile::from_glyph('.'), Some(Tile::Floor));
        assert_eq!(Tile::from_glyph('|'), Some(Tile::Door));
        assert_eq!(Tile::from_glyph('P'), Some(Tile::Unresolved));
        for ch in [' ', '\t', '\n', '\r'] {
            assert_eq!(Tile::from_glyph(ch), Some(Tile::Blank));
        }
    }

    #[test]
    fn rejects_unknown_glyphs() {
        assert_eq!(Tile::from_glyph('?'), None);
        assert_eq!(Tile::from_glyph('p'), None);
        assert_eq!(Tile::from_glyph('@'), None);
    }

    #[test]
    fn glyph_classification_is_consistent() {
        for tile in Tile::iter() {
            assert_eq!(Tile::from_glyph(tile.glyph()), Some(tile));
        }
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(Tile::Unresolved.to_string(), "unresolved");
        assert_eq!(Tile::Wall.as_ref(), "wall");
    }
}
