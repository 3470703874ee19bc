use std::io::Write;
use std::path::Path;

use game_content::{MapError, MapLoader};
use game_core::{GameError, Position, Positioned, Tile};

fn write_map(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write map");
    file.flush().expect("flush map");
    file
}

#[test]
fn loads_level_from_disk() {
    let file = write_map("#####\n#P..#\n#####\n");

    let level = MapLoader::load(file.path()).expect("map should load");

    assert_eq!(level.dimensions().width, 5);
    assert_eq!(level.dimensions().height, 3);
    assert_eq!(level.player().position(), Position::new(1, 1));
    assert_eq!(level.tile_at(Position::new(1, 1)), Some(Tile::Floor));
    assert!(level.is_resolved());
}

#[test]
fn every_row_matches_longest_line() {
    let file = write_map("##########\n#P.|\n#...#\n\n##");

    let level = MapLoader::load(file.path()).expect("map should load");

    assert_eq!(level.dimensions().height, 5);
    assert!(level.grid().rows().iter().all(|row| row.len() == 10));
    assert!(level.grid().rows()[3].iter().all(|tile| *tile == Tile::Blank));
}

#[test]
fn bundled_map_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../maps/level1.map");

    let level = MapLoader::load(&path).expect("bundled map should load");

    assert!(level.is_resolved());
    assert!(level.player_in_bounds());
    assert_eq!(
        level.tile_at(level.player().position()),
        Some(Tile::Floor)
    );
}

#[test]
fn missing_file_is_fatal_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nowhere.map");

    let err = MapLoader::load(&path).unwrap_err();

    assert!(matches!(err, MapError::Io { .. }));
    assert!(!err.severity().is_validation());
    assert!(err.to_string().contains("nowhere.map"));
}

#[test]
fn invalid_character_produces_no_level() {
    let file = write_map("#####\n#P.?#\n#####\n");

    let err = MapLoader::load(file.path()).unwrap_err();

    assert!(matches!(err, MapError::InvalidCharacter { ch: '?', .. }));
    assert_eq!(err.position(), Some(Position::new(3, 1)));
}
