mod common;

use common::{build_test_world, read_lines};
use hexworld_gen::flush::{flush_to_jsonl, list_worlds, load_world, save_world};
use hexworld_gen::model::{Cell, HexCoord, Race, RaceCatalog, SettlementKind, Terrain};
use hexworld_gen::names::NamingConfig;
use hexworld_gen::worldgen::{WorldGenConfig, generate_world};
use hexworld_gen::{World, WorldError};

#[test]
fn save_and_load_reproduce_world() {
    let world = build_test_world();
    let dir = tempfile::tempdir().unwrap();

    let path = save_world(&world, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "test_world.json");

    let loaded = load_world(&path).unwrap();
    assert_eq!(loaded, world, "loaded world should match saved world");
}

#[test]
fn serde_round_trip_is_lossless() {
    let world = build_test_world();
    let json = serde_json::to_string(&world).unwrap();
    let back: World = serde_json::from_str(&json).unwrap();
    assert_eq!(back.cells, world.cells);
    assert_eq!(back.created_at, world.created_at);
}

#[test]
fn settlement_races_survive_a_save() {
    let mut races = RaceCatalog::default();
    races.races.insert(
        "dwarf".to_string(),
        Race {
            name: "Dwarf".to_string(),
            preferred_terrain: vec![Terrain::Forests],
            settlement_types: vec![SettlementKind::Town],
        },
    );
    let config = WorldGenConfig {
        width: 8,
        height: 8,
        palette: vec![Terrain::Plains, Terrain::Forests],
        settlement_density: 0.5,
        races,
        ..WorldGenConfig::default()
    }
    .with_seed(17);
    let world = generate_world(&config, &NamingConfig::default()).unwrap();
    for (coord, settlement) in world.settlements() {
        let terrain = world.cell(coord).unwrap().terrain;
        match terrain {
            Terrain::Forests => {
                assert_eq!(settlement.race, "dwarf");
                assert_eq!(settlement.kind, SettlementKind::Town);
            }
            _ => assert_eq!(settlement.race, "human"),
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let loaded = load_world(&save_world(&world, dir.path()).unwrap()).unwrap();
    let races: Vec<(HexCoord, String)> = loaded
        .settlements()
        .map(|(coord, s)| (coord, s.race.clone()))
        .collect();
    let expected: Vec<(HexCoord, String)> = world
        .settlements()
        .map(|(coord, s)| (coord, s.race.clone()))
        .collect();
    assert!(!expected.is_empty());
    assert_eq!(races, expected);
}

#[test]
fn incomplete_snapshot_rejected() {
    let mut world = build_test_world();
    world.cells.remove(&HexCoord::new(0, 0));
    let dir = tempfile::tempdir().unwrap();
    let path = save_world(&world, dir.path()).unwrap();
    assert!(matches!(load_world(&path), Err(WorldError::IncompleteWorld(_))));
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(load_world(&path), Err(WorldError::Serialization(_))));
    assert!(matches!(
        load_world(&dir.path().join("missing.json")),
        Err(WorldError::Io(_))
    ));
}

#[test]
fn list_worlds_sorted_json_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut world = build_test_world();
    world.name = "Zeta".to_string();
    save_world(&world, dir.path()).unwrap();
    world.name = "Alpha Realm".to_string();
    save_world(&world, dir.path()).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

    let names: Vec<String> = list_worlds(dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["alpha_realm.json", "zeta.json"]);

    assert!(list_worlds(&dir.path().join("nowhere")).unwrap().is_empty());
}

#[test]
fn jsonl_export_has_one_line_per_cell() {
    let world = build_test_world();
    let dir = tempfile::tempdir().unwrap();

    flush_to_jsonl(&world, dir.path()).unwrap();

    let header: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("world.json")).unwrap())
            .unwrap();
    assert_eq!(header["name"], "Test World");
    assert_eq!(header["cell_count"], world.cells.len() as u64);
    assert!(header.get("cells").is_none());

    let lines = read_lines(&dir.path().join("cells.jsonl"));
    assert_eq!(lines.len(), world.cells.len());
    for line in &lines {
        let cell: Cell = serde_json::from_str(line).unwrap();
        assert_eq!(world.cell(cell.coord), Some(&cell));
    }
}
