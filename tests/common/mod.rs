#![allow(dead_code)]

use hexworld_gen::model::{Terrain, World};
use hexworld_gen::names::NamingConfig;
use hexworld_gen::worldgen::{WorldGenConfig, generate_world};

pub fn config(width: u32, height: u32, palette: &[Terrain], seed: u64) -> WorldGenConfig {
    WorldGenConfig {
        width,
        height,
        palette: palette.to_vec(),
        ..WorldGenConfig::default()
    }
    .with_seed(seed)
}

pub fn build_world(width: u32, height: u32, palette: &[Terrain], seed: u64) -> World {
    generate_world(&config(width, height, palette, seed), &NamingConfig::default()).unwrap()
}

/// A world with every terrain and plenty of settlements.
pub fn build_test_world() -> World {
    let config = WorldGenConfig {
        settlement_density: 0.4,
        name: Some("Test World".to_string()),
        ..config(12, 10, Terrain::ALL, 42)
    };
    generate_world(&config, &NamingConfig::default()).unwrap()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
