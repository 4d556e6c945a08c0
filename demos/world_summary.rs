//! Generate a world and print a summary plus a movement quote.
//!
//! Usage: `cargo run --example world_summary -- [seed] [width] [height]`
//! Set `RUST_LOG=hexworld_gen=debug` for generation details.

use std::collections::BTreeMap;

use hexworld_gen::model::Terrain;
use hexworld_gen::movement::MovementRules;
use hexworld_gen::names::NamingConfig;
use hexworld_gen::session::WorldSession;
use hexworld_gen::worldgen::WorldGenConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("hexworld_gen=info".parse()?))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args.first().map(|s| s.parse::<u64>()).transpose()?;
    let width = args.get(1).map(|s| s.parse::<u32>()).transpose()?.unwrap_or(16);
    let height = args.get(2).map(|s| s.parse::<u32>()).transpose()?.unwrap_or(10);

    let config = WorldGenConfig {
        width,
        height,
        palette: Terrain::ALL.to_vec(),
        seed,
        ..WorldGenConfig::default()
    };
    let mut session = WorldSession::new();
    let world = session.generate(&config, &NamingConfig::default())?;

    println!("{} ({}x{}, seed {})", world.name, world.width, world.height, world.seed);
    for y in 0..world.height as i32 {
        let row: String = (0..world.width as i32)
            .map(|x| {
                let cell = &world.cells[&hexworld_gen::HexCoord::new(x, y)];
                let glyph = cell.terrain.as_str().chars().next().unwrap_or('?');
                if cell.settlement.is_some() {
                    glyph.to_ascii_uppercase()
                } else {
                    glyph
                }
            })
            .collect();
        println!("  {row}");
    }

    let mut by_terrain: BTreeMap<Terrain, usize> = BTreeMap::new();
    for cell in world.cells.values() {
        *by_terrain.entry(cell.terrain).or_default() += 1;
    }
    for (terrain, count) in &by_terrain {
        println!("{:<10} {count}", terrain.title());
    }
    println!("population {}", world.total_population());

    let Some((origin, settlement)) = world.settlements().next() else {
        println!("no settlements");
        return Ok(());
    };
    println!("\nfrom {} ({}, {}):", settlement.name, settlement.kind, origin);
    let quote = session.movement_from(origin, &MovementRules::default())?;
    for q in &quote.directions {
        println!(
            "  {:<2} {:<28} walk {:<11} ride {:<11} fly {}",
            q.direction.as_str(),
            q.destination.name(),
            q.costs.walking.to_string(),
            q.costs.riding.to_string(),
            q.costs.flying
        );
    }
    Ok(())
}
