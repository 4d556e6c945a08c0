use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::WorldResult;
use crate::model::World;

/// World fields other than the cells.
#[derive(Serialize)]
struct WorldHeader<'a> {
    name: &'a str,
    width: u32,
    height: u32,
    wrap_east_west: bool,
    wrap_north_south: bool,
    seed: u64,
    created_at: DateTime<Utc>,
    cell_count: usize,
    settlement_count: usize,
    total_population: u64,
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Export the world for downstream tooling.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `world.json`: world metadata and totals
/// - `cells.jsonl`: one Cell per line, in scan-key order
pub fn flush_to_jsonl(world: &World, output_dir: &Path) -> WorldResult<()> {
    fs::create_dir_all(output_dir)?;

    let header = WorldHeader {
        name: &world.name,
        width: world.width,
        height: world.height,
        wrap_east_west: world.wrap_east_west,
        wrap_north_south: world.wrap_north_south,
        seed: world.seed,
        created_at: world.created_at,
        cell_count: world.cells.len(),
        settlement_count: world.settlements().count(),
        total_population: world.total_population(),
    };
    let mut writer = BufWriter::new(File::create(output_dir.join("world.json"))?);
    serde_json::to_writer_pretty(&mut writer, &header)?;
    writer.flush()?;

    write_jsonl(&output_dir.join("cells.jsonl"), world.cells.values())?;

    tracing::debug!(dir = %output_dir.display(), cells = world.cells.len(), "world exported as jsonl");
    Ok(())
}
