use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{WorldError, WorldResult};
use crate::model::World;

/// Save `world` as pretty JSON to `<dir>/<file_stem>.json`, creating `dir`
/// if needed. An existing file of the same name is overwritten.
pub fn save_world(world: &World, dir: &Path) -> WorldResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", world.file_stem()));
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, world)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::info!(path = %path.display(), cells = world.cells.len(), "world saved");
    Ok(path)
}

/// Load a snapshot written by [`save_world`]. Snapshots that do not cover
/// their grid exactly are rejected.
pub fn load_world(path: &Path) -> WorldResult<World> {
    let reader = BufReader::new(File::open(path)?);
    let world: World = serde_json::from_reader(reader)?;
    if !world.is_complete() {
        return Err(WorldError::IncompleteWorld(world.name));
    }
    tracing::debug!(path = %path.display(), name = %world.name, "world loaded");
    Ok(world)
}

/// Saved world files (`*.json`) in `dir`, sorted by path. A missing
/// directory has no worlds.
pub fn list_worlds(dir: &Path) -> WorldResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
