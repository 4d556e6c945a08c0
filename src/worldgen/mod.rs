pub mod clusters;
pub mod config;
pub mod population;
pub mod settlements;
pub mod terrain;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::error::{WorldError, WorldResult};
use crate::model::{HexCoord, HexGrid, Terrain, World};
use crate::names::{NameGenerator, NamingConfig};

pub use clusters::{Cluster, find_clusters};
pub use config::WorldGenConfig;

/// Mixed into the world seed for the naming, settlement and population
/// stream so it does not mirror the per-cell terrain streams.
const MAIN_RNG_SALT: u64 = 0x5EED_CAFE_F00D_D00D;

/// `"Generated World YYYYmmdd_HHMMSS"`.
pub fn default_world_name(created_at: DateTime<Utc>) -> String {
    format!("Generated World {}", created_at.format("%Y%m%d_%H%M%S"))
}

/// Generate a complete world snapshot.
///
/// Steps run in a fixed order: terrain, clustering and geographic names,
/// settlements, population and economics. With the same seed and
/// configuration the result is identical apart from `created_at` (and the
/// default name derived from it).
pub fn generate_world(config: &WorldGenConfig, naming: &NamingConfig) -> WorldResult<World> {
    let config = config.validated()?;
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let created_at = Utc::now();
    let name = match &config.name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => default_world_name(created_at),
    };

    let grid = HexGrid::new(config.width, config.height, config.wrap_east_west);
    let cells = terrain::generate_cells(&grid, &config.palette, seed, config.resource_quantities);
    let mut world = World {
        name,
        width: config.width,
        height: config.height,
        wrap_east_west: config.wrap_east_west,
        wrap_north_south: config.wrap_north_south,
        seed,
        created_at,
        cells,
    };

    let mut rng = SmallRng::seed_from_u64(seed ^ MAIN_RNG_SALT);
    let mut names = NameGenerator::new(naming);

    let mut clusters = find_clusters(&world);
    for cluster in &mut clusters {
        let name = names.geographic_name(cluster.terrain, cluster.size(), &mut rng);
        for &member in &cluster.members {
            if let Some(cell) = world.cell_mut(member) {
                cell.geographic_name = name.clone();
            }
        }
        cluster.name = Some(name);
    }

    let placed = settlements::place_settlements(
        &mut world,
        config.settlement_density,
        &config.races,
        &mut names,
        &mut rng,
    );

    for cell in world.cells.values_mut() {
        population::populate_cell(cell, &mut rng);
    }

    tracing::info!(
        name = %world.name,
        width = world.width,
        height = world.height,
        seed,
        clusters = clusters.len(),
        settlements = placed,
        "world generated"
    );
    Ok(world)
}

/// Return a copy of `world` with the cell at `coord` changed to `new_terrain`.
///
/// The cell's resources follow the new terrain, a settlement the new
/// terrain cannot hold is removed, and population and economics are
/// recomputed. Quantities and rural population are rolled from the cell's
/// own seed, so the same edit always gives the same snapshot.
///
/// Clusters are recomputed afterwards. A cluster with exactly the members it
/// had before keeps its name; merged, split or new clusters are renamed.
pub fn with_terrain(
    world: &World,
    coord: HexCoord,
    new_terrain: Terrain,
    naming: &NamingConfig,
) -> WorldResult<World> {
    let mut edited = world.clone();
    let cell = edited
        .cell_mut(coord)
        .ok_or(WorldError::CellNotFound(coord))?;
    let seed = terrain::cell_seed(world.seed, coord);
    let mut rng = SmallRng::seed_from_u64(seed);

    let old_terrain = cell.terrain;
    let had_quantities = !cell.resource_quantities.is_empty();
    cell.terrain = new_terrain;
    cell.resources = new_terrain.resources().iter().copied().collect();
    cell.resource_quantities = if had_quantities {
        terrain::roll_resource_quantities(new_terrain, &mut rng)
    } else {
        Default::default()
    };

    if !new_terrain.supports_settlement()
        && let Some(settlement) = cell.settlement.take()
    {
        tracing::info!(
            %coord,
            settlement = %settlement.name,
            terrain = %new_terrain,
            "settlement removed by terrain edit"
        );
    }
    population::populate_cell(cell, &mut rng);

    if old_terrain != new_terrain {
        let mut rng = SmallRng::seed_from_u64(seed ^ MAIN_RNG_SALT);
        let renamed = rename_changed_clusters(world, &mut edited, naming, &mut rng);
        tracing::debug!(%coord, renamed, "clusters renamed after terrain edit");
    }

    tracing::debug!(%coord, terrain = %new_terrain, "terrain edited");
    Ok(edited)
}

/// Re-cluster `after` and name every cluster whose terrain or membership
/// differs from the clusters of `before`. Returns the number of clusters renamed.
fn rename_changed_clusters(
    before: &World,
    after: &mut World,
    naming: &NamingConfig,
    rng: &mut dyn RngCore,
) -> usize {
    let previous: HashMap<(Terrain, Vec<HexCoord>), String> = find_clusters(before)
        .into_iter()
        .filter_map(|cluster| {
            let name = before.cell(*cluster.members.first()?)?.geographic_name.clone();
            let mut members = cluster.members;
            members.sort_unstable();
            Some(((cluster.terrain, members), name))
        })
        .collect();

    let mut names = NameGenerator::new(naming);
    for (_, settlement) in after.settlements() {
        names.reserve(&settlement.name);
    }

    let mut clusters = find_clusters(after);
    for cluster in &mut clusters {
        let mut members = cluster.members.clone();
        members.sort_unstable();
        if let Some(name) = previous.get(&(cluster.terrain, members)) {
            names.reserve(name);
            cluster.name = Some(name.clone());
        }
    }

    let mut renamed = 0;
    for cluster in clusters.iter_mut().filter(|c| c.name.is_none()) {
        let name = names.geographic_name(cluster.terrain, cluster.size(), rng);
        for &member in &cluster.members {
            if let Some(cell) = after.cell_mut(member) {
                cell.geographic_name = name.clone();
            }
        }
        cluster.name = Some(name);
        renamed += 1;
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SettlementKind;

    fn plains_world() -> World {
        let config = WorldGenConfig {
            width: 4,
            height: 4,
            palette: vec![Terrain::Plains],
            settlement_density: 1.0,
            ..WorldGenConfig::default()
        }
        .with_seed(7);
        generate_world(&config, &NamingConfig::default()).unwrap()
    }

    #[test]
    fn default_name_uses_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-03-05T07:08:09Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(default_world_name(at), "Generated World 20240305_070809");
    }

    #[test]
    fn explicit_name_is_kept() {
        let config = WorldGenConfig {
            name: Some("Aldmere".to_string()),
            ..WorldGenConfig::default()
        };
        let world = generate_world(&config, &NamingConfig::default()).unwrap();
        assert_eq!(world.name, "Aldmere");
        assert!(world.is_complete());
    }

    #[test]
    fn random_seed_is_recorded() {
        let config = WorldGenConfig::default();
        let world = generate_world(&config, &NamingConfig::default()).unwrap();
        let again = generate_world(&config.with_seed(world.seed), &NamingConfig::default()).unwrap();
        assert_eq!(world.cells, again.cells);
    }

    #[test]
    fn exactly_one_city() {
        let world = plains_world();
        let cities = world
            .settlements()
            .filter(|(_, s)| s.kind == SettlementKind::City)
            .count();
        assert_eq!(cities, 1);
    }

    #[test]
    fn terrain_edit_leaves_original_untouched() {
        let world = plains_world();
        let coord = HexCoord::new(1, 1);
        let edited = with_terrain(&world, coord, Terrain::Forests, &NamingConfig::default()).unwrap();
        assert_eq!(world.cell(coord).unwrap().terrain, Terrain::Plains);
        let cell = edited.cell(coord).unwrap();
        assert_eq!(cell.terrain, Terrain::Forests);
        assert!(cell.resources.iter().all(|r| Terrain::Forests.resources().contains(r)));
        assert_eq!(cell.population, cell.economics.total_population);
    }

    #[test]
    fn terrain_edit_removes_settlement_on_water() {
        let world = plains_world();
        let (coord, _) = world.settlements().next().unwrap();
        let edited = with_terrain(&world, coord, Terrain::Water, &NamingConfig::default()).unwrap();
        let cell = edited.cell(coord).unwrap();
        assert!(cell.settlement.is_none());
        assert_eq!(cell.population, 0);
        assert!(cell.economics.settlement.is_none());
    }

    #[test]
    fn terrain_edit_is_deterministic() {
        let world = plains_world();
        let coord = HexCoord::new(2, 3);
        let a = with_terrain(&world, coord, Terrain::Hills, &NamingConfig::default()).unwrap();
        let b = with_terrain(&world, coord, Terrain::Hills, &NamingConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn terrain_edit_outside_grid_fails() {
        let world = plains_world();
        let result = with_terrain(&world, HexCoord::new(10, 0), Terrain::Hills, &NamingConfig::default());
        assert!(matches!(result, Err(WorldError::CellNotFound(_))));
    }

    fn cluster_names(world: &World) -> HashMap<(Terrain, Vec<HexCoord>), String> {
        find_clusters(world)
            .into_iter()
            .map(|cluster| {
                let name = world.cell(cluster.members[0]).unwrap().geographic_name.clone();
                let mut members = cluster.members;
                members.sort_unstable();
                ((cluster.terrain, members), name)
            })
            .collect()
    }

    #[test]
    fn terrain_edit_renames_split_cluster() {
        let world = plains_world();
        let coord = HexCoord::new(1, 1);
        let edited = with_terrain(&world, coord, Terrain::Mountains, &NamingConfig::default()).unwrap();

        let peak = &edited.cell(coord).unwrap().geographic_name;
        assert!(!peak.is_empty());
        let plains: Vec<&str> = edited
            .cells
            .values()
            .filter(|c| c.terrain == Terrain::Plains)
            .map(|c| c.geographic_name.as_str())
            .collect();
        assert_eq!(plains.len(), 15);
        assert!(plains.iter().all(|name| *name == plains[0]));
        assert_ne!(plains[0], peak.as_str());
    }

    #[test]
    fn terrain_edit_keeps_untouched_cluster_names() {
        let config = WorldGenConfig {
            width: 8,
            height: 8,
            palette: vec![Terrain::Plains, Terrain::Hills, Terrain::Water, Terrain::Mountains],
            ..WorldGenConfig::default()
        }
        .with_seed(21);
        let world = generate_world(&config, &NamingConfig::default()).unwrap();
        let coord = HexCoord::new(3, 4);
        let target = if world.cell(coord).unwrap().terrain == Terrain::Water {
            Terrain::Hills
        } else {
            Terrain::Water
        };
        let edited = with_terrain(&world, coord, target, &NamingConfig::default()).unwrap();

        let before = cluster_names(&world);
        let after = cluster_names(&edited);
        let mut unique = std::collections::HashSet::new();
        for (members, name) in &after {
            if let Some(old) = before.get(members) {
                assert_eq!(name, old);
            }
            assert!(unique.insert(name.clone()), "duplicate cluster name {name}");
        }
        let edited_cluster = after.keys().find(|(_, m)| m.contains(&coord)).unwrap();
        assert!(!before.contains_key(edited_cluster));
        assert_ne!(
            edited.cell(coord).unwrap().geographic_name,
            world.cell(coord).unwrap().geographic_name
        );
    }

    #[test]
    fn isolated_cell_edit_gets_a_new_name() {
        let world = plains_world();
        let coord = HexCoord::new(1, 1);
        let peak = with_terrain(&world, coord, Terrain::Mountains, &NamingConfig::default()).unwrap();
        let lake = with_terrain(&peak, coord, Terrain::Water, &NamingConfig::default()).unwrap();
        let peak_name = &peak.cell(coord).unwrap().geographic_name;
        let lake_name = &lake.cell(coord).unwrap().geographic_name;
        assert_ne!(peak_name, lake_name);
        let plains = HexCoord::new(0, 0);
        assert_eq!(
            peak.cell(plains).unwrap().geographic_name,
            lake.cell(plains).unwrap().geographic_name
        );
    }

    #[test]
    fn same_terrain_edit_keeps_names() {
        let world = plains_world();
        let coord = HexCoord::new(2, 2);
        let edited = with_terrain(&world, coord, Terrain::Plains, &NamingConfig::default()).unwrap();
        assert_eq!(cluster_names(&world), cluster_names(&edited));
    }
}
