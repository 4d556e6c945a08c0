use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::model::{Cell, HexCoord, HexGrid, ResourceKind, Terrain};

/// Column multiplier in the per-cell seed.
const CELL_SEED_PRIME: u64 = 73_856_093;

/// Seed for one cell: `seed + x * CELL_SEED_PRIME + y`, wrapping.
pub fn cell_seed(seed: u64, coord: HexCoord) -> u64 {
    seed.wrapping_add((coord.x as i64 as u64).wrapping_mul(CELL_SEED_PRIME))
        .wrapping_add(coord.y as i64 as u64)
}

/// Draw a terrain from `palette` using [`Terrain::palette_weight`].
pub fn pick_terrain(palette: &[Terrain], rng: &mut dyn RngCore) -> Terrain {
    let total: u32 = palette.iter().map(|t| t.palette_weight()).sum();
    if total == 0 {
        return palette.first().copied().unwrap_or(Terrain::Plains);
    }
    let mut roll = rng.random_range(0..total);
    for &terrain in palette {
        let weight = terrain.palette_weight();
        if roll < weight {
            return terrain;
        }
        roll -= weight;
    }
    palette[palette.len() - 1]
}

/// Roll a monthly quantity for each resource the terrain provides.
pub fn roll_resource_quantities(
    terrain: Terrain,
    rng: &mut dyn RngCore,
) -> BTreeMap<ResourceKind, u32> {
    terrain
        .resources()
        .iter()
        .map(|&resource| {
            let (min, max) = terrain.resource_quantity_range(resource);
            (resource, rng.random_range(min..=max))
        })
        .collect()
}

/// Fill every grid coordinate with a cell. The result depends only on
/// `seed`, the palette and each coordinate.
pub fn generate_cells(
    grid: &HexGrid,
    palette: &[Terrain],
    seed: u64,
    with_quantities: bool,
) -> BTreeMap<HexCoord, Cell> {
    let cells: BTreeMap<HexCoord, Cell> = grid
        .coords()
        .map(|coord| {
            let mut rng = SmallRng::seed_from_u64(cell_seed(seed, coord));
            let terrain = pick_terrain(palette, &mut rng);
            let mut cell = Cell::new(coord, terrain);
            if with_quantities {
                cell.resource_quantities = roll_resource_quantities(terrain, &mut rng);
            }
            (coord, cell)
        })
        .collect();
    tracing::debug!(cells = cells.len(), "terrain generated");
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_terrain() {
        let grid = HexGrid::new(8, 8, true);
        let palette = Terrain::ALL;
        let a = generate_cells(&grid, palette, 42, true);
        let b = generate_cells(&grid, palette, 42, true);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_changes_map() {
        let grid = HexGrid::new(10, 10, true);
        let a = generate_cells(&grid, Terrain::ALL, 1, false);
        let b = generate_cells(&grid, Terrain::ALL, 2, false);
        let differing = a
            .values()
            .zip(b.values())
            .filter(|(x, y)| x.terrain != y.terrain)
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn only_palette_terrains_appear() {
        let grid = HexGrid::new(12, 12, false);
        let palette = [Terrain::Hills, Terrain::Water];
        for cell in generate_cells(&grid, &palette, 9, false).values() {
            assert!(palette.contains(&cell.terrain));
        }
    }

    #[test]
    fn plains_outnumber_mountains() {
        let grid = HexGrid::new(40, 40, true);
        let cells = generate_cells(&grid, &[Terrain::Plains, Terrain::Mountains], 7, false);
        let plains = cells.values().filter(|c| c.terrain == Terrain::Plains).count();
        let mountains = cells.values().filter(|c| c.terrain == Terrain::Mountains).count();
        assert!(plains > mountains * 2, "plains={plains} mountains={mountains}");
    }

    #[test]
    fn quantities_within_terrain_ranges() {
        let grid = HexGrid::new(6, 6, true);
        for cell in generate_cells(&grid, Terrain::ALL, 3, true).values() {
            assert_eq!(cell.resource_quantities.len(), cell.resources.len());
            for (&resource, &qty) in &cell.resource_quantities {
                let (min, max) = cell.terrain.resource_quantity_range(resource);
                assert!((min..=max).contains(&qty));
            }
        }
    }

    #[test]
    fn cell_seed_mixes_coordinates() {
        assert_ne!(cell_seed(5, HexCoord::new(0, 1)), cell_seed(5, HexCoord::new(1, 0)));
        assert_eq!(cell_seed(5, HexCoord::new(2, 3)), 5 + 2 * CELL_SEED_PRIME + 3);
    }
}
