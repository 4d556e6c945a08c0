use rand::{Rng, RngCore};

use crate::model::{HexCoord, Race, RaceCatalog, Settlement, SettlementKind, World};
use crate::names::NameGenerator;

/// Random picks allowed per settlement before placement gives up.
const ATTEMPTS_PER_SETTLEMENT: usize = 20;

/// Chance that a settlement after the first is a town rather than a village.
const TOWN_CHANCE: f64 = 0.25;

/// How many settlements a grid of `cell_count` cells should receive.
/// Any positive density yields at least one.
pub fn target_count(cell_count: usize, density: f64) -> usize {
    if density <= 0.0 {
        return 0;
    }
    ((cell_count as f64 * density).floor() as usize).max(1)
}

/// Kind for the `index`-th settlement placed: the first is always a city.
fn roll_kind(index: usize, rng: &mut dyn RngCore) -> SettlementKind {
    if index == 0 {
        SettlementKind::City
    } else if rng.random_bool(TOWN_CHANCE) {
        SettlementKind::Town
    } else {
        SettlementKind::Village
    }
}

/// Largest kind the race builds no bigger than `rolled`, else its smallest.
fn fit_kind(race: &Race, rolled: SettlementKind) -> SettlementKind {
    let allowed = race.settlement_types.iter().copied();
    allowed
        .clone()
        .filter(|&kind| kind <= rolled)
        .max()
        .or_else(|| allowed.min())
        .unwrap_or(rolled)
}

/// Place settlements on random habitable cells.
///
/// Draws random cells until the target count is reached or the attempt
/// budget runs out; occupied cells and terrain that cannot hold a settlement
/// are skipped. Each settlement goes to a race preferring the cell's terrain
/// (any race when none does) and is limited to the kinds that race builds.
/// Returns the number placed.
pub fn place_settlements(
    world: &mut World,
    density: f64,
    races: &RaceCatalog,
    names: &mut NameGenerator,
    rng: &mut dyn RngCore,
) -> usize {
    let fallback;
    let races = if races.races.is_empty() {
        fallback = RaceCatalog::default();
        &fallback
    } else {
        races
    };

    let coords: Vec<HexCoord> = world.grid().coords().collect();
    let target = target_count(coords.len(), density);
    if target == 0 || coords.is_empty() {
        return 0;
    }

    let max_attempts = target * ATTEMPTS_PER_SETTLEMENT;
    let mut placed = 0;
    let mut attempts = 0;
    while placed < target && attempts < max_attempts {
        attempts += 1;
        let coord = coords[rng.random_range(0..coords.len())];
        let Some(cell) = world.cell(coord) else {
            continue;
        };
        if cell.settlement.is_some() || !cell.terrain.supports_settlement() {
            continue;
        }
        let terrain = cell.terrain;

        let settlers = races.settlers_for(terrain);
        let race_id = settlers[rng.random_range(0..settlers.len())];
        let Some(race) = races.get(race_id) else {
            continue;
        };
        let kind = fit_kind(race, roll_kind(placed, rng));
        let (min, max) = kind.population_range();
        let population = rng.random_range(min..=max);
        let name = names.settlement_name(terrain, kind, rng);
        if let Some(cell) = world.cell_mut(coord) {
            cell.settlement = Some(Settlement {
                name,
                kind,
                race: race_id.to_string(),
                population,
            });
            placed += 1;
        }
    }

    if placed < target {
        tracing::debug!(placed, target, attempts, "settlement placement ran out of attempts");
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Terrain};
    use crate::names::NamingConfig;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn world_of(terrain: Terrain, width: u32, height: u32) -> World {
        let grid = crate::model::HexGrid::new(width, height, true);
        World {
            name: "test".to_string(),
            width,
            height,
            wrap_east_west: true,
            wrap_north_south: false,
            seed: 0,
            created_at: Utc::now(),
            cells: grid.coords().map(|c| (c, Cell::new(c, terrain))).collect(),
        }
    }

    #[test]
    fn target_count_rules() {
        assert_eq!(target_count(36, 0.0), 0);
        assert_eq!(target_count(36, 0.01), 1);
        assert_eq!(target_count(36, 0.3), 10);
        assert_eq!(target_count(36, 1.0), 36);
    }

    #[test]
    fn first_settlement_is_a_city() {
        let config = NamingConfig::default();
        let mut names = NameGenerator::new(&config);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut world = world_of(Terrain::Plains, 6, 6);
        let placed = place_settlements(&mut world, 0.03, &RaceCatalog::default(), &mut names, &mut rng);
        assert_eq!(placed, 1);
        let (_, settlement) = world.settlements().next().unwrap();
        assert_eq!(settlement.kind, SettlementKind::City);
        assert_eq!(settlement.race, "human");
        let (min, max) = SettlementKind::City.population_range();
        assert!((min..=max).contains(&settlement.population));
    }

    #[test]
    fn uninhabitable_world_gets_none() {
        let config = NamingConfig::default();
        let mut names = NameGenerator::new(&config);
        let mut rng = SmallRng::seed_from_u64(42);
        for terrain in [Terrain::Mountains, Terrain::Water, Terrain::Swamps] {
            let mut world = world_of(terrain, 4, 4);
            assert_eq!(place_settlements(&mut world, 1.0, &RaceCatalog::default(), &mut names, &mut rng), 0);
            assert_eq!(world.settlements().count(), 0);
        }
    }

    #[test]
    fn zero_density_places_nothing() {
        let config = NamingConfig::default();
        let mut names = NameGenerator::new(&config);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut world = world_of(Terrain::Plains, 4, 4);
        assert_eq!(place_settlements(&mut world, 0.0, &RaceCatalog::default(), &mut names, &mut rng), 0);
    }

    #[test]
    fn never_more_than_target_and_names_unique() {
        let config = NamingConfig::default();
        let mut names = NameGenerator::new(&config);
        let mut rng = SmallRng::seed_from_u64(9);
        let mut world = world_of(Terrain::Hills, 10, 10);
        let placed = place_settlements(&mut world, 0.5, &RaceCatalog::default(), &mut names, &mut rng);
        assert!(placed <= 50);
        assert!(placed > 0);
        let mut seen = std::collections::HashSet::new();
        for (_, s) in world.settlements() {
            assert!(seen.insert(s.name.clone()), "duplicate {}", s.name);
        }
    }

    fn village_folk() -> RaceCatalog {
        RaceCatalog {
            races: [(
                "halfling".to_string(),
                Race {
                    name: "Halfling".to_string(),
                    preferred_terrain: vec![Terrain::Hills],
                    settlement_types: vec![SettlementKind::Village],
                },
            )]
            .into(),
        }
    }

    #[test]
    fn races_only_build_their_kinds() {
        let config = NamingConfig::default();
        let mut names = NameGenerator::new(&config);
        let mut rng = SmallRng::seed_from_u64(11);
        let mut world = world_of(Terrain::Plains, 6, 6);
        let placed = place_settlements(&mut world, 0.5, &village_folk(), &mut names, &mut rng);
        assert!(placed > 0);
        for (_, s) in world.settlements() {
            assert_eq!(s.kind, SettlementKind::Village);
            assert_eq!(s.race, "halfling");
        }
    }

    #[test]
    fn settlers_follow_preferred_terrain() {
        let config = NamingConfig::default();
        let mut names = NameGenerator::new(&config);
        let mut rng = SmallRng::seed_from_u64(12);
        let mut races = village_folk();
        races.races.insert("human".to_string(), Race::human());
        let mut world = world_of(Terrain::Forests, 6, 6);
        place_settlements(&mut world, 0.5, &races, &mut names, &mut rng);
        let mut seen: Vec<&str> = world.settlements().map(|(_, s)| s.race.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 2, "nobody prefers forests, so both races settle");

        let mut world = world_of(Terrain::Plains, 6, 6);
        place_settlements(&mut world, 0.5, &races, &mut names, &mut rng);
        assert!(world.settlements().all(|(_, s)| s.race == "human"));
    }

    #[test]
    fn fitted_kind_never_exceeds_roll() {
        let mut race = Race::human();
        race.settlement_types = vec![SettlementKind::Town];
        assert_eq!(fit_kind(&race, SettlementKind::City), SettlementKind::Town);
        assert_eq!(fit_kind(&race, SettlementKind::Village), SettlementKind::Town);
        assert_eq!(fit_kind(&Race::human(), SettlementKind::Town), SettlementKind::Town);
    }
}
