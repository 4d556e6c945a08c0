use rand::{Rng, RngCore};

use crate::model::{Cell, Economics, Settlement, SettlementEconomics, SettlementKind, Terrain};

/// Monthly wage of one rural worker before modifiers.
pub const BASE_WAGE: f64 = 10.0;

/// Share of rural wages collected as tax.
pub const RURAL_TAX_RATE: f64 = 0.10;

/// Rural population range (inclusive) for a cell of this terrain.
pub fn rural_population_range(terrain: Terrain) -> (u32, u32) {
    match terrain {
        Terrain::Plains => (200, 800),
        Terrain::Hills => (100, 500),
        Terrain::Forests => (100, 400),
        Terrain::Deserts => (20, 150),
        Terrain::Swamps => (30, 120),
        Terrain::Mountains => (10, 100),
        Terrain::Water => (0, 0),
    }
}

pub fn rural_population(terrain: Terrain, rng: &mut dyn RngCore) -> u32 {
    let (min, max) = rural_population_range(terrain);
    rng.random_range(min..=max)
}

/// Denser cells pay less per worker, sparse ones more.
pub fn wage_modifier(total_population: u32) -> f64 {
    match total_population {
        5_000.. => 0.8,
        2_000..5_000 => 0.9,
        500..2_000 => 1.0,
        100..500 => 1.1,
        _ => 1.2,
    }
}

pub fn cost_of_living(terrain: Terrain) -> f64 {
    match terrain {
        Terrain::Plains => 1.0,
        Terrain::Hills => 1.1,
        Terrain::Forests => 1.05,
        Terrain::Swamps => 1.2,
        Terrain::Deserts => 1.3,
        Terrain::Mountains => 1.4,
        Terrain::Water => 1.0,
    }
}

/// Settlement wage multiplier over the rural wage.
pub fn settlement_wage_bonus(kind: SettlementKind) -> f64 {
    match kind {
        SettlementKind::Village => 1.1,
        SettlementKind::Town => 1.25,
        SettlementKind::City => 1.5,
    }
}

/// Settlement tax rate; always above [`RURAL_TAX_RATE`].
pub fn settlement_tax_rate(kind: SettlementKind) -> f64 {
    match kind {
        SettlementKind::Village => 0.12,
        SettlementKind::Town => 0.15,
        SettlementKind::City => 0.20,
    }
}

/// Derive wage and tax figures for a cell. Settlement figures are computed
/// on their own and reported beside the rural ones, never summed into them.
pub fn economics(
    terrain: Terrain,
    rural_population: u32,
    settlement: Option<&Settlement>,
) -> Economics {
    let settlement_population = settlement.map_or(0, |s| s.population);
    let total_population = rural_population.saturating_add(settlement_population);
    let wage_modifier = wage_modifier(total_population);
    let cost_of_living = cost_of_living(terrain);
    let rural_wage = BASE_WAGE * wage_modifier * cost_of_living;
    let rural_tax = rural_population as f64 * rural_wage * RURAL_TAX_RATE;

    let settlement = settlement.map(|s| {
        let wage = rural_wage * settlement_wage_bonus(s.kind);
        let tax_rate = settlement_tax_rate(s.kind);
        SettlementEconomics {
            wage,
            tax_rate,
            tax: s.population as f64 * wage * tax_rate,
        }
    });

    Economics {
        rural_population,
        total_population,
        wage_modifier,
        cost_of_living,
        rural_wage,
        rural_tax,
        settlement,
    }
}

/// Roll the cell's rural population and fill in its population and
/// economics, counting any settlement already placed on it.
pub fn populate_cell(cell: &mut Cell, rng: &mut dyn RngCore) {
    let rural = rural_population(cell.terrain, rng);
    cell.economics = economics(cell.terrain, rural, cell.settlement.as_ref());
    cell.population = cell.economics.total_population;
}
