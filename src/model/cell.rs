use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::hex::HexCoord;
use super::race::default_race;
use super::resource::ResourceKind;
use super::terrain::Terrain;

// ---------------------------------------------------------------------------
// Settlement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SettlementKind {
    Village,
    Town,
    City,
}

labelled_enum!(SettlementKind, "settlement kind", {
    Village => "village",
    Town => "town",
    City => "city",
});

impl SettlementKind {
    pub fn title(self) -> &'static str {
        match self {
            SettlementKind::Village => "Village",
            SettlementKind::Town => "Town",
            SettlementKind::City => "City",
        }
    }

    /// Population range (inclusive) for a freshly founded settlement.
    pub fn population_range(self) -> (u32, u32) {
        match self {
            SettlementKind::Village => (100, 500),
            SettlementKind::Town => (500, 2_000),
            SettlementKind::City => (2_000, 10_000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub name: String,
    pub kind: SettlementKind,
    /// Race id from the race catalog.
    #[serde(default = "default_race")]
    pub race: String,
    pub population: u32,
}

// ---------------------------------------------------------------------------
// Economics
// ---------------------------------------------------------------------------

/// Wage and tax figures for a settlement, reported beside the rural ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementEconomics {
    pub wage: f64,
    pub tax_rate: f64,
    pub tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Economics {
    pub rural_population: u32,
    pub total_population: u32,
    pub wage_modifier: f64,
    pub cost_of_living: f64,
    pub rural_wage: f64,
    pub rural_tax: f64,
    pub settlement: Option<SettlementEconomics>,
}

impl Default for Economics {
    fn default() -> Self {
        Self {
            rural_population: 0,
            total_population: 0,
            wage_modifier: 1.0,
            cost_of_living: 1.0,
            rural_wage: 0.0,
            rural_tax: 0.0,
            settlement: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: HexCoord,
    pub terrain: Terrain,
    pub resources: BTreeSet<ResourceKind>,
    #[serde(default)]
    pub resource_quantities: BTreeMap<ResourceKind, u32>,
    #[serde(default)]
    pub geographic_name: String,
    #[serde(default)]
    pub population: u32,
    #[serde(default)]
    pub settlement: Option<Settlement>,
    #[serde(default)]
    pub economics: Economics,
}

impl Cell {
    /// A bare cell with its terrain's resource set and nothing else.
    pub fn new(coord: HexCoord, terrain: Terrain) -> Self {
        Self {
            coord,
            terrain,
            resources: terrain.resources().iter().copied().collect(),
            resource_quantities: BTreeMap::new(),
            geographic_name: String::new(),
            population: 0,
            settlement: None,
            economics: Economics::default(),
        }
    }

    /// Name shown to travellers: the settlement if there is one, otherwise
    /// the geographic region.
    pub fn display_name(&self) -> &str {
        match &self.settlement {
            Some(s) => &s.name,
            None => &self.geographic_name,
        }
    }
}
