use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::model::{RaceCatalog, Terrain};

/// Configuration for world generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Columns. Odd values are rounded up to the next even number.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// Terrains that may appear. Duplicates are ignored.
    pub palette: Vec<Terrain>,
    /// Fraction of cells (0.0–1.0) that should hold a settlement.
    pub settlement_density: f64,
    /// RNG seed; a random one is drawn (and recorded) when absent.
    pub seed: Option<u64>,
    /// World name; defaults to a timestamped one.
    pub name: Option<String>,
    pub wrap_east_west: bool,
    pub wrap_north_south: bool,
    /// Roll monthly resource quantities for every cell.
    pub resource_quantities: bool,
    /// Races that may found settlements.
    pub races: RaceCatalog,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 6,
            palette: vec![Terrain::Plains, Terrain::Hills, Terrain::Forests],
            settlement_density: 0.3,
            seed: None,
            name: None,
            wrap_east_west: true,
            wrap_north_south: false,
            resource_quantities: true,
            races: RaceCatalog::default(),
        }
    }
}

impl WorldGenConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject nonsensical parameters and return a normalized copy
    /// (even width, deduplicated palette).
    pub fn validated(&self) -> WorldResult<WorldGenConfig> {
        if self.width == 0 || self.height == 0 {
            return Err(WorldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.settlement_density) {
            return Err(WorldError::InvalidDensity(self.settlement_density));
        }

        let mut palette: Vec<Terrain> = Vec::with_capacity(self.palette.len());
        for &terrain in &self.palette {
            if !palette.contains(&terrain) {
                palette.push(terrain);
            }
        }
        if palette.is_empty() {
            return Err(WorldError::EmptyPalette);
        }

        let mut width = self.width;
        if width % 2 == 1 {
            width += 1;
            tracing::debug!(requested = self.width, width, "rounded odd width up to even");
        }

        Ok(WorldGenConfig {
            width,
            palette,
            races: self.races.clone().validated(),
            ..self.clone()
        })
    }
}
