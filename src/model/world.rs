use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Settlement};
use super::hex::{HexCoord, HexGrid};

/// A fully generated world snapshot. Every coordinate inside the grid has
/// exactly one cell; nothing is mutated in place once generation returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub wrap_east_west: bool,
    /// Recorded for callers; rows never wrap regardless of this flag.
    pub wrap_north_south: bool,
    pub seed: u64,
    pub created_at: DateTime<Utc>,
    pub cells: BTreeMap<HexCoord, Cell>,
}

impl World {
    pub fn grid(&self) -> HexGrid {
        HexGrid::new(self.width, self.height, self.wrap_east_west)
    }

    pub fn cell(&self, coord: HexCoord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    pub fn cell_mut(&mut self, coord: HexCoord) -> Option<&mut Cell> {
        self.cells.get_mut(&coord)
    }

    /// True when the cell map holds exactly one correctly keyed cell per
    /// grid coordinate.
    pub fn is_complete(&self) -> bool {
        let grid = self.grid();
        self.cells.len() == grid.cell_count()
            && grid
                .coords()
                .all(|c| self.cells.get(&c).is_some_and(|cell| cell.coord == c))
    }

    pub fn total_population(&self) -> u64 {
        self.cells.values().map(|c| c.population as u64).sum()
    }

    /// Settlements with their coordinates, in scan order.
    pub fn settlements(&self) -> impl Iterator<Item = (HexCoord, &Settlement)> {
        self.cells
            .values()
            .filter_map(|c| c.settlement.as_ref().map(|s| (c.coord, s)))
    }

    /// File-name stem used when persisting: lowercase, spaces as underscores.
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .name
            .trim()
            .chars()
            .map(|ch| if ch.is_whitespace() { '_' } else { ch.to_ascii_lowercase() })
            .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '-')
            .collect();
        if stem.is_empty() {
            "unnamed_world".to_string()
        } else {
            stem
        }
    }
}
