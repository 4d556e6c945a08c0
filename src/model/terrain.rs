use serde::{Deserialize, Serialize};

use super::resource::ResourceKind;

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Terrain {
    Plains,
    Hills,
    Mountains,
    Forests,
    Swamps,
    Deserts,
    Water,
}

labelled_enum!(Terrain, "terrain", {
    Plains => "plains",
    Hills => "hills",
    Mountains => "mountains",
    Forests => "forests",
    Swamps => "swamps",
    Deserts => "deserts",
    Water => "water",
});

impl Terrain {
    /// Display name ("Plains", "Mountains", ...).
    pub fn title(self) -> &'static str {
        match self {
            Terrain::Plains => "Plains",
            Terrain::Hills => "Hills",
            Terrain::Mountains => "Mountains",
            Terrain::Forests => "Forests",
            Terrain::Swamps => "Swamps",
            Terrain::Deserts => "Deserts",
            Terrain::Water => "Water",
        }
    }

    /// Map colour used by renderers.
    pub fn color(self) -> &'static str {
        match self {
            Terrain::Plains => "#90EE90",
            Terrain::Hills => "#DEB887",
            Terrain::Mountains => "#8B7355",
            Terrain::Forests => "#228B22",
            Terrain::Swamps => "#556B2F",
            Terrain::Deserts => "#F4A460",
            Terrain::Water => "#4682B4",
        }
    }

    /// Fixed resource kinds found in this terrain.
    pub fn resources(self) -> &'static [ResourceKind] {
        use ResourceKind::*;
        match self {
            Terrain::Plains => &[Grain, Horses],
            Terrain::Hills => &[Stone, Iron],
            Terrain::Mountains => &[Stone, Iron, Gems],
            Terrain::Forests => &[Wood, Herbs],
            Terrain::Swamps => &[Herbs, Fish],
            Terrain::Deserts => &[Stone, Gems],
            Terrain::Water => &[Fish],
        }
    }

    /// Relative draw weight when generating terrain from a palette.
    /// Plains dominate, mountains are the rarest.
    pub fn palette_weight(self) -> u32 {
        match self {
            Terrain::Plains => 6,
            Terrain::Hills | Terrain::Forests => 3,
            Terrain::Swamps | Terrain::Deserts | Terrain::Water => 2,
            Terrain::Mountains => 1,
        }
    }

    /// Whether a settlement may be founded here.
    pub fn supports_settlement(self) -> bool {
        !matches!(self, Terrain::Mountains | Terrain::Water | Terrain::Swamps)
    }

    /// Monthly (min, max) yield for a resource in this terrain.
    pub fn resource_quantity_range(self, resource: ResourceKind) -> (u32, u32) {
        let (min, max) = resource.base_quantity_range();
        let factor = match (self, resource) {
            (Terrain::Plains, ResourceKind::Grain) => 2,
            (Terrain::Mountains, ResourceKind::Iron | ResourceKind::Gems) => 2,
            (Terrain::Forests, ResourceKind::Wood) => 2,
            (Terrain::Water, ResourceKind::Fish) => 2,
            _ => 1,
        };
        (min * factor, max * factor)
    }
}

/// Catalog entry describing a terrain for map renderers and pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainInfo {
    pub id: Terrain,
    pub name: String,
    pub color: String,
    pub resources: Vec<ResourceKind>,
}

/// Every terrain with its display data, in declaration order.
pub fn terrain_catalog() -> Vec<TerrainInfo> {
    Terrain::ALL
        .iter()
        .map(|&t| TerrainInfo {
            id: t,
            name: t.title().to_string(),
            color: t.color().to_string(),
            resources: t.resources().to_vec(),
        })
        .collect()
}
