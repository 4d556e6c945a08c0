use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::cell::SettlementKind;
use super::terrain::Terrain;
use crate::config::load_json_or_default;

/// Race every settlement falls back to.
pub const DEFAULT_RACE: &str = "human";

pub(crate) fn default_race() -> String {
    DEFAULT_RACE.to_string()
}

/// A people that can found settlements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub name: String,
    /// Terrains this race favours when choosing where to settle.
    #[serde(default)]
    pub preferred_terrain: Vec<Terrain>,
    /// Settlement kinds this race builds.
    #[serde(default)]
    pub settlement_types: Vec<SettlementKind>,
}

impl Race {
    pub fn human() -> Race {
        Race {
            name: "Human".to_string(),
            preferred_terrain: vec![Terrain::Plains, Terrain::Hills],
            settlement_types: SettlementKind::ALL.to_vec(),
        }
    }

    pub fn builds(&self, kind: SettlementKind) -> bool {
        self.settlement_types.contains(&kind)
    }

    pub fn prefers(&self, terrain: Terrain) -> bool {
        self.preferred_terrain.contains(&terrain)
    }
}

/// Races keyed by id (`"human"`), as stored in `race-types.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceCatalog {
    pub races: BTreeMap<String, Race>,
}

impl Default for RaceCatalog {
    fn default() -> Self {
        Self {
            races: BTreeMap::from([(DEFAULT_RACE.to_string(), Race::human())]),
        }
    }
}

impl RaceCatalog {
    pub fn load(path: &Path) -> RaceCatalog {
        load_json_or_default::<RaceCatalog>(path).validated()
    }

    /// Drop races that build nothing; an empty catalog becomes the default.
    pub fn validated(mut self) -> RaceCatalog {
        self.races.retain(|id, race| {
            if race.settlement_types.is_empty() {
                tracing::warn!(race = %id, "race builds no settlement types, dropping");
                return false;
            }
            true
        });
        if self.races.is_empty() {
            tracing::warn!("race catalog is empty, using {DEFAULT_RACE}");
            return RaceCatalog::default();
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&Race> {
        self.races.get(id)
    }

    /// Race ids that would settle on `terrain`: those preferring it, or every
    /// race when none does.
    pub fn settlers_for(&self, terrain: Terrain) -> Vec<&str> {
        let preferring: Vec<&str> = self
            .races
            .iter()
            .filter(|(_, race)| race.prefers(terrain))
            .map(|(id, _)| id.as_str())
            .collect();
        if preferring.is_empty() {
            self.races.keys().map(String::as_str).collect()
        } else {
            preferring
        }
    }
}

/// Race catalog from `path`, or the built-in `human`-only catalog.
pub fn race_catalog(path: &Path) -> RaceCatalog {
    RaceCatalog::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_humans() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = race_catalog(&dir.path().join("race-types.json"));
        assert_eq!(catalog, RaceCatalog::default());
        let human = catalog.get(DEFAULT_RACE).unwrap();
        assert!(human.builds(SettlementKind::City));
        assert!(human.prefers(Terrain::Hills));
    }

    #[test]
    fn catalog_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("race-types.json");
        let json = r#"{
            "races": {
                "human": { "name": "Human", "preferred_terrain": ["plains", "hills"],
                           "settlement_types": ["village", "town", "city"] },
                "elf": { "name": "Elf", "preferred_terrain": ["forests"],
                         "settlement_types": ["village"] },
                "ghost": { "name": "Ghost", "settlement_types": [] }
            }
        }"#;
        std::fs::write(&path, json).unwrap();
        let catalog = race_catalog(&path);
        assert_eq!(catalog.races.len(), 2);
        assert!(catalog.get("ghost").is_none());
        assert_eq!(catalog.get("elf").unwrap().settlement_types, vec![SettlementKind::Village]);

        let text = serde_json::to_string(&catalog).unwrap();
        let back: RaceCatalog = serde_json::from_str(&text).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn settlers_prefer_their_terrain() {
        let mut catalog = RaceCatalog::default();
        catalog.races.insert(
            "elf".to_string(),
            Race {
                name: "Elf".to_string(),
                preferred_terrain: vec![Terrain::Forests],
                settlement_types: vec![SettlementKind::Village],
            },
        );
        assert_eq!(catalog.settlers_for(Terrain::Forests), vec!["elf"]);
        assert_eq!(catalog.settlers_for(Terrain::Plains), vec!["human"]);
        assert_eq!(catalog.settlers_for(Terrain::Deserts), vec!["elf", "human"]);
    }
}
