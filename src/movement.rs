//! Travel-time quotes between a cell and its six neighbours.
//!
//! Costs are a pure function of the two terrains, the two coordinates and
//! the [`MovementRules`]; nothing here draws from a random source, so the
//! same query against the same world always answers the same.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::load_json_or_default;
use crate::error::{WorldError, WorldResult};
use crate::model::{Direction, HexCoord, Neighbor, Terrain, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MovementMode {
    Walking,
    Riding,
    Flying,
}

labelled_enum!(MovementMode, "movement mode", {
    Walking => "walking",
    Riding => "riding",
    Flying => "flying",
});

// ---------------------------------------------------------------------------
// TravelCost
// ---------------------------------------------------------------------------

/// Days needed for one hex step, or `Impassable`.
///
/// Serialized as a bare number of days or the string `"impassable"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelCost {
    Days(u32),
    Impassable,
}

const IMPASSABLE: &str = "impassable";

impl TravelCost {
    pub fn days(self) -> Option<u32> {
        match self {
            TravelCost::Days(d) => Some(d),
            TravelCost::Impassable => None,
        }
    }

    pub fn is_impassable(self) -> bool {
        self == TravelCost::Impassable
    }
}

impl fmt::Display for TravelCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelCost::Days(1) => f.write_str("1 day"),
            TravelCost::Days(d) => write!(f, "{d} days"),
            TravelCost::Impassable => f.write_str(IMPASSABLE),
        }
    }
}

impl Serialize for TravelCost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TravelCost::Days(d) => serializer.serialize_u32(*d),
            TravelCost::Impassable => serializer.serialize_str(IMPASSABLE),
        }
    }
}

impl<'de> Deserialize<'de> for TravelCost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Days(u32),
            Label(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Days(d) => Ok(TravelCost::Days(d)),
            Repr::Label(s) if s == IMPASSABLE => Ok(TravelCost::Impassable),
            Repr::Label(s) => Err(serde::de::Error::custom(format!(
                "expected a number of days or \"{IMPASSABLE}\", got {s:?}"
            ))),
        }
    }
}

/// One travel cost per movement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeCosts {
    pub walking: TravelCost,
    pub riding: TravelCost,
    pub flying: TravelCost,
}

impl ModeCosts {
    pub const IMPASSABLE: ModeCosts = ModeCosts {
        walking: TravelCost::Impassable,
        riding: TravelCost::Impassable,
        flying: TravelCost::Impassable,
    };

    pub fn get(&self, mode: MovementMode) -> TravelCost {
        match mode {
            MovementMode::Walking => self.walking,
            MovementMode::Riding => self.riding,
            MovementMode::Flying => self.flying,
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Per-terrain step costs and which modes may cross the terrain at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainMovement {
    /// Days to leave a cell of this terrain.
    pub exit_days: u32,
    /// Days to enter a cell of this terrain.
    pub enter_days: u32,
    pub walkable: bool,
    pub rideable: bool,
    pub flyable: bool,
}

impl TerrainMovement {
    fn ground(exit_days: u32, enter_days: u32) -> Self {
        Self {
            exit_days,
            enter_days,
            walkable: true,
            rideable: true,
            flyable: true,
        }
    }

    fn air_only(exit_days: u32, enter_days: u32) -> Self {
        Self {
            exit_days,
            enter_days,
            walkable: false,
            rideable: false,
            flyable: true,
        }
    }

    /// Built-in entry: mountains and water are closed to walking and riding.
    pub fn builtin(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Plains => Self::ground(1, 1),
            Terrain::Hills => Self::ground(1, 2),
            Terrain::Forests => Self::ground(1, 2),
            Terrain::Swamps => Self::ground(2, 3),
            Terrain::Deserts => Self::ground(2, 2),
            Terrain::Mountains => Self::air_only(3, 4),
            Terrain::Water => Self::air_only(2, 2),
        }
    }
}

/// A terrain entry as written in a rules file. Absent fields keep the
/// terrain's built-in value.
#[derive(Debug, Default, Deserialize)]
pub struct TerrainMovementPatch {
    exit_days: Option<u32>,
    enter_days: Option<u32>,
    walkable: Option<bool>,
    rideable: Option<bool>,
    flyable: Option<bool>,
}

impl TerrainMovementPatch {
    fn apply(self, base: TerrainMovement) -> TerrainMovement {
        TerrainMovement {
            exit_days: self.exit_days.unwrap_or(base.exit_days),
            enter_days: self.enter_days.unwrap_or(base.enter_days),
            walkable: self.walkable.unwrap_or(base.walkable),
            rideable: self.rideable.unwrap_or(base.rideable),
            flyable: self.flyable.unwrap_or(base.flyable),
        }
    }
}

/// A rules file: every field optional, layered over [`MovementRules::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RulesDocument {
    terrain: BTreeMap<Terrain, TerrainMovementPatch>,
    min_walking_days: Option<u32>,
    riding_factor: Option<f64>,
    min_riding_days: Option<u32>,
    flying_days: Option<u32>,
    variation: Option<u32>,
    route_seed: Option<u64>,
}

impl From<RulesDocument> for MovementRules {
    fn from(doc: RulesDocument) -> Self {
        let base = MovementRules::default();
        let mut terrain = base.terrain;
        for (t, patch) in doc.terrain {
            let entry = terrain.entry(t).or_insert_with(|| TerrainMovement::builtin(t));
            *entry = patch.apply(*entry);
        }
        MovementRules {
            terrain,
            min_walking_days: doc.min_walking_days.unwrap_or(base.min_walking_days),
            riding_factor: doc.riding_factor.unwrap_or(base.riding_factor),
            min_riding_days: doc.min_riding_days.unwrap_or(base.min_riding_days),
            flying_days: doc.flying_days.unwrap_or(base.flying_days),
            variation: doc.variation.unwrap_or(base.variation),
            route_seed: doc.route_seed.unwrap_or(base.route_seed),
        }
    }
}

/// Tunable movement model. A JSON document only needs the fields it
/// changes: a terrain entry patches that terrain's built-in values and
/// terrains left out keep theirs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RulesDocument")]
pub struct MovementRules {
    pub terrain: BTreeMap<Terrain, TerrainMovement>,
    pub min_walking_days: u32,
    /// Riding time as a fraction of walking time, floored.
    pub riding_factor: f64,
    pub min_riding_days: u32,
    /// Flat flying time for any passable step.
    pub flying_days: u32,
    /// Route variation spans `-variation..=variation` days.
    pub variation: u32,
    /// Mixed into the route hash; change it to reshuffle every route.
    pub route_seed: u64,
}

impl Default for MovementRules {
    fn default() -> Self {
        Self {
            terrain: Terrain::ALL
                .iter()
                .map(|&t| (t, TerrainMovement::builtin(t)))
                .collect(),
            min_walking_days: 2,
            riding_factor: 0.67,
            min_riding_days: 1,
            flying_days: 4,
            variation: 3,
            route_seed: 0,
        }
    }
}

impl MovementRules {
    /// Load from a JSON file, falling back to built-ins when the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> MovementRules {
        load_json_or_default::<MovementRules>(path).validated()
    }

    /// Repair rules built in code or loaded from a file:
    /// - every terrain has an entry (its built-in one when absent);
    /// - a riding factor that is NaN, negative or above 1 reverts to the default.
    pub fn validated(mut self) -> MovementRules {
        for &terrain in Terrain::ALL {
            self.terrain
                .entry(terrain)
                .or_insert_with(|| TerrainMovement::builtin(terrain));
        }
        if !(0.0..=1.0).contains(&self.riding_factor) {
            tracing::warn!(
                riding_factor = self.riding_factor,
                "riding factor outside [0, 1], using default"
            );
            self.riding_factor = MovementRules::default().riding_factor;
        }
        self
    }

    /// Movement entry for `terrain`, or its built-in entry when the rules
    /// lack one.
    pub fn for_terrain(&self, terrain: Terrain) -> TerrainMovement {
        self.terrain
            .get(&terrain)
            .copied()
            .unwrap_or_else(|| TerrainMovement::builtin(terrain))
    }
}

// ---------------------------------------------------------------------------
// Cost model
// ---------------------------------------------------------------------------

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(bytes: impl IntoIterator<Item = u8>, mut hash: u64) -> u64 {
    for b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Signed day offset for the ordered route `from -> to`, in
/// `-variation..=variation`. Stable across runs and platforms; A->B and B->A
/// may differ.
pub fn route_variation(rules: &MovementRules, from: HexCoord, to: HexCoord) -> i64 {
    if rules.variation == 0 {
        return 0;
    }
    let mut hash = fnv1a(rules.route_seed.to_le_bytes(), FNV_OFFSET);
    for v in [from.x, from.y, to.x, to.y] {
        hash = fnv1a(v.to_le_bytes(), hash);
    }
    let span = 2 * rules.variation as u64 + 1;
    (hash % span) as i64 - rules.variation as i64
}

/// Cost of one step from a `from_terrain` cell at `from` into a
/// `to_terrain` cell at `to`.
///
/// - walking: exit + enter + route variation, at least `min_walking_days`;
/// - riding: walking × `riding_factor` floored, at least `min_riding_days`
///   and never slower than walking;
/// - flying: `flying_days` regardless of terrain.
///
/// A mode is impassable when either terrain is closed to it.
pub fn travel_costs(
    rules: &MovementRules,
    from_terrain: Terrain,
    to_terrain: Terrain,
    from: HexCoord,
    to: HexCoord,
) -> ModeCosts {
    let src = rules.for_terrain(from_terrain);
    let dst = rules.for_terrain(to_terrain);

    let base = src.exit_days as i64 + dst.enter_days as i64;
    let walk_days = (base + route_variation(rules, from, to))
        .max(rules.min_walking_days as i64)
        .clamp(0, u32::MAX as i64) as u32;
    let ride_days = ((walk_days as f64 * rules.riding_factor).floor() as u32)
        .max(rules.min_riding_days)
        .min(walk_days);

    let gate = |open: bool, days: u32| {
        if open {
            TravelCost::Days(days)
        } else {
            TravelCost::Impassable
        }
    };
    ModeCosts {
        walking: gate(src.walkable && dst.walkable, walk_days),
        riding: gate(src.rideable && dst.rideable, ride_days),
        flying: gate(src.flyable && dst.flyable, rules.flying_days),
    }
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

/// Where a step in one direction leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Destination {
    Hex {
        location_id: String,
        coord: HexCoord,
        name: String,
        terrain: Terrain,
    },
    /// Off the north or south edge, or off a non-wrapping east/west edge.
    Boundary,
}

impl Destination {
    pub fn name(&self) -> &str {
        match self {
            Destination::Hex { name, .. } => name,
            Destination::Boundary => "boundary",
        }
    }

    /// Terrain label; `"boundary"` past the map edge.
    pub fn terrain_label(&self) -> &str {
        match self {
            Destination::Hex { terrain, .. } => terrain.as_str(),
            Destination::Boundary => "boundary",
        }
    }

    pub fn coord(&self) -> Option<HexCoord> {
        match self {
            Destination::Hex { coord, .. } => Some(*coord),
            Destination::Boundary => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionQuote {
    pub direction: Direction,
    pub destination: Destination,
    pub costs: ModeCosts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementQuote {
    pub origin: HexCoord,
    pub origin_name: String,
    pub origin_terrain: Terrain,
    /// Always six entries, in [`Direction::ALL`] order.
    pub directions: Vec<DirectionQuote>,
}

impl MovementQuote {
    pub fn toward(&self, direction: Direction) -> Option<&DirectionQuote> {
        self.directions.iter().find(|q| q.direction == direction)
    }
}

/// Quote travel from `coord` to each of its six neighbours.
pub fn movement_quote(
    world: &World,
    coord: HexCoord,
    rules: &MovementRules,
) -> WorldResult<MovementQuote> {
    let origin = world.cell(coord).ok_or(WorldError::CellNotFound(coord))?;
    let grid = world.grid();

    let directions = grid
        .neighbors(coord)
        .into_iter()
        .map(|(direction, neighbor)| {
            let target = match neighbor {
                Neighbor::Hex(c) => world.cell(c),
                Neighbor::Boundary => None,
            };
            match target {
                Some(dest) => DirectionQuote {
                    direction,
                    destination: Destination::Hex {
                        location_id: dest.coord.location_id(),
                        coord: dest.coord,
                        name: dest.display_name().to_string(),
                        terrain: dest.terrain,
                    },
                    costs: travel_costs(rules, origin.terrain, dest.terrain, coord, dest.coord),
                },
                None => DirectionQuote {
                    direction,
                    destination: Destination::Boundary,
                    costs: ModeCosts::IMPASSABLE,
                },
            }
        })
        .collect();

    Ok(MovementQuote {
        origin: coord,
        origin_name: origin.display_name().to_string(),
        origin_terrain: origin.terrain,
        directions,
    })
}
