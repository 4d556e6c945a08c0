#[macro_use]
mod macros;

pub mod cell;
pub mod hex;
pub mod race;
pub mod resource;
pub mod terrain;
pub mod world;

pub use cell::{Cell, Economics, Settlement, SettlementEconomics, SettlementKind};
pub use hex::{Direction, HexCoord, HexGrid, Neighbor};
pub use race::{DEFAULT_RACE, Race, RaceCatalog, race_catalog};
pub use resource::ResourceKind;
pub use terrain::{Terrain, TerrainInfo, terrain_catalog};
pub use world::World;
