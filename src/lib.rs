#[macro_use]
pub mod model;

pub mod config;
pub mod error;
pub mod flush;
pub mod movement;
pub mod names;
pub mod session;
pub mod worldgen;

pub use error::{WorldError, WorldResult};
pub use model::{
    Cell, Direction, Economics, HexCoord, HexGrid, Neighbor, Race, RaceCatalog, ResourceKind,
    Settlement, SettlementEconomics, SettlementKind, Terrain, World,
};
pub use movement::{
    Destination, DirectionQuote, ModeCosts, MovementMode, MovementQuote, MovementRules,
    TravelCost, movement_quote, travel_costs,
};
pub use names::{NameGenerator, NamingConfig};
pub use session::WorldSession;
pub use worldgen::{WorldGenConfig, generate_world, with_terrain};
