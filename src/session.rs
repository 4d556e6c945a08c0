use crate::error::{WorldError, WorldResult};
use crate::model::{HexCoord, Terrain, World};
use crate::movement::{MovementQuote, MovementRules, movement_quote};
use crate::names::NamingConfig;
use crate::worldgen::{self, WorldGenConfig};

/// Holds the caller's current world. Every change replaces the whole
/// snapshot; a failed operation leaves the previous world in place.
#[derive(Debug, Default)]
pub struct WorldSession {
    current: Option<World>,
}

impl WorldSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new world and make it current.
    pub fn generate(
        &mut self,
        config: &WorldGenConfig,
        naming: &NamingConfig,
    ) -> WorldResult<&World> {
        let world = worldgen::generate_world(config, naming)?;
        Ok(self.replace(world))
    }

    /// Make `world` current (e.g. after loading it from disk).
    pub fn replace(&mut self, world: World) -> &World {
        self.current.insert(world)
    }

    pub fn current(&self) -> WorldResult<&World> {
        self.current.as_ref().ok_or(WorldError::NoActiveWorld)
    }

    /// Drop the current world, returning it.
    pub fn take(&mut self) -> Option<World> {
        self.current.take()
    }

    /// Change one cell's terrain, replacing the current snapshot.
    pub fn edit_terrain(
        &mut self,
        coord: HexCoord,
        terrain: Terrain,
        naming: &NamingConfig,
    ) -> WorldResult<&World> {
        let edited = worldgen::with_terrain(self.current()?, coord, terrain, naming)?;
        Ok(self.replace(edited))
    }

    pub fn movement_from(&self, coord: HexCoord, rules: &MovementRules) -> WorldResult<MovementQuote> {
        movement_quote(self.current()?, coord, rules)
    }
}
