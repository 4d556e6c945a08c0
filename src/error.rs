//! Error types for world generation, queries and persistence.

use thiserror::Error;

use crate::model::HexCoord;

#[derive(Debug, Error)]
pub enum WorldError {
    /// Width or height of zero
    #[error("invalid world dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("terrain palette is empty")]
    EmptyPalette,

    #[error("settlement density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    /// Movement or edit request for a coordinate with no cell
    #[error("no cell at {0}")]
    CellNotFound(HexCoord),

    /// Query issued before any world was generated or loaded
    #[error("no active world")]
    NoActiveWorld,

    /// A loaded snapshot is missing cells or has mis-keyed ones
    #[error("world '{0}' does not cover its grid")]
    IncompleteWorld(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
