//! Offset hex grid with vertical columns ("odd-q").
//!
//! Odd columns sit half a cell lower than even columns, so the neighbour
//! offsets depend on column parity. Rows never wrap; columns wrap when the
//! world wraps east-west.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HexCoord
// ---------------------------------------------------------------------------

/// Integer (column, row) address of a hex. Serialized as `"x,y"`, which is
/// also the cell's location id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

impl HexCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_odd_column(self) -> bool {
        self.x.rem_euclid(2) == 1
    }

    pub fn location_id(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<HexCoord> for String {
    fn from(c: HexCoord) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for HexCoord {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("hex coordinate must be 'x,y': {s}"))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid hex column in '{s}'"))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid hex row in '{s}'"))?;
        Ok(HexCoord { x, y })
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Direction {
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

labelled_enum!(Direction, "direction", {
    N => "N",
    NE => "NE",
    SE => "SE",
    S => "S",
    SW => "SW",
    NW => "NW",
});

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::NW => Direction::SE,
        }
    }

    /// (dx, dy) for a hex in an even or odd column.
    pub fn offset(self, odd_column: bool) -> (i32, i32) {
        if odd_column {
            match self {
                Direction::N => (0, -1),
                Direction::NE => (1, 0),
                Direction::SE => (1, 1),
                Direction::S => (0, 1),
                Direction::SW => (-1, 1),
                Direction::NW => (-1, 0),
            }
        } else {
            match self {
                Direction::N => (0, -1),
                Direction::NE => (1, -1),
                Direction::SE => (1, 0),
                Direction::S => (0, 1),
                Direction::SW => (-1, 0),
                Direction::NW => (-1, -1),
            }
        }
    }
}

/// What lies in a given direction from a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    Hex(HexCoord),
    Boundary,
}

impl Neighbor {
    pub fn coord(self) -> Option<HexCoord> {
        match self {
            Neighbor::Hex(c) => Some(c),
            Neighbor::Boundary => None,
        }
    }
}

// ---------------------------------------------------------------------------
// HexGrid
// ---------------------------------------------------------------------------

/// Grid dimensions plus the east-west wrap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexGrid {
    pub width: u32,
    pub height: u32,
    pub wrap_east_west: bool,
}

impl HexGrid {
    pub fn new(width: u32, height: u32, wrap_east_west: bool) -> Self {
        Self {
            width,
            height,
            wrap_east_west,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, c: HexCoord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as i64) < self.width as i64 && (c.y as i64) < self.height as i64
    }

    /// Resolve a raw (possibly out-of-range) position to an in-grid hex.
    /// Rows never wrap; columns wrap only when `wrap_east_west` is set.
    fn resolve(&self, x: i64, y: i64) -> Option<HexCoord> {
        if y < 0 || y >= self.height as i64 || self.width == 0 {
            return None;
        }
        let w = self.width as i64;
        let x = if self.wrap_east_west {
            x.rem_euclid(w)
        } else if x < 0 || x >= w {
            return None;
        } else {
            x
        };
        Some(HexCoord::new(x as i32, y as i32))
    }

    /// Neighbour of `c` in direction `dir`. Total over all coordinates.
    pub fn neighbor(&self, c: HexCoord, dir: Direction) -> Neighbor {
        let (dx, dy) = dir.offset(c.is_odd_column());
        match self.resolve(c.x as i64 + dx as i64, c.y as i64 + dy as i64) {
            Some(n) => Neighbor::Hex(n),
            None => Neighbor::Boundary,
        }
    }

    /// All six directions in [`Direction::ALL`] order.
    pub fn neighbors(&self, c: HexCoord) -> [(Direction, Neighbor); 6] {
        let mut out = [(Direction::N, Neighbor::Boundary); 6];
        for (slot, &dir) in out.iter_mut().zip(Direction::ALL) {
            *slot = (dir, self.neighbor(c, dir));
        }
        out
    }

    /// In-grid neighbours only.
    pub fn adjacent(&self, c: HexCoord) -> impl Iterator<Item = HexCoord> + '_ {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.neighbor(c, dir).coord())
    }

    /// Every coordinate, column-major.
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        let height = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..height).map(move |y| HexCoord::new(x, y)))
    }
}
