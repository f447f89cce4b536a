//! Cell classification for wall art and door orientation
//!
//! Rows run north to south and columns west to east: N/S move the row,
//! E/W move the column, diagonals move both.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Coord, GridMaze, Marker};
use crate::MazeError;

bitflags! {
    /// Neighbours that are wall or outside the grid
    ///
    /// Bit values are consumed by art-tile lookup tables and must not change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WallMask: u8 {
        const N = 0b0000_0001;
        const NE = 0b0000_0010;
        const E = 0b0000_0100;
        const SE = 0b0000_1000;
        const S = 0b0001_0000;
        const SW = 0b0010_0000;
        const W = 0b0100_0000;
        const NW = 0b1000_0000;
    }
}

// Serialized as the raw tile index
impl Serialize for WallMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WallMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(WallMask::from_bits_truncate(bits))
    }
}

/// Compass offsets as (row delta, col delta)
const NEIGHBOURS: [((isize, isize), WallMask); 8] = [
    ((-1, 0), WallMask::N),
    ((-1, 1), WallMask::NE),
    ((0, 1), WallMask::E),
    ((1, 1), WallMask::SE),
    ((1, 0), WallMask::S),
    ((1, -1), WallMask::SW),
    ((0, -1), WallMask::W),
    ((-1, -1), WallMask::NW),
];

/// Direction a door faces, outward through the edge it sits on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// Engine yaw for a door on this edge
    pub const fn yaw_degrees(&self) -> f32 {
        match self {
            Facing::South => 90.0,
            Facing::East => 180.0,
            Facing::North => 270.0,
            Facing::West => 0.0,
        }
    }
}

/// Wall bitmask for the cell at `(row, col)`
pub fn wall_mask(maze: &GridMaze, row: usize, col: usize) -> Result<WallMask, MazeError> {
    maze.get(row, col)?;
    let cell = Coord::new(row, col);

    let mut mask = WallMask::empty();
    for ((d_row, d_col), bit) in NEIGHBOURS {
        let walled = cell
            .offset(d_row, d_col)
            .and_then(|n| maze.at(n))
            .is_none_or(|m| m.is_wall());
        if walled {
            mask |= bit;
        }
    }
    Ok(mask)
}

/// Facing for the exit at `(row, col)`
///
/// Edges are tested bottom, right, top, left; the first match wins.
pub fn exit_facing(maze: &GridMaze, row: usize, col: usize) -> Result<Facing, MazeError> {
    let Marker::Exit(_) = maze.get(row, col)? else {
        return Err(MazeError::NotOnPerimeter { row, col });
    };

    if row == maze.rows() - 1 {
        Ok(Facing::South)
    } else if col == maze.cols() - 1 {
        Ok(Facing::East)
    } else if row == 0 {
        Ok(Facing::North)
    } else if col == 0 {
        Ok(Facing::West)
    } else {
        Err(MazeError::NotOnPerimeter { row, col })
    }
}
