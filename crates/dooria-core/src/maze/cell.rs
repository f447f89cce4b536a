//! Grid markers and coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// What occupies a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    Wall,
    Open,
    /// Carved during generation; never present in a finished maze
    Visited,
    /// Perimeter breach with its exit index
    Exit(usize),
}

impl Marker {
    pub const fn is_wall(&self) -> bool {
        matches!(self, Marker::Wall)
    }

    /// Anything a player can walk on
    pub const fn is_passable(&self) -> bool {
        !self.is_wall()
    }

    pub const fn exit_index(&self) -> Option<usize> {
        match self {
            Marker::Exit(n) => Some(*n),
            _ => None,
        }
    }

    /// Debug glyph: `#` wall, space open, `V` visited, exit index as a base-36 digit
    pub fn symbol(&self) -> char {
        match self {
            Marker::Wall => '#',
            Marker::Open => ' ',
            Marker::Visited => 'V',
            Marker::Exit(n) => u32::try_from(*n)
                .ok()
                .and_then(|n| char::from_digit(n, 36))
                .unwrap_or('?'),
        }
    }

    /// Inverse of [`Marker::symbol`]
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Marker::Wall),
            ' ' => Some(Marker::Open),
            'V' => Some(Marker::Visited),
            _ => ch
                .to_digit(36)
                .filter(|_| !ch.is_ascii_uppercase())
                .map(|n| Marker::Exit(n as usize)),
        }
    }
}

/// Grid coordinate, row first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Both indices odd: a candidate passage cell
    pub const fn is_lattice_cell(&self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// World-space location of this cell's origin
    pub fn world_position(&self, cell_size: f32) -> [f32; 3] {
        [self.row as f32 * cell_size, self.col as f32 * cell_size, 0.0]
    }

    /// Offset by a signed delta, `None` if it would go negative
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Cell halfway between two lattice cells two steps apart
    pub const fn midpoint(&self, other: &Coord) -> Coord {
        Coord {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
