//! Maze grid (the authoritative layout handed from generation to building)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Coord, Marker};
use crate::{MIN_DIMENSION, MazeError};

/// Check the odd, at-least-3 rule for both axes
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), MazeError> {
    let ok = |n: usize| n >= MIN_DIMENSION && n % 2 == 1;
    if ok(rows) && ok(cols) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { rows, cols })
    }
}

/// Fixed-size 2-D grid of markers, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct GridMaze {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Marker>>,
}

/// Unchecked serialized form; only becomes a grid through `TryFrom`
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Marker>>,
}

impl TryFrom<RawGrid> for GridMaze {
    type Error = MazeError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let maze = Self::from_cells(raw.cells)?;
        if (maze.rows, maze.cols) != (raw.rows, raw.cols) {
            return Err(MazeError::Parse(format!(
                "declared {}x{} but cells are {}x{}",
                raw.rows, raw.cols, maze.rows, maze.cols
            )));
        }
        Ok(maze)
    }
}

impl GridMaze {
    /// All-wall grid. Rows and columns must be odd and at least 3.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![Marker::Wall; cols]; rows],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// On the outermost ring of the grid
    pub fn is_perimeter(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col)
            && (row == 0 || col == 0 || row == self.rows - 1 || col == self.cols - 1)
    }

    fn check(&self, row: usize, col: usize) -> Result<(), MazeError> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Marker, MazeError> {
        self.check(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, marker: Marker) -> Result<(), MazeError> {
        self.check(row, col)?;
        self.cells[row][col] = marker;
        Ok(())
    }

    /// Marker at a coordinate, `None` outside the grid
    pub fn at(&self, cell: Coord) -> Option<Marker> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    /// Every position in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Marker)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &marker)| (Coord::new(row, col), marker))
        })
    }

    /// Exit positions ordered by exit index
    pub fn exits(&self) -> Vec<(usize, Coord)> {
        let mut exits: Vec<(usize, Coord)> = self
            .cells()
            .filter_map(|(cell, marker)| marker.exit_index().map(|n| (n, cell)))
            .collect();
        exits.sort_unstable_by_key(|&(n, _)| n);
        exits
    }

    /// Rectangular, odd-sized rows of markers
    fn from_cells(cells: Vec<Vec<Marker>>) -> Result<Self, MazeError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if let Some(row) = cells.iter().position(|line| line.len() != cols) {
            return Err(MazeError::Parse(format!(
                "row {row} has {} cells, expected {cols}",
                cells[row].len()
            )));
        }
        validate_dimensions(rows, cols)?;

        Ok(Self { rows, cols, cells })
    }

    /// Count of positions holding the given marker
    pub fn count(&self, marker: Marker) -> usize {
        self.cells().filter(|&(_, m)| m == marker).count()
    }
}

impl fmt::Display for GridMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for marker in line {
                write!(f, "{}", marker.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for GridMaze {
    type Err = MazeError;

    /// Parse the debug rendering back into a grid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| {
                        Marker::from_symbol(ch).ok_or_else(|| {
                            MazeError::Parse(format!("unknown symbol {ch:?} at ({row}, {col})"))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }
}
