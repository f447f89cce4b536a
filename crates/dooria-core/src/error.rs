//! Error types for maze generation, classification and level building

use thiserror::Error;

use crate::level::PlacementKind;
use crate::maze::Coord;

/// Failure reported by an external placer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct PlacementFailed {
    pub reason: String,
}

impl PlacementFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors raised by the maze subsystem
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}: both must be odd and at least 3")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("requested {requested} exits but only {available} perimeter slots exist")]
    TooManyExits { requested: usize, available: usize },

    #[error("a maze needs at least one exit")]
    NoExits,

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is not a perimeter exit")]
    NotOnPerimeter { row: usize, col: usize },

    #[error("placing {kind} at {cell} failed: {source}")]
    PlacementFailed {
        kind: PlacementKind,
        cell: Coord,
        #[source]
        source: PlacementFailed,
    },

    #[error("invalid maze configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse maze: {0}")]
    Parse(String),
}
