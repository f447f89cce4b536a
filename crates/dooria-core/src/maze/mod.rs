//! Maze system
//!
//! Grid model, generator and adjacency classification.

mod cell;
mod classify;
mod generation;
mod grid;

pub use cell::{Coord, Marker};
pub use classify::{Facing, WallMask, exit_facing, wall_mask};
pub use generation::{generate, generate_level, max_exits, perimeter_slots};
pub use grid::{GridMaze, validate_dimensions};
