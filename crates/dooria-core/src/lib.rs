//! dooria-core: maze generation and level layout for the Dooria dungeon crawler
//!
//! This crate carves a perfect maze over an odd-sized grid, picks perimeter
//! exits, classifies every cell for wall art and door facing, and hands the
//! result to an external placer. It performs no rendering or engine I/O.

pub mod level;
pub mod maze;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use error::{MazeError, PlacementFailed};
pub use rng::GameRng;
