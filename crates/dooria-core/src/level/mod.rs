//! Level layout
//!
//! Turns a finished maze into placement requests and resolves per-level
//! dimensions from configuration.

mod builder;
mod config;

pub use builder::{BuildReport, Placement, PlacementKind, Placer, build};
pub use config::{LevelParams, MazeConfig};
