//! Layout constants

/// World units per grid cell
pub const CELL_SIZE: f32 = 100.0;

/// Smallest legal row or column count
pub const MIN_DIMENSION: usize = 3;

/// Grid position where carving starts
pub const CARVE_ORIGIN: (usize, usize) = (1, 1);

/// Exit index reserved for the player start
pub const SPAWN_EXIT: usize = 0;
