//! Maze configuration supplied by the game's progression settings
//!
//! Dimensions grow by a fixed even increment per level so the odd-size rule
//! holds on every level.

use serde::{Deserialize, Serialize};

use crate::MazeError;
use crate::maze::{max_exits, validate_dimensions};

/// Per-level maze scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Rows on level 1 (odd)
    pub base_rows: usize,
    /// Columns on level 1 (odd)
    pub base_cols: usize,
    /// Rows added per level (even)
    pub row_increment: usize,
    /// Columns added per level (even)
    pub col_increment: usize,
    pub base_trap_density: f32,
    pub trap_density_increment: f32,
    /// Exits per maze, including the spawn
    pub exit_count: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            base_rows: 11,
            base_cols: 11,
            row_increment: 2,
            col_increment: 2,
            base_trap_density: 0.8,
            trap_density_increment: 0.2,
            exit_count: 4,
        }
    }
}

/// Resolved settings for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParams {
    pub level: u32,
    pub rows: usize,
    pub cols: usize,
    pub trap_density: f32,
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), MazeError> {
        validate_dimensions(self.base_rows, self.base_cols).map_err(|_| {
            MazeError::InvalidConfig(format!(
                "base size {}x{} must be odd and at least 3",
                self.base_rows, self.base_cols
            ))
        })?;
        if self.row_increment % 2 != 0 || self.col_increment % 2 != 0 {
            return Err(MazeError::InvalidConfig(format!(
                "increments {}/{} must be even",
                self.row_increment, self.col_increment
            )));
        }
        let available = max_exits(self.base_rows, self.base_cols);
        if self.exit_count == 0 || self.exit_count > available {
            return Err(MazeError::InvalidConfig(format!(
                "exit count {} outside 1..={available}",
                self.exit_count
            )));
        }
        let trap_ok = |v: f32| v.is_finite() && v >= 0.0;
        if !trap_ok(self.base_trap_density) || !trap_ok(self.trap_density_increment) {
            return Err(MazeError::InvalidConfig(
                "trap density values must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings for a 1-based level number
    pub fn params_for_level(&self, level: u32) -> Result<LevelParams, MazeError> {
        self.validate()?;
        if level == 0 {
            return Err(MazeError::InvalidConfig("levels start at 1".to_string()));
        }
        let steps = (level - 1) as usize;
        let grow = |base: usize, increment: usize| {
            increment
                .checked_mul(steps)
                .and_then(|extra| base.checked_add(extra))
                .ok_or_else(|| {
                    MazeError::InvalidConfig(format!("level {level} size overflows"))
                })
        };

        Ok(LevelParams {
            level,
            rows: grow(self.base_rows, self.row_increment)?,
            cols: grow(self.base_cols, self.col_increment)?,
            trap_density: self.base_trap_density + self.trap_density_increment * steps as f32,
        })
    }
}
