//! Maze generation
//!
//! Carves a perfect maze with a randomized depth-first walk over the odd-odd
//! lattice, then breaches the perimeter at randomly chosen exit slots.

use log::{debug, trace};

use super::grid::validate_dimensions;
use super::{Coord, GridMaze, Marker};
use crate::level::{LevelParams, MazeConfig};
use crate::rng::GameRng;
use crate::{CARVE_ORIGIN, MazeError};

/// Two-step moves between lattice cells: north, east, south, west
const CARVE_DIRS: [(isize, isize); 4] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// Number of odd-offset perimeter positions an exit can occupy
///
/// Zero for dimensions `generate` would reject.
pub fn max_exits(rows: usize, cols: usize) -> usize {
    if validate_dimensions(rows, cols).is_err() {
        return 0;
    }
    2 * ((rows - 1) / 2) + 2 * ((cols - 1) / 2)
}

/// Every odd-offset perimeter position: top and bottom for each odd column,
/// then left and right for each odd row
///
/// Empty for dimensions `generate` would reject.
pub fn perimeter_slots(rows: usize, cols: usize) -> Vec<Coord> {
    if validate_dimensions(rows, cols).is_err() {
        return Vec::new();
    }
    let mut slots = Vec::with_capacity(max_exits(rows, cols));
    for col in (1..cols).step_by(2) {
        slots.push(Coord::new(0, col));
        slots.push(Coord::new(rows - 1, col));
    }
    for row in (1..rows).step_by(2) {
        slots.push(Coord::new(row, 0));
        slots.push(Coord::new(row, cols - 1));
    }
    slots
}

/// Generate a maze with `exit_count` perimeter exits
///
/// `(1, 1)` seeds the walk. Exit 0 is the player start, the rest are doors.
pub fn generate(
    rows: usize,
    cols: usize,
    exit_count: usize,
    rng: &mut GameRng,
) -> Result<GridMaze, MazeError> {
    validate_dimensions(rows, cols)?;
    let available = max_exits(rows, cols);
    if exit_count == 0 {
        return Err(MazeError::NoExits);
    }
    if exit_count > available {
        return Err(MazeError::TooManyExits {
            requested: exit_count,
            available,
        });
    }

    debug!(
        "generating {rows}x{cols} maze with {exit_count} exits (seed {})",
        rng.seed()
    );

    let mut maze = GridMaze::new(rows, cols)?;
    carve_passages(&mut maze, rng)?;
    place_exits(&mut maze, exit_count, rng)?;
    Ok(maze)
}

/// Generate the maze for a 1-based level number using the configured scaling
pub fn generate_level(
    config: &MazeConfig,
    level: u32,
    rng: &mut GameRng,
) -> Result<(LevelParams, GridMaze), MazeError> {
    let params = config.params_for_level(level)?;
    let maze = generate(params.rows, params.cols, config.exit_count, rng)?;
    Ok((params, maze))
}

/// Unvisited lattice neighbours two steps away, strictly inside `[1,rows)x[1,cols)`
fn unvisited_neighbors(maze: &GridMaze, cell: Coord) -> ([Coord; 4], usize) {
    let mut found = [cell; 4];
    let mut q = 0;

    for (d_row, d_col) in CARVE_DIRS {
        let Some(next) = cell.offset(d_row, d_col) else {
            continue;
        };
        if next.row < 1 || next.col < 1 {
            continue;
        }
        if maze.at(next) == Some(Marker::Wall) {
            found[q] = next;
            q += 1;
        }
    }
    (found, q)
}

/// Depth-first carve from the origin until every lattice cell is visited
///
/// The top of the stack is always the frontier cell. A cell is only popped
/// once it has no unvisited neighbours left.
fn carve_passages(maze: &mut GridMaze, rng: &mut GameRng) -> Result<(), MazeError> {
    let (rows, cols) = (maze.rows(), maze.cols());
    let mut stack = Vec::with_capacity(rows * cols / 4);
    let origin = Coord::from(CARVE_ORIGIN);
    let mut carved = 0usize;

    maze.set(origin.row, origin.col, Marker::Visited)?;
    stack.push(origin);

    while let Some(&current) = stack.last() {
        let (neighbors, q) = unvisited_neighbors(maze, current);
        let Some(&next) = rng.choose(&neighbors[..q]) else {
            stack.pop();
            continue;
        };

        let wall = current.midpoint(&next);
        maze.set(wall.row, wall.col, Marker::Open)?;
        maze.set(next.row, next.col, Marker::Visited)?;
        stack.push(next);
        carved += 1;
    }

    // Visited is bookkeeping only
    for row in (1..rows).step_by(2) {
        for col in (1..cols).step_by(2) {
            if maze.get(row, col)? == Marker::Visited {
                maze.set(row, col, Marker::Open)?;
            }
        }
    }

    trace!("carved {carved} connectors in {rows}x{cols} maze");
    Ok(())
}

/// Breach the perimeter at `exit_count` distinct slots, indexed in draw order
fn place_exits(
    maze: &mut GridMaze,
    exit_count: usize,
    rng: &mut GameRng,
) -> Result<(), MazeError> {
    let mut slots = perimeter_slots(maze.rows(), maze.cols());
    rng.shuffle(&mut slots);

    for (index, &slot) in slots.iter().take(exit_count).enumerate() {
        maze.set(slot.row, slot.col, Marker::Exit(index))?;
        trace!("exit {index} at {slot}");
    }
    Ok(())
}
