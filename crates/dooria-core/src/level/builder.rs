//! Level building: walk a maze and request world content for every cell

use log::{debug, warn};
use strum::{Display, EnumIter};

use crate::maze::{Coord, Facing, GridMaze, Marker, WallMask, exit_facing, wall_mask};
use crate::{MazeError, PlacementFailed, SPAWN_EXIT};

/// Which kind of placement was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PlacementKind {
    Floor,
    Obstruction,
    Door,
    Spawn,
}

/// One piece of world content at a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Walkable tile; `walls` selects the edge art
    Floor { cell: Coord, walls: WallMask },
    /// Solid block
    Obstruction { cell: Coord },
    /// Door to a following area, rotated to `facing`
    Door { cell: Coord, facing: Facing },
    /// Player start
    Spawn { cell: Coord },
}

impl Placement {
    pub const fn kind(&self) -> PlacementKind {
        match self {
            Placement::Floor { .. } => PlacementKind::Floor,
            Placement::Obstruction { .. } => PlacementKind::Obstruction,
            Placement::Door { .. } => PlacementKind::Door,
            Placement::Spawn { .. } => PlacementKind::Spawn,
        }
    }

    pub const fn cell(&self) -> Coord {
        match self {
            Placement::Floor { cell, .. }
            | Placement::Obstruction { cell }
            | Placement::Door { cell, .. }
            | Placement::Spawn { cell } => *cell,
        }
    }
}

/// External world-placement collaborator
pub trait Placer {
    /// Whatever the world hands back for a placed object; never inspected here
    type Handle;

    fn place(&mut self, placement: Placement) -> Result<Self::Handle, PlacementFailed>;
}

/// Counts of what a build placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub floors: usize,
    pub obstructions: usize,
    pub doors: usize,
    pub spawns: usize,
}

impl BuildReport {
    fn record(&mut self, kind: PlacementKind) {
        match kind {
            PlacementKind::Floor => self.floors += 1,
            PlacementKind::Obstruction => self.obstructions += 1,
            PlacementKind::Door => self.doors += 1,
            PlacementKind::Spawn => self.spawns += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.floors + self.obstructions + self.doors + self.spawns
    }
}

/// Place every cell of `maze` in row-major order
///
/// Exit 0 gets a floor and the player spawn; other exits get a floor and a
/// door. The first placement failure stops the build; whatever was placed
/// before it stays placed.
pub fn build<P: Placer>(maze: &GridMaze, placer: &mut P) -> Result<BuildReport, MazeError> {
    let mut report = BuildReport::default();

    for (cell, marker) in maze.cells() {
        let Coord { row, col } = cell;
        match marker {
            Marker::Wall => {
                place(placer, Placement::Obstruction { cell }, &mut report)?;
            }
            Marker::Open | Marker::Visited => {
                let walls = wall_mask(maze, row, col)?;
                place(placer, Placement::Floor { cell, walls }, &mut report)?;
            }
            Marker::Exit(index) => {
                let walls = wall_mask(maze, row, col)?;
                place(placer, Placement::Floor { cell, walls }, &mut report)?;

                if index == SPAWN_EXIT {
                    place(placer, Placement::Spawn { cell }, &mut report)?;
                } else {
                    let facing = exit_facing(maze, row, col)?;
                    debug!(
                        "door {index} at {cell} facing {facing} (yaw {})",
                        facing.yaw_degrees()
                    );
                    place(placer, Placement::Door { cell, facing }, &mut report)?;
                }
            }
        }
    }

    debug!(
        "built {}x{} level: {} placements",
        maze.rows(),
        maze.cols(),
        report.total()
    );
    Ok(report)
}

fn place<P: Placer>(
    placer: &mut P,
    placement: Placement,
    report: &mut BuildReport,
) -> Result<(), MazeError> {
    let kind = placement.kind();
    let cell = placement.cell();

    placer.place(placement).map_err(|source| {
        warn!("placing {kind} at {cell} failed: {source}");
        MazeError::PlacementFailed { kind, cell, source }
    })?;
    report.record(kind);
    Ok(())
}
