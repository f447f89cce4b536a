use std::collections::{HashSet, VecDeque};

use dooria_core::GameRng;
use dooria_core::level::{Placement, Placer, build};
use dooria_core::maze::{
    Coord, Facing, GridMaze, Marker, WallMask, exit_facing, generate, max_exits, perimeter_slots,
    wall_mask,
};
use dooria_core::{MazeError, PlacementFailed};
use proptest::prelude::*;

/// Odd dimensions 3..=25 plus a seed and a valid exit count
fn maze_args() -> impl Strategy<Value = (usize, usize, usize, u64)> {
    (1usize..=12, 1usize..=12, any::<u64>()).prop_flat_map(|(h, w, seed)| {
        let (rows, cols) = (2 * h + 1, 2 * w + 1);
        (Just(rows), Just(cols), 1..=max_exits(rows, cols), Just(seed))
    })
}

fn lattice_cells(maze: &GridMaze) -> Vec<Coord> {
    maze.cells()
        .map(|(c, _)| c)
        .filter(Coord::is_lattice_cell)
        .collect()
}

/// Lattice cells reachable from (1, 1) over passable cells
fn reachable_lattice(maze: &GridMaze) -> HashSet<Coord> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([Coord::new(1, 1)]);
    seen.insert(Coord::new(1, 1));

    while let Some(cell) = queue.pop_front() {
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let Some(next) = cell.offset(dr, dc) else {
                continue;
            };
            if maze.at(next).is_some_and(|m| m.is_passable()) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.retain(Coord::is_lattice_cell);
    seen
}

fn interior_connectors(maze: &GridMaze) -> usize {
    maze.cells()
        .filter(|(c, m)| {
            (c.row % 2 == 1) != (c.col % 2 == 1)
                && !maze.is_perimeter(c.row, c.col)
                && m.is_passable()
        })
        .count()
}

struct CountingPlacer {
    placed: usize,
}

impl Placer for CountingPlacer {
    type Handle = ();

    fn place(&mut self, _placement: Placement) -> Result<(), PlacementFailed> {
        self.placed += 1;
        Ok(())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_lattice_cell_is_connected((rows, cols, exits, seed) in maze_args()) {
        let maze = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        let lattice = lattice_cells(&maze);

        prop_assert_eq!(reachable_lattice(&maze).len(), lattice.len());
        for cell in &lattice {
            prop_assert_eq!(maze.at(*cell), Some(Marker::Open));
        }
    }

    #[test]
    fn carving_forms_a_spanning_tree((rows, cols, exits, seed) in maze_args()) {
        let maze = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        prop_assert_eq!(interior_connectors(&maze), lattice_cells(&maze).len() - 1);
    }

    #[test]
    fn lattice_skeleton_stays_wall((rows, cols, exits, seed) in maze_args()) {
        let maze = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        for (cell, marker) in maze.cells() {
            if cell.row % 2 == 0 && cell.col % 2 == 0 {
                prop_assert_eq!(marker, Marker::Wall);
            }
            prop_assert_ne!(marker, Marker::Visited);
        }
    }

    #[test]
    fn exits_are_distinct_perimeter_slots((rows, cols, exits, seed) in maze_args()) {
        let maze = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        let found = maze.exits();
        let slots = perimeter_slots(rows, cols);

        let indices: Vec<usize> = found.iter().map(|&(n, _)| n).collect();
        prop_assert_eq!(indices, (0..exits).collect::<Vec<_>>());

        let cells: HashSet<Coord> = found.iter().map(|&(_, c)| c).collect();
        prop_assert_eq!(cells.len(), exits);
        for cell in cells {
            prop_assert!(slots.contains(&cell));
            prop_assert!(exit_facing(&maze, cell.row, cell.col).is_ok());
        }
    }

    #[test]
    fn same_seed_same_grid((rows, cols, exits, seed) in maze_args()) {
        let a = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        let b = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        prop_assert_eq!(a.to_string(), b.to_string());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn corners_keep_out_of_bounds_bits((rows, cols, exits, seed) in maze_args()) {
        let maze = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        let (last_r, last_c) = (rows - 1, cols - 1);

        let nw = wall_mask(&maze, 0, 0).unwrap();
        prop_assert!(nw.contains(WallMask::N | WallMask::W));
        let ne = wall_mask(&maze, 0, last_c).unwrap();
        prop_assert!(ne.contains(WallMask::N | WallMask::E));
        let sw = wall_mask(&maze, last_r, 0).unwrap();
        prop_assert!(sw.contains(WallMask::S | WallMask::W));
        let se = wall_mask(&maze, last_r, last_c).unwrap();
        prop_assert!(se.contains(WallMask::S | WallMask::E));
    }

    #[test]
    fn interior_cells_have_no_facing((rows, cols, exits, seed) in maze_args()) {
        let maze = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        for cell in lattice_cells(&maze) {
            prop_assert_eq!(
                exit_facing(&maze, cell.row, cell.col),
                Err(MazeError::NotOnPerimeter { row: cell.row, col: cell.col })
            );
        }
    }

    #[test]
    fn build_places_every_cell((rows, cols, exits, seed) in maze_args()) {
        let maze = generate(rows, cols, exits, &mut GameRng::new(seed)).unwrap();
        let mut placer = CountingPlacer { placed: 0 };
        let report = build(&maze, &mut placer).unwrap();

        prop_assert_eq!(report.floors + report.obstructions, rows * cols);
        prop_assert_eq!(report.spawns, 1);
        prop_assert_eq!(report.doors, exits - 1);
        prop_assert_eq!(placer.placed, report.total());
    }
}

#[test]
fn facing_matches_edge_for_every_slot() {
    let maze_text = "#0#2#\n5   4\n# # #\n6   1\n#7#3#";
    let maze: GridMaze = maze_text.parse().unwrap();

    for (index, cell) in maze.exits() {
        let expected = if cell.row == 4 {
            Facing::South
        } else if cell.col == 4 {
            Facing::East
        } else if cell.row == 0 {
            Facing::North
        } else {
            Facing::West
        };
        assert_eq!(
            exit_facing(&maze, cell.row, cell.col),
            Ok(expected),
            "exit {index} at {cell}"
        );
    }
}

#[test]
fn reflected_grids_give_reflected_masks() {
    // A 5x7 grid and its transpose: N<->W, E<->S swap under the transpose
    let tall: GridMaze = "#####\n#   #\n# ###\n#   #\n### #\n#   #\n#####"
        .parse()
        .unwrap();
    let wide: GridMaze = "#######\n#   # #\n# # # #\n# #   #\n#######".parse().unwrap();

    let transpose = |m: WallMask| {
        let pairs = [
            (WallMask::N, WallMask::W),
            (WallMask::NE, WallMask::SW),
            (WallMask::E, WallMask::S),
            (WallMask::SE, WallMask::SE),
            (WallMask::S, WallMask::E),
            (WallMask::SW, WallMask::NE),
            (WallMask::W, WallMask::N),
            (WallMask::NW, WallMask::NW),
        ];
        pairs
            .iter()
            .filter(|(from, _)| m.contains(*from))
            .fold(WallMask::empty(), |acc, (_, to)| acc | *to)
    };

    for row in 0..7 {
        for col in 0..5 {
            assert_eq!(tall.get(row, col), wide.get(col, row));
            let a = wall_mask(&tall, row, col).unwrap();
            let b = wall_mask(&wide, col, row).unwrap();
            assert_eq!(transpose(a), b, "cell ({row}, {col})");
        }
    }
}
