/*
generator.rs

Copyright 2026 The Mazeterm Authors

This file is part of Mazeterm.

Mazeterm is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazeterm is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazeterm. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Maze generation algorithms.
//!
//! [`generate`] builds a [`Grid`] with the requested [`Algorithm`]:
//!
//! * [`Algorithm::Backtracker`] carves a perfect maze (a spanning tree of the
//!   odd-indexed interior cells) by randomized depth-first search.
//! * [`Algorithm::Prim`] grows the maze from a frontier of walls adjacent to
//!   carved cells. The intervening cell is carved when a wall enters the
//!   frontier, not when it is selected, so the result can hold loops.
//! * [`Algorithm::Uniform`] carves each interior cell independently with a
//!   fixed probability and gives no connectivity guarantee; such a maze can
//!   legitimately be unsolvable.
//!
//! Every algorithm finishes by stamping the entrance and exit on the border.
//! The caller provides the random source, so a seeded generator reproduces
//! the same maze.

pub mod backtracker;
pub mod prim;
pub mod uniform;

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::grid::{Grid, GridError};

/// Maze generation algorithm.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[repr(usize)]
pub enum Algorithm {
    /// Recursive backtracking; produces a perfect maze.
    #[default]
    Backtracker,

    /// Randomized Prim's algorithm.
    Prim,

    /// Independent uniform-random carving.
    Uniform,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Backtracker => write!(f, "backtracker"),
            Algorithm::Prim => write!(f, "prim"),
            Algorithm::Uniform => write!(f, "uniform"),
        }
    }
}

/// Generate a maze of the given dimensions with the given algorithm.
///
/// # Errors
///
/// The function returns an error if a dimension is even or below the
/// minimum. Dimensions are validated before any carving work.
pub fn generate(
    width: usize,
    height: usize,
    algorithm: Algorithm,
    rng: &mut impl Rng,
) -> Result<Grid, GridError> {
    let mut grid: Grid = Grid::all_walls(width, height)?;
    debug!("Generating a {width}x{height} maze with the {algorithm} algorithm");
    match algorithm {
        Algorithm::Backtracker => backtracker::carve(&mut grid, rng),
        Algorithm::Prim => prim::carve(&mut grid, rng),
        Algorithm::Uniform => uniform::carve(&mut grid, rng),
    }
    grid.stamp_endpoints();
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Coordinate, Direction};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    /// Number of cells tagged Passage, Start, or Exit that are reachable
    /// from (1, 1) through 4-directional moves.
    fn reachable_open_cells(grid: &Grid) -> usize {
        let open = |cell: Cell| cell == Cell::Passage || cell == Cell::Start || cell == Cell::Exit;
        let mut seen: HashSet<Coordinate> = HashSet::new();
        let mut stack: Vec<Coordinate> = vec![(1, 1)];
        seen.insert((1, 1));
        while let Some(cell) = stack.pop() {
            for direction in Direction::ALL {
                if let Some(next) = grid.neighbor(cell, direction)
                    && open(grid.get(next))
                    && seen.insert(next)
                {
                    stack.push(next);
                }
            }
        }
        seen.iter().filter(|&&c| open(grid.get(c))).count()
    }

    #[test]
    fn every_algorithm_stamps_the_endpoints() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        for algorithm in [Algorithm::Backtracker, Algorithm::Prim, Algorithm::Uniform] {
            let grid: Grid = generate(9, 11, algorithm, &mut rng).unwrap();
            assert_eq!(grid.get((0, 1)), Cell::Start);
            assert_eq!(grid.get((10, 7)), Cell::Exit);
            assert_eq!(grid.count(Cell::Start), 1);
            assert_eq!(grid.count(Cell::Exit), 1);
        }
    }

    #[test]
    fn even_or_undersized_dimensions_are_rejected() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate(6, 9, Algorithm::Backtracker, &mut rng),
            Err(GridError::InvalidDimensions {
                width: 6,
                height: 9
            })
        );
        let grid: Grid = generate(7, 7, Algorithm::Backtracker, &mut rng).unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 7);
    }

    #[test]
    fn backtracker_mazes_are_perfect() {
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let grid: Grid = generate(13, 9, Algorithm::Backtracker, &mut rng).unwrap();

            // Spanning tree: every open cell is reachable from (1, 1).
            let open: usize =
                grid.count(Cell::Passage) + grid.count(Cell::Start) + grid.count(Cell::Exit);
            assert_eq!(reachable_open_cells(&grid), open, "seed {seed}");

            // No loop junctions.
            assert_eq!(crate::analyzer::count_loops(&grid), 0, "seed {seed}");
        }
    }

    #[test]
    fn prim_mazes_connect_the_entrance_to_the_exit() {
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let grid: Grid = generate(11, 11, Algorithm::Prim, &mut rng).unwrap();
            let open: usize =
                grid.count(Cell::Passage) + grid.count(Cell::Start) + grid.count(Cell::Exit);
            assert_eq!(reachable_open_cells(&grid), open, "seed {seed}");
        }
    }

    #[test]
    fn uniform_mazes_keep_the_border_walled() {
        let mut rng: StdRng = StdRng::seed_from_u64(99);
        let grid: Grid = generate(15, 9, Algorithm::Uniform, &mut rng).unwrap();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if grid.is_interior((row, col)) {
                    continue;
                }
                let expected: Cell = if (row, col) == grid.start() {
                    Cell::Start
                } else if (row, col) == grid.exit() {
                    Cell::Exit
                } else {
                    Cell::Wall
                };
                assert_eq!(grid.get((row, col)), expected, "at ({row}, {col})");
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a: StdRng = StdRng::seed_from_u64(42);
        let mut b: StdRng = StdRng::seed_from_u64(42);
        let first: Grid = generate(9, 9, Algorithm::Backtracker, &mut a).unwrap();
        let second: Grid = generate(9, 9, Algorithm::Backtracker, &mut b).unwrap();
        assert_eq!(first, second);
    }
}
