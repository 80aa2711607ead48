/*
analyzer.rs

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

//! Read-only structural analysis of a maze.
//!
//! All functions here take the grid by shared reference and never mutate it,
//! so analyzing the same maze twice always returns the same values.
//!
//! A dead end is a passage cell with exactly one passage neighbor. A loop
//! junction is a passage cell with more than two passage neighbors; counting
//! them is a cheap proxy for cycle density, not a true cycle count.

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::grid::{Cell, Coordinate, Direction, Grid};

/// Qualitative difficulty of a maze.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Derived, read-only aggregate over a maze.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Number of wall cells.
    pub walls: usize,

    /// Number of passage cells.
    pub passages: usize,

    /// Total number of cells, including the border.
    pub total_cells: usize,

    /// Number of dead ends.
    pub dead_ends: usize,

    /// Number of loop junctions.
    pub loops: usize,

    /// Qualitative difficulty, derived from the counts above.
    pub difficulty: Difficulty,
}

/// Compute the statistics snapshot of a maze.
pub fn analyze(grid: &Grid) -> Statistics {
    let dead_ends: usize = count_dead_ends(grid);
    let loops: usize = count_loops(grid);
    Statistics {
        walls: grid.count(Cell::Wall),
        passages: grid.count(Cell::Passage),
        total_cells: grid.total_cells(),
        dead_ends,
        loops,
        difficulty: difficulty(dead_ends, loops, grid.total_cells()),
    }
}

/// Number of passage neighbors of an interior cell.
fn passage_neighbors(grid: &Grid, cell: Coordinate) -> usize {
    Direction::ALL
        .iter()
        .filter_map(|&direction| grid.neighbor(cell, direction))
        .filter(|&neighbor| grid.get(neighbor) == Cell::Passage)
        .count()
}

/// Count the passage cells with exactly one passage neighbor.
pub fn count_dead_ends(grid: &Grid) -> usize {
    interior_passages(grid)
        .filter(|&cell| passage_neighbors(grid, cell) == 1)
        .count()
}

/// Count the passage cells with more than two passage neighbors.
pub fn count_loops(grid: &Grid) -> usize {
    interior_passages(grid)
        .filter(|&cell| passage_neighbors(grid, cell) > 2)
        .count()
}

/// Iterate over the interior passage cells of a maze.
fn interior_passages(grid: &Grid) -> impl Iterator<Item = Coordinate> + '_ {
    (1..grid.height() - 1)
        .flat_map(move |row| (1..grid.width() - 1).map(move |col| (row, col)))
        .filter(move |&cell| grid.get(cell) == Cell::Passage)
}

/// Score a maze from its dead-end and loop-junction counts.
///
/// The score is (dead ends + loops) / total cells; above 0.2 the maze is
/// hard, above 0.1 medium, otherwise easy.
pub fn difficulty(dead_ends: usize, loops: usize, total_cells: usize) -> Difficulty {
    let score: f64 = (dead_ends + loops) as f64 / total_cells as f64;
    if score > 0.2 {
        Difficulty::Hard
    } else if score > 0.1 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// List the coordinates of all dead ends.
pub fn bottlenecks(grid: &Grid) -> Vec<Coordinate> {
    interior_passages(grid)
        .filter(|&cell| passage_neighbors(grid, cell) == 1)
        .collect()
}

/// For every interior passage cell, the number of hops of the shortest
/// 4-directional route to the exit. Cells with no route are omitted.
pub fn survey_path_lengths(grid: &Grid) -> Vec<usize> {
    interior_passages(grid)
        .filter_map(|cell| hops_to_exit(grid, cell))
        .collect()
}

/// Breadth-first search from `from` to the nearest exit cell, moving through
/// passages only.
fn hops_to_exit(grid: &Grid, from: Coordinate) -> Option<usize> {
    let mut queue: VecDeque<(Coordinate, usize)> = VecDeque::new();
    let mut visited: HashSet<Coordinate> = HashSet::new();
    queue.push_back((from, 0));
    visited.insert(from);

    while let Some((cell, hops)) = queue.pop_front() {
        if grid.get(cell) == Cell::Exit {
            return Some(hops);
        }
        for direction in Direction::ALL {
            if let Some(next) = grid.neighbor(cell, direction)
                && matches!(grid.get(next), Cell::Passage | Cell::Exit)
                && visited.insert(next)
            {
                queue.push_back((next, hops + 1));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Algorithm, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn difficulty_thresholds() {
        assert_eq!(difficulty(3, 1, 49), Difficulty::Easy);
        assert_eq!(difficulty(8, 3, 49), Difficulty::Hard);
        assert_eq!(difficulty(4, 2, 49), Difficulty::Medium);
        assert_eq!(difficulty(0, 0, 49), Difficulty::Easy);
    }

    #[test]
    fn analysis_is_idempotent() {
        let mut rng: StdRng = StdRng::seed_from_u64(17);
        let grid: Grid = generate(11, 11, Algorithm::Uniform, &mut rng).unwrap();
        let first: Statistics = analyze(&grid);
        let second: Statistics = analyze(&grid);
        assert_eq!(first, second);
        assert_eq!(first.total_cells, 121);
        assert_eq!(
            first.walls + first.passages + 2, // plus Start and Exit
            first.total_cells
        );
    }

    #[test]
    fn dead_ends_and_loops_on_a_known_shape() {
        // A plus-shaped junction: the center has four passage neighbors and
        // each arm tip has one.
        let mut grid: Grid = Grid::all_walls(7, 7).unwrap();
        grid.set((3, 3), Cell::Passage);
        grid.set((2, 3), Cell::Passage);
        grid.set((4, 3), Cell::Passage);
        grid.set((3, 2), Cell::Passage);
        grid.set((3, 4), Cell::Passage);
        assert_eq!(count_dead_ends(&grid), 4);
        assert_eq!(count_loops(&grid), 1);
        let mut tips: Vec<Coordinate> = bottlenecks(&grid);
        tips.sort_unstable();
        assert_eq!(tips, vec![(2, 3), (3, 2), (3, 4), (4, 3)]);
    }

    #[test]
    fn survey_measures_hops_to_the_exit() {
        // Straight corridor down the column next to the exit.
        let mut grid: Grid = Grid::all_walls(7, 7).unwrap();
        for row in 1..6 {
            grid.set((row, 5), Cell::Passage);
        }
        grid.stamp_endpoints();
        let mut lengths: Vec<usize> = survey_path_lengths(&grid);
        lengths.sort_unstable();
        // (5, 5) is one hop from the exit at (6, 5), and so on up the column.
        assert_eq!(lengths, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unreachable_cells_are_omitted_from_the_survey() {
        let mut grid: Grid = Grid::all_walls(7, 7).unwrap();
        grid.set((1, 1), Cell::Passage);
        grid.stamp_endpoints();
        assert!(survey_path_lengths(&grid).is_empty());
    }
}
