/*
solver.rs

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

//! Depth-first maze solving with backtracking.
//!
//! [`solve`] explores the maze recursively from (1, 1), always trying the
//! four directions in the same fixed order. A cell is enterable when it is
//! tagged Passage or Start; entering marks it Visited and pushes its
//! coordinate onto the path, and exhausting its neighbors reverts the tag
//! and pops the coordinate.
//!
//! The search succeeds on the coordinate (height - 2, width - 2), the cell
//! just inside the exit. That coordinate is checked before the tag, and the
//! Visited marks along the successful path are left in place so that the
//! rendered maze shows the solution.

use log::debug;

use crate::grid::{Cell, Coordinate, Direction, Grid};

/// Find a path from the entrance to the cell just inside the exit.
///
/// On success the grid keeps the Visited marks of the returned path; every
/// other explored cell has been reverted to a passage. On failure the grid
/// is back to its pre-solve tags, and None is returned.
pub fn solve(grid: &mut Grid) -> Option<Vec<Coordinate>> {
    let mut path: Vec<Coordinate> = Vec::new();
    if walk(grid, (1, 1), &mut path) {
        debug!("Solution found, {} steps", path.len());
        Some(path)
    } else {
        debug!("No solution");
        None
    }
}

/// Recursively explore from `cell`, backtracking on dead branches.
fn walk(grid: &mut Grid, cell: Coordinate, path: &mut Vec<Coordinate>) -> bool {
    // The arrival coordinate counts as a success whatever its tag.
    if cell == grid.inner_exit() {
        path.push(cell);
        return true;
    }

    let entry: Cell = grid.get(cell);
    match entry {
        Cell::Passage | Cell::Start => (),
        _ => return false,
    }
    grid.set(cell, Cell::Visited);
    path.push(cell);

    for direction in Direction::ALL {
        if let Some(next) = grid.neighbor(cell, direction)
            && walk(grid, next, path)
        {
            return true;
        }
    }

    // Dead branch: unmark and give the cell back to the maze. Reverting to
    // the entry tag keeps the Start cell intact when the search pokes into
    // the entrance and retreats.
    path.pop();
    grid.set(cell, entry);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Algorithm, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn perfect_mazes_are_always_solved() {
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let mut grid: Grid = generate(11, 9, Algorithm::Backtracker, &mut rng).unwrap();
            let path: Vec<Coordinate> = solve(&mut grid).expect("perfect maze must be solvable");

            assert_eq!(path[0], (1, 1), "seed {seed}");
            assert_eq!(*path.last().unwrap(), grid.inner_exit(), "seed {seed}");

            // Consecutive path entries are cardinal neighbors.
            for pair in path.windows(2) {
                let dr: isize = pair[1].0 as isize - pair[0].0 as isize;
                let dc: isize = pair[1].1 as isize - pair[0].1 as isize;
                assert_eq!(dr.abs() + dc.abs(), 1, "seed {seed}");
            }

            // The winning path keeps its Visited marks; the inner-exit cell
            // itself is never marked.
            for coordinate in &path[..path.len() - 1] {
                assert_eq!(grid.get(*coordinate), Cell::Visited, "seed {seed}");
            }
        }
    }

    #[test]
    fn walled_in_entrance_reports_no_solution() {
        let mut grid: Grid = Grid::all_walls(7, 7).unwrap();
        grid.stamp_endpoints();
        grid.set((1, 1), Cell::Passage);
        let before: Grid = grid.clone();
        assert_eq!(solve(&mut grid), None);
        // Backtracking restored every tag.
        assert_eq!(grid, before);
    }

    #[test]
    fn backtracked_cells_revert_to_passages() {
        // A corridor with one dead-end branch off it.
        let mut grid: Grid = Grid::all_walls(7, 7).unwrap();
        for col in 1..6 {
            grid.set((1, col), Cell::Passage);
        }
        grid.set((2, 1), Cell::Passage);
        grid.set((3, 1), Cell::Passage);
        for row in 2..6 {
            grid.set((row, 5), Cell::Passage);
        }
        grid.stamp_endpoints();

        let path: Vec<Coordinate> = solve(&mut grid).unwrap();
        assert_eq!(*path.last().unwrap(), (5, 5));
        // The dead-end branch was explored first (Down before Right) and
        // reverted.
        assert_eq!(grid.get((2, 1)), Cell::Passage);
        assert_eq!(grid.get((3, 1)), Cell::Passage);
        assert!(!path.contains(&(2, 1)));
    }
}
